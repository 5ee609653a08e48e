use anyhow::{Context, Result};
use da_core::config::Geometry;
use da_core::error::CoreError;
use da_core::frame::LumaFrame;
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Dimensions de sortie pour une image `aw × ah`.
///
/// `new_w` est la largeur fixe ; `new_h = max(min_height, round(ah / aw * new_w * vertical_scale))`.
///
/// # Errors
/// Returns [`CoreError::InvalidDimensions`] if either source dimension is zero.
///
/// # Example
/// ```
/// use da_core::config::Geometry;
/// use da_source::resize::target_size;
/// assert_eq!(target_size(100, 50, &Geometry::default()).unwrap(), (60, 15));
/// assert_eq!(target_size(400, 10, &Geometry::default()).unwrap(), (60, 10));
/// ```
pub fn target_size(aw: u32, ah: u32, geometry: &Geometry) -> Result<(u32, u32), CoreError> {
    if aw == 0 || ah == 0 {
        return Err(CoreError::InvalidDimensions {
            width: aw,
            height: ah,
        });
    }
    let new_w = geometry.width.max(1);
    let scaled =
        f64::from(ah) * f64::from(new_w) * f64::from(geometry.vertical_scale) / f64::from(aw);
    let new_h = (scaled.round() as u32).max(geometry.min_height).max(1);
    Ok((new_w, new_h))
}

/// Resizer réutilisable wrappant fast_image_resize, un canal 8 bits.
///
/// # Example
/// ```
/// use da_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch copy of the source (fast_image_resize wants `&mut` on it).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new bilinear resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear)),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// # Errors
    /// Returns an error if either buffer is inconsistent with its dimensions
    /// or the resize operation fails.
    ///
    /// # Example
    /// ```
    /// use da_source::resize::Resizer;
    /// use da_core::frame::LumaFrame;
    /// let mut r = Resizer::new();
    /// let src = LumaFrame::new(100, 100);
    /// let mut dst = LumaFrame::new(60, 30);
    /// r.resize_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_into(&mut self, src: &LumaFrame, dst: &mut LumaFrame) -> Result<()> {
        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image =
            Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8)
                .context("Invalid source dimensions")?;

        let mut dst_image =
            Image::from_slice_u8(dst.width, dst.height, &mut dst.data, PixelType::U8)
                .context("Invalid destination dimensions")?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;

        Ok(())
    }

    /// Resize `src` to the geometry's target size.
    ///
    /// # Errors
    /// Returns an error if `src` has a zero dimension or resizing fails.
    pub fn fit(&mut self, src: &LumaFrame, geometry: &Geometry) -> Result<LumaFrame> {
        let (w, h) = target_size(src.width, src.height, geometry)?;
        let mut dst = LumaFrame::new(w, h);
        self.resize_into(src, &mut dst)?;
        log::debug!("resize {}×{} → {w}×{h}", src.width, src.height);
        Ok(dst)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience for one-shot usage.
///
/// # Errors
/// Returns an error if the resize operation fails.
///
/// # Example
/// ```
/// use da_source::resize::resize_frame;
/// use da_core::frame::LumaFrame;
/// let src = LumaFrame::new(100, 100);
/// let dst = resize_frame(&src, 50, 20).unwrap();
/// assert_eq!((dst.width, dst.height), (50, 20));
/// ```
pub fn resize_frame(src: &LumaFrame, width: u32, height: u32) -> Result<LumaFrame> {
    let mut dst = LumaFrame::new(width, height);
    let mut resizer = Resizer::new();
    resizer.resize_into(src, &mut dst)?;
    Ok(dst)
}
