use crate::error::CoreError;

/// 10 caractères, du plus dense au plus clair. Index 0 = encre maximale.
pub const RAMP: &str = "@%#*+=-:. ";

/// Lookup table mapping luminance [0..255] → glyph.
///
/// Pre-computed once per run for O(1) per-pixel cost. Index for an intensity
/// `p` is `floor(p * (N - 1) / 255)`, so brighter samples land on the sparse
/// end of the ramp.
///
/// # Example
/// ```
/// use da_core::charset::GlyphLut;
/// let lut = GlyphLut::default();
/// assert_eq!(lut.map(0), '@');
/// assert_eq!(lut.map(255), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct GlyphLut {
    lut: [char; 256],
}

impl GlyphLut {
    /// Build a LUT from a ramp ordered densest→lightest.
    ///
    /// # Errors
    /// Returns [`CoreError::Charset`] if the ramp has fewer than 2 glyphs.
    ///
    /// # Example
    /// ```
    /// use da_core::charset::GlyphLut;
    /// let lut = GlyphLut::new("#.").unwrap();
    /// assert_eq!(lut.map(254), '#');
    /// assert!(GlyphLut::new("#").is_err());
    /// ```
    pub fn new(ramp: &str) -> Result<Self, CoreError> {
        let chars: Vec<char> = ramp.chars().collect();
        let len = chars.len();
        if len < 2 {
            return Err(CoreError::Charset { len });
        }
        Ok(Self::from_chars(&chars))
    }

    fn from_chars(chars: &[char]) -> Self {
        let mut lut = [' '; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = chars[glyph_index(i as u8, chars.len())];
        }
        Self { lut }
    }

    /// Map a luminance value [0..255] to a glyph.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }
}

impl Default for GlyphLut {
    fn default() -> Self {
        let chars: Vec<char> = RAMP.chars().collect();
        Self::from_chars(&chars)
    }
}

/// Index into a ramp of `len` glyphs for intensity `p`, clamped into `[0, len - 1]`.
///
/// # Example
/// ```
/// use da_core::charset::glyph_index;
/// assert_eq!(glyph_index(0, 10), 0);
/// assert_eq!(glyph_index(128, 10), 4);
/// assert_eq!(glyph_index(255, 10), 9);
/// ```
#[inline(always)]
#[must_use]
pub fn glyph_index(p: u8, len: usize) -> usize {
    let last = len.saturating_sub(1);
    (usize::from(p) * last / 255).min(last)
}
