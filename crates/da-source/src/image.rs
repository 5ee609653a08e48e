use std::path::Path;

use anyhow::{Context, Result};
use da_core::frame::LumaFrame;

/// Charge une image et la convertit en luminance 8 bits (pondération Rec.709).
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use da_source::image::load_luma;
/// use std::path::Path;
/// let frame = load_luma(Path::new("assets/a.png")).unwrap();
/// ```
pub fn load_luma(path: &Path) -> Result<LumaFrame> {
    let img = image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let gray = img.to_luma8();
    let (width, height) = gray.dimensions();
    log::debug!("{}: {width}×{height}", path.display());
    LumaFrame::from_raw(width, height, gray.into_raw())
        .with_context(|| format!("Image inutilisable : {}", path.display()))
}
