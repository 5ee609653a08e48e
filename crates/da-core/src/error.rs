use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Ramp too short to map intensities.
    #[error("Rampe invalide : {len} caractère(s), minimum 2")]
    Charset {
        /// Number of glyphs found.
        len: usize,
    },

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel buffer length does not match the declared dimensions.
    #[error("Taille de buffer invalide : {actual} octets pour {width}×{height}")]
    BufferSize {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
        /// Actual buffer length.
        actual: usize,
    },
}
