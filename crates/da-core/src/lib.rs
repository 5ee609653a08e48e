//! Configuration, types, and shared structures for dirascii.
//!
//! This crate contains the glyph ramp, the luma/grid buffers, the
//! configuration and the error types used across the workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::{GlyphLut, RAMP};
pub use config::{ConvertConfig, ErrorPolicy, Geometry};
pub use error::CoreError;
pub use frame::{AsciiGrid, LumaFrame};
