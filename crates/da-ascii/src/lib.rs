//! ASCII conversion engine for dirascii.
//!
//! Converts luma frames to character grids.

pub mod luminance;
