//! Image sources for dirascii: directory scan, extension filter,
//! decoding to luma and resizing.

pub mod image;
pub mod resize;
pub mod scan;
