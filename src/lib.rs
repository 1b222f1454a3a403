//! inkgray - 4-bit grayscale conversion for e-paper panels
//!
//! Decodes an image, reduces it to luminance, optionally rotates it,
//! dithers it to 16 gray levels and writes nibble-packed PNG files.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
