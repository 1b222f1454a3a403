//! Packed output for the container writer.
//!
//! [`PackedPayload`] holds two 4-bit pixels per byte, row by row, ready to be
//! handed to a 4-bit grayscale image encoder together with its width and
//! height.
//!
//! # Nibble Order
//!
//! Panels fed by this pipeline expect the even pixel of each pair in the
//! low nibble ([`NibbleOrder::LowFirst`], the default). Standard 4-bit PNG
//! readers expect it in the high nibble ([`NibbleOrder::HighFirst`]).

mod packed;
mod region;

pub use packed::{NibbleOrder, PackedPayload};
pub use region::Region;
