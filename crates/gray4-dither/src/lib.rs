//! gray4-dither: 4-bit grayscale quantization for e-paper panels
//!
//! This library turns decoded 8-bit pixel data into the packed 4-bit
//! grayscale payload that 16-level e-paper controllers expect.
//!
//! # Quick Start
//!
//! The [`Gray4Pipeline`] builder is the primary entry point:
//!
//! ```
//! use gray4_dither::{Gray4Pipeline, NibbleOrder, PackedPayload, PixelBuffer};
//!
//! let rgb = PixelBuffer::new(vec![255, 255, 255, 0, 0, 0], 2, 1, 3).unwrap();
//! let quantized = Gray4Pipeline::new().process(rgb).unwrap();
//!
//! let payload = PackedPayload::pack(&quantized, NibbleOrder::LowFirst);
//! assert_eq!(payload.bytes(), &[0x0F]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelBuffer (1 or >=3 channels, u8)
//!     |
//!     v
//! [to_grayscale]         0.30 R + 0.59 G + 0.11 B, round half up
//!     |
//!     v
//! [rotate_90_clockwise]  optional, (x, y) -> (height - 1 - y, x)
//!     |
//!     v
//! [quantize]             two-row error diffusion to {0, 16, ..., 240}
//!     |
//!     v
//! QuantizedBuffer
//!     |
//!     v
//! [PackedPayload::pack]  two pixels per byte
//! ```
//!
//! Every stage takes its input buffer by value and returns the buffer that
//! replaces it, so no stage ever observes a superseded buffer.
//!
//! # Quantization
//!
//! The quantizer walks the image in row-major order and keeps the
//! quantization residual of every pixel in a two-row rolling buffer
//! ([`ErrorRows`]). Each pixel picks up half of the residual of its left
//! neighbour and half of the residual of the pixel above. The rounded sum is
//! clamped to `[0, 255]` and the chosen level to `15`, so the output never
//! leaves `{0, 16, ..., 240}`.

pub mod api;
pub mod buffer;
pub mod dither;
pub mod luminance;
pub mod output;
pub mod rotate;


pub use api::{Gray4Pipeline, PipelineError, Rotation};
pub use buffer::{BufferError, PixelBuffer, QuantizedBuffer};
pub use dither::{quantize, quantize_in_place, ErrorRows, LEVELS, LEVEL_STEP};
pub use luminance::{luma, to_grayscale};
pub use output::{NibbleOrder, PackedPayload, Region};
pub use rotate::rotate_90_clockwise;

/// Bits per pixel of the packed output.
pub const BIT_DEPTH: u8 = 4;
