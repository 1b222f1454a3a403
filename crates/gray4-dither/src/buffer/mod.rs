//! Pixel buffer types shared by all pipeline stages.
//!
//! [`PixelBuffer`] is the decoded input and the intermediate form between
//! stages. [`QuantizedBuffer`] is only produced by the quantizer and carries
//! the guarantee that every sample is a multiple of 16.

mod error;
mod pixel_buffer;
mod quantized;

pub use error::BufferError;
pub use pixel_buffer::PixelBuffer;
pub use quantized::QuantizedBuffer;
