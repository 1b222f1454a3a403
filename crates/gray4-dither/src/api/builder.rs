//! Gray4Pipeline builder -- the primary entry point for the crate.
//!
//! [`Gray4Pipeline`] chains luminance reduction, optional rotation and
//! quantization behind a small fluent configuration.

use super::PipelineError;
use crate::buffer::{PixelBuffer, QuantizedBuffer};
use crate::dither::quantize;
use crate::luminance::to_grayscale;
use crate::rotate::rotate_90_clockwise;

/// Orientation change applied before quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Keep the source orientation.
    #[default]
    None,
    /// Rotate 90 degrees clockwise.
    Clockwise90,
}

/// Pixel pipeline from decoded pixels to a [`QuantizedBuffer`].
///
/// # Design
///
/// - Every stage consumes the buffer it is given and returns its successor
/// - [`process()`](Self::process) takes `&self`, so one pipeline can be
///   reused across images
/// - Single-channel input skips luminance reduction
///
/// # Example
///
/// ```
/// use gray4_dither::{Gray4Pipeline, PixelBuffer, Rotation};
///
/// let rgb = PixelBuffer::new(vec![200; 4 * 2 * 3], 4, 2, 3).unwrap();
/// let quantized = Gray4Pipeline::new()
///     .rotation(Rotation::Clockwise90)
///     .process(rgb)
///     .unwrap();
///
/// assert_eq!((quantized.width(), quantized.height()), (2, 4));
/// assert!(quantized.samples().iter().all(|v| v % 16 == 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Gray4Pipeline {
    rotation: Rotation,
}

impl Gray4Pipeline {
    /// Create a pipeline with no rotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rotation applied after grayscale reduction.
    #[inline]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Run the pipeline over decoded pixels.
    ///
    /// Applies:
    /// 1. Luminance reduction (skipped for single-channel input)
    /// 2. Rotation, if configured
    /// 3. Error diffusion quantization
    ///
    /// # Errors
    ///
    /// [`PipelineError::UnsupportedChannels`] for two-channel input.
    pub fn process(&self, pixels: PixelBuffer) -> Result<QuantizedBuffer, PipelineError> {
        let gray = if pixels.is_gray() {
            pixels
        } else {
            to_grayscale(pixels)?
        };

        let oriented = match self.rotation {
            Rotation::None => gray,
            Rotation::Clockwise90 => rotate_90_clockwise(gray)?,
        };

        quantize(oriented)
    }
}
