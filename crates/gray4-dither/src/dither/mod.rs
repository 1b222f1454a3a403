//! Error diffusion quantization to 16 gray levels.
//!
//! Reduces 8-bit gray (256 levels) to the 4-bit palette
//! `{0, 16, 32, ..., 240}` in place.
//!
//! # Kernel
//!
//! Every pixel stores its full quantization residual in the
//! [`ErrorRows`] slot of its own column. Two later pixels read that slot,
//! each with weight 1/2:
//!
//! ```text
//!    X   1/2
//!   1/2
//! ```
//!
//! the next pixel in the same row (through `next_row_errors[x - 1]`) and the
//! pixel directly below (through `current_row_errors[x]` once the rows have
//! swapped). Residuals that would land outside the image are dropped.
//!
//! # Range
//!
//! The diffused sum is clamped to `[0, 255]` on both sides and the chosen
//! level is capped at 15, so a sample can never be written as 256 or wrap
//! around from a negative value.

mod error_rows;

pub use error_rows::ErrorRows;

use crate::api::PipelineError;
use crate::buffer::{PixelBuffer, QuantizedBuffer};

/// Number of output gray levels.
pub const LEVELS: u8 = 16;

/// Distance between adjacent output levels.
pub const LEVEL_STEP: u8 = 16;

/// Share of a stored residual picked up by each of the two readers.
const DIFFUSION_WEIGHT: f32 = 0.5;

const MAX_SAMPLE: f32 = 255.0;

/// Quantize a single-channel buffer to 16 levels.
///
/// The buffer is consumed and its storage reused for the result.
///
/// ```
/// use gray4_dither::{quantize, PixelBuffer};
///
/// let gray = PixelBuffer::gray(vec![128, 0], 2, 1).unwrap();
/// let quantized = quantize(gray).unwrap();
/// assert_eq!(quantized.samples(), &[128, 0]);
/// ```
///
/// # Errors
///
/// [`PipelineError::NotGrayscale`] for multi-channel buffers.
pub fn quantize(buffer: PixelBuffer) -> Result<QuantizedBuffer, PipelineError> {
    if !buffer.is_gray() {
        return Err(PipelineError::NotGrayscale {
            channels: buffer.channels(),
        });
    }

    let (width, height) = (buffer.width(), buffer.height());
    let mut samples = buffer.into_samples();
    quantize_in_place(&mut samples, width, height);

    Ok(QuantizedBuffer::from_quantized(samples, width, height))
}

/// Quantize raw row-major gray samples to 16 levels in place.
///
/// Processing is strictly row-major (top to bottom, left to right); each
/// pixel only sees residuals from pixels already visited.
///
/// # Panics
///
/// Panics if `samples.len() != width * height`.
pub fn quantize_in_place(samples: &mut [u8], width: usize, height: usize) {
    assert_eq!(
        samples.len(),
        width * height,
        "sample count must equal width * height"
    );

    let mut errors = ErrorRows::new(width);

    for (y, row) in samples.chunks_exact_mut(width.max(1)).enumerate() {
        for x in 0..width {
            let mut err = 0.0f32;
            if x > 0 {
                err += errors.next_row_errors()[x - 1] * DIFFUSION_WEIGHT;
            }
            if y > 0 {
                err += errors.current_row_errors()[x] * DIFFUSION_WEIGHT;
            }

            let sum = (f32::from(row[x]) + err).clamp(0.0, MAX_SAMPLE);
            let target = nearest_level(sum);

            errors.deposit(x, sum - f32::from(target));
            row[x] = target;
        }
        errors.advance_row();
    }
}

/// Round a diffused value half-up to the nearest output level.
#[inline]
fn nearest_level(value: f32) -> u8 {
    let level = ((value / f32::from(LEVEL_STEP)) + 0.5) as u8;
    level.min(LEVELS - 1) * LEVEL_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(samples: Vec<u8>, width: usize, height: usize) -> PixelBuffer {
        PixelBuffer::gray(samples, width, height).unwrap()
    }

    #[test]
    fn test_nearest_level_rounds_half_up() {
        assert_eq!(nearest_level(0.0), 0);
        assert_eq!(nearest_level(7.9), 0);
        assert_eq!(nearest_level(8.0), 16);
        assert_eq!(nearest_level(128.0), 128);
        assert_eq!(nearest_level(231.0), 224);
        assert_eq!(nearest_level(232.0), 240);
    }

    #[test]
    fn test_nearest_level_never_exceeds_240() {
        assert_eq!(nearest_level(248.0), 240);
        assert_eq!(nearest_level(255.0), 240);
    }

    #[test]
    fn test_first_row_pair() {
        let result = quantize(gray(vec![128, 0], 2, 1)).unwrap();
        assert_eq!(result.samples(), &[128, 0]);
    }

    #[test]
    fn test_residual_flows_right() {
        // 120 -> 128 (residual -8), next pixel sees 20 - 4 = 16 -> 16
        let result = quantize(gray(vec![120, 20], 2, 1)).unwrap();
        assert_eq!(result.samples(), &[128, 16]);
    }

    #[test]
    fn test_residual_flows_down() {
        // 120 -> 128 (residual -8), pixel below sees 20 - 4 = 16 -> 16
        let result = quantize(gray(vec![120, 20], 1, 2)).unwrap();
        assert_eq!(result.samples(), &[128, 16]);
    }

    #[test]
    fn test_outputs_are_multiples_of_16() {
        let samples: Vec<u8> = (0..64 * 64).map(|i| ((i * 37) % 256) as u8).collect();
        let result = quantize(gray(samples, 64, 64)).unwrap();
        for (i, &v) in result.samples().iter().enumerate() {
            assert_eq!(v % 16, 0, "sample {i} = {v} is not a multiple of 16");
            assert!(v <= 240, "sample {i} = {v} exceeds 240");
        }
    }

    #[test]
    fn test_pure_black_stays_black() {
        let result = quantize(gray(vec![0; 100], 10, 10)).unwrap();
        assert!(result.samples().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_pure_white_saturates_at_240() {
        let result = quantize(gray(vec![255; 100], 10, 10)).unwrap();
        assert!(result.samples().iter().all(|&v| v == 240));
    }

    #[test]
    fn test_exact_levels_are_untouched() {
        let samples: Vec<u8> = (0..16).map(|l| l * 16).collect();
        let result = quantize(gray(samples.clone(), 4, 4)).unwrap();
        assert_eq!(result.samples(), samples.as_slice());
    }

    #[test]
    fn test_rejects_color_buffer() {
        let rgb = PixelBuffer::new(vec![0; 12], 2, 2, 3).unwrap();
        assert_eq!(
            quantize(rgb).unwrap_err(),
            PipelineError::NotGrayscale { channels: 3 }
        );
    }

    #[test]
    #[should_panic(expected = "width * height")]
    fn test_in_place_length_mismatch_panics() {
        let mut samples = vec![0u8; 5];
        quantize_in_place(&mut samples, 2, 3);
    }
}
