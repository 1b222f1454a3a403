//! Luminance reduction from RGB(A) to single-channel gray.
//!
//! Uses the classic 0.30 / 0.59 / 0.11 weights with half-up rounding. The
//! weighted sum is formed in `f32` and rounded in `f64`; changing either
//! precision shifts a handful of inputs by one gray level.

use crate::api::PipelineError;
use crate::buffer::PixelBuffer;

const RED_WEIGHT: f32 = 0.30;
const GREEN_WEIGHT: f32 = 0.59;
const BLUE_WEIGHT: f32 = 0.11;

/// Gray value of a single RGB triple.
///
/// ```
/// use gray4_dither::luma;
///
/// assert_eq!(luma(255, 255, 255), 255);
/// assert_eq!(luma(0, 0, 0), 0);
/// assert_eq!(luma(255, 0, 0), 77);
/// ```
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let value = f32::from(r) * RED_WEIGHT + f32::from(g) * GREEN_WEIGHT + f32::from(b) * BLUE_WEIGHT;
    (f64::from(value) + 0.5) as u8
}

/// Reduce a color buffer to single-channel gray.
///
/// The first three channels are read as R, G, B; any further channels are
/// ignored. The input buffer is consumed and released once the gray buffer
/// exists.
///
/// # Errors
///
/// [`PipelineError::UnsupportedChannels`] if the buffer has fewer than three
/// channels.
pub fn to_grayscale(buffer: PixelBuffer) -> Result<PixelBuffer, PipelineError> {
    let channels = buffer.channels();
    if channels < 3 {
        return Err(PipelineError::UnsupportedChannels { channels });
    }

    let gray: Vec<u8> = buffer.pixels().map(|px| luma(px[0], px[1], px[2])).collect();
    let (width, height) = (buffer.width(), buffer.height());
    drop(buffer);

    Ok(PixelBuffer::gray(gray, width, height)?)
}
