//! 90-degree clockwise rotation for portrait-mounted panels.

use crate::api::PipelineError;
use crate::buffer::PixelBuffer;

/// Rotate a single-channel buffer 90 degrees clockwise.
///
/// A `width x height` buffer becomes `height x width`; the source pixel at
/// `(x, y)` lands at `(height - 1 - y, x)`. The west edge of the source
/// becomes the north edge of the result.
///
/// ```
/// use gray4_dither::{rotate_90_clockwise, PixelBuffer};
///
/// // 2x1: [A B]  ->  1x2: [A]
/// //                      [B]
/// let row = PixelBuffer::gray(vec![1, 2], 2, 1).unwrap();
/// let column = rotate_90_clockwise(row).unwrap();
/// assert_eq!((column.width(), column.height()), (1, 2));
/// assert_eq!(column.samples(), &[1, 2]);
/// ```
///
/// # Errors
///
/// [`PipelineError::NotGrayscale`] for multi-channel buffers.
pub fn rotate_90_clockwise(buffer: PixelBuffer) -> Result<PixelBuffer, PipelineError> {
    if !buffer.is_gray() {
        return Err(PipelineError::NotGrayscale {
            channels: buffer.channels(),
        });
    }

    let (width, height) = (buffer.width(), buffer.height());
    let target_width = height;
    let src = buffer.samples();
    let mut rotated = vec![0u8; src.len()];

    for (y, row) in src.chunks_exact(width).enumerate() {
        let target_x = height - 1 - y;
        for (x, &value) in row.iter().enumerate() {
            rotated[x * target_width + target_x] = value;
        }
    }
    drop(buffer);

    Ok(PixelBuffer::gray(rotated, target_width, width)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x4 "L" shape:
    ///
    /// ```text
    /// X . .
    /// X . .
    /// X . .
    /// X X X
    /// ```
    fn l_shape() -> PixelBuffer {
        #[rustfmt::skip]
        let samples = vec![
            9, 0, 0,
            9, 0, 0,
            9, 0, 0,
            9, 9, 9,
        ];
        PixelBuffer::gray(samples, 3, 4).unwrap()
    }

    #[test]
    fn test_l_shape_rotates_clockwise() {
        let rotated = rotate_90_clockwise(l_shape()).unwrap();
        assert_eq!((rotated.width(), rotated.height()), (4, 3));

        // Clockwise: the vertical stroke becomes the top row and the foot
        // of the L ends up on the left edge.
        #[rustfmt::skip]
        let expected = [
            9, 9, 9, 9,
            9, 0, 0, 0,
            9, 0, 0, 0,
        ];
        assert_eq!(rotated.samples(), &expected);
    }

    #[test]
    fn test_top_left_moves_to_top_right() {
        // 2x3 buffer, only (0, 0) is marked
        let mut samples = vec![0u8; 6];
        samples[0] = 42;
        let buffer = PixelBuffer::gray(samples, 2, 3).unwrap();

        let rotated = rotate_90_clockwise(buffer).unwrap();
        assert_eq!((rotated.width(), rotated.height()), (3, 2));
        assert_eq!(rotated.get(2, 0), 42);
        assert_eq!(rotated.samples().iter().filter(|&&v| v == 42).count(), 1);
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let original = PixelBuffer::gray((0..35).collect(), 5, 7).unwrap();
        let mut buffer = original.clone();
        for _ in 0..4 {
            buffer = rotate_90_clockwise(buffer).unwrap();
        }
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_two_rotations_match_half_turn() {
        let original = PixelBuffer::gray((0..12).collect(), 4, 3).unwrap();
        let half = rotate_90_clockwise(rotate_90_clockwise(original.clone()).unwrap()).unwrap();
        let reversed: Vec<u8> = original.samples().iter().rev().copied().collect();
        assert_eq!(half.samples(), reversed.as_slice());
    }

    #[test]
    fn test_rejects_color_buffer() {
        let rgb = PixelBuffer::new(vec![0; 12], 2, 2, 3).unwrap();
        assert_eq!(
            rotate_90_clockwise(rgb).unwrap_err(),
            PipelineError::NotGrayscale { channels: 3 }
        );
    }
}
