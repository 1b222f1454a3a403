//! Unified error type for the gray4-dither public API.
//!
//! [`PipelineError`] covers every way a pipeline stage can reject its input.
//! All of them are caller contract violations: nothing here is transient.

use crate::buffer::BufferError;
use crate::output::Region;
use std::fmt;

/// Unified error type for the gray4-dither public API.
///
/// # Example
///
/// ```
/// use gray4_dither::{to_grayscale, PipelineError, PixelBuffer};
///
/// let gray = PixelBuffer::gray(vec![0; 4], 2, 2).unwrap();
/// let err = to_grayscale(gray).unwrap_err();
/// assert!(matches!(err, PipelineError::UnsupportedChannels { channels: 1 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Malformed buffer shape
    Buffer(BufferError),
    /// Luminance reduction needs at least R, G and B
    UnsupportedChannels {
        /// Channel count of the rejected buffer
        channels: usize,
    },
    /// Stage only operates on single-channel buffers
    NotGrayscale {
        /// Channel count of the rejected buffer
        channels: usize,
    },
    /// Packing region extends past the image
    RegionOutOfBounds {
        /// The requested region
        region: Region,
        /// Image width
        width: usize,
        /// Image height
        height: usize,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Buffer(err) => write!(f, "invalid buffer: {}", err),
            PipelineError::UnsupportedChannels { channels } => write!(
                f,
                "luminance reduction needs at least 3 channels, got {}",
                channels
            ),
            PipelineError::NotGrayscale { channels } => write!(
                f,
                "expected a single-channel buffer, got {} channels",
                channels
            ),
            PipelineError::RegionOutOfBounds {
                region,
                width,
                height,
            } => write!(
                f,
                "region {}x{} at ({}, {}) exceeds {}x{} image",
                region.width, region.height, region.x, region.y, width, height
            ),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Buffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BufferError> for PipelineError {
    fn from(err: BufferError) -> Self {
        PipelineError::Buffer(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_region_out_of_bounds_message() {
        let err = PipelineError::RegionOutOfBounds {
            region: Region::new(4, 0, 4, 2),
            width: 6,
            height: 2,
        };
        assert_eq!(err.to_string(), "region 4x2 at (4, 0) exceeds 6x2 image");
    }

    #[test]
    fn test_buffer_error_is_source() {
        let err: PipelineError = BufferError::LengthMismatch {
            expected: 4,
            actual: 3,
        }
        .into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid buffer:"));
    }
}
