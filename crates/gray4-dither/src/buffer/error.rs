//! Error types for buffer construction

use std::fmt;

/// Error type for malformed pixel buffers.
///
/// Returned when the sample count does not match the declared shape or a
/// dimension is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Width, height or channel count is zero
    EmptyDimension {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Declared channel count
        channels: usize,
    },
    /// Sample count differs from `width * height * channels`
    LengthMismatch {
        /// Expected number of samples
        expected: usize,
        /// Number of samples supplied
        actual: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::EmptyDimension {
                width,
                height,
                channels,
            } => {
                write!(
                    f,
                    "buffer dimensions must be non-zero (got {}x{} with {} channels)",
                    width, height, channels
                )
            }
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {} samples, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}
