use gray4_dither::PipelineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Image {width}x{height} cannot be split into {columns}x{rows} equal tiles")]
    TileMismatch {
        width: u32,
        height: u32,
        columns: u32,
        rows: u32,
    },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// True when the input could not be read or decoded.
    ///
    /// These failures are reported to the user as a diagnostic rather than
    /// treated as a broken pipeline.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, ConvertError::Decode(_))
    }
}
