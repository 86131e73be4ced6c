use alloc::string::String;

/// Errors from BMP decoding, encoding and grid transforms.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("not a BM bitmap (bad signature)")]
    InvalidSignature,

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: i32, height: i32 },

    #[error("cannot shrink {width}x{height} to {new_width}x{new_height}")]
    DimensionShrink {
        width: i32,
        height: i32,
        new_width: i32,
        new_height: i32,
    },

    #[error("rotation needs a square grid, got {width}x{height}")]
    NotSquare { width: usize, height: usize },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("failed to allocate {bytes} bytes")]
    AllocationFailure { bytes: usize },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}
