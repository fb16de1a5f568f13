pub type IconResult<T> = Result<T, IconError>;

#[derive(thiserror::Error, Debug)]
pub enum IconError {
    #[error("invalid dimension: {width}x{height} (both sides must be at least 1)")]
    InvalidDimension { width: u32, height: u32 },

    #[error("pixel buffer length mismatch: expected {expected} pixels, got {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    #[error("compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

impl IconError {
    pub fn invalid_size(size: u32) -> Self {
        Self::InvalidDimension {
            width: size,
            height: size,
        }
    }
}
