pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The peer closed the connection before delivering a promised number
    /// of bytes, during either the header or the payload read.
    #[error("incomplete frame: expected {expected} bytes, got {got}")]
    IncompleteFrame { expected: usize, got: usize },

    #[error("frame of length {length} exceeds the {limit} byte limit")]
    FrameTooLarge { length: usize, limit: usize },

    #[error("image decode failed: {0}")]
    DecodeFailure(#[from] image::ImageError),

    #[error("display error: {0}")]
    DisplayError(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("config file error: {0}")]
    ConfigFileError(#[from] config::ConfigError),
}
