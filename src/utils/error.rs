use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Extraction error: {message}")]
    ExtractionError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

pub type Result<T> = std::result::Result<T, LauncherError>;
