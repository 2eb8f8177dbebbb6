use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZoomError {
    #[error("Invalid scale sequence: {0}")]
    InvalidSequence(String),

    #[error("Invalid zoom range: {0}")]
    InvalidZoomRange(String),

    #[error("Unknown gridset: {0}")]
    UnknownGridset(String),

    #[error("Malformed gridset identifier: {0}")]
    MalformedGridset(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ZoomError {
    fn from(e: toml::de::Error) -> Self {
        ZoomError::Config(e.to_string())
    }
}

impl From<std::io::Error> for ZoomError {
    fn from(e: std::io::Error) -> Self {
        ZoomError::Config(e.to_string())
    }
}

pub type ZoomResult<T> = Result<T, ZoomError>;
