use thiserror::Error;

/// Errors surfaced by the API client, local storage and configuration
#[derive(Error, Debug)]
pub enum Error {
    #[error("Music API error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

/// Crate-wide result alias
pub type Result<T, E = Error> = std::result::Result<T, E>;
