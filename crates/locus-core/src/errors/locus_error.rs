use super::{RemoteError, StorageError};

/// Top-level error for every fallible Locus operation.
#[derive(Debug, thiserror::Error)]
pub enum LocusError {
    #[error("remote source error: {0}")]
    RemoteError(#[from] RemoteError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("malformed data under key {key}: {reason}")]
    MalformedData { key: String, reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type LocusResult<T> = Result<T, LocusError>;
