/// Persistent key-value store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("store lock poisoned")]
    LockPoisoned,
}
