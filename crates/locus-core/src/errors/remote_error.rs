/// Failures reported by the remote place source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemoteError {
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("remote call timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    #[error("quota exceeded: {reason}")]
    Quota { reason: String },

    #[error("invalid API key: {reason}")]
    InvalidKey { reason: String },
}

impl RemoteError {
    /// Whether the request was rejected by the source rather than lost in transit.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Quota { .. } | Self::InvalidKey { .. })
    }
}
