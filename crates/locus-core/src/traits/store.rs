use crate::errors::LocusResult;

/// Persistent string key-value store. Values are JSON encoded by the caller.
///
/// Implementations must tolerate being called between suspension points of a
/// single-threaded UI task; no call may block for long.
#[allow(async_fn_in_trait)]
pub trait IKeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> LocusResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> LocusResult<()>;
    async fn remove(&self, key: &str) -> LocusResult<()>;
    async fn remove_many(&self, keys: &[String]) -> LocusResult<()>;
    /// Every key currently held, used for prefix sweeps.
    async fn list_keys(&self) -> LocusResult<Vec<String>>;
}
