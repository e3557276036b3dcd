//! Typed JSON access to an [`IKeyValueStore`].
//!
//! Two flavors: the strict `read_json`/`write_json`, and the lenient
//! `load_or_default`/`persist_or_log` used by components that must never
//! surface storage failures to the UI.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use locus_core::errors::{LocusError, LocusResult};
use locus_core::traits::IKeyValueStore;

/// Read and decode a value. Undecodable JSON is `MalformedData`.
pub async fn read_json<T, S>(store: &S, key: &str) -> LocusResult<Option<T>>
where
    T: DeserializeOwned,
    S: IKeyValueStore,
{
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| LocusError::MalformedData {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Encode and write a value.
pub async fn write_json<T, S>(store: &S, key: &str, value: &T) -> LocusResult<()>
where
    T: Serialize,
    S: IKeyValueStore,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}

/// Startup load: any failure is logged and yields `T::default()`.
pub async fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: IKeyValueStore,
{
    match read_json(store, key).await {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            warn!(key = %key, error = %e, "failed to load persisted state, starting empty");
            T::default()
        }
    }
}

/// Best-effort write: failures are logged and dropped. Returns whether the write landed.
pub async fn persist_or_log<T, S>(store: &S, key: &str, value: &T) -> bool
where
    T: Serialize,
    S: IKeyValueStore,
{
    match write_json(store, key, value).await {
        Ok(()) => true,
        Err(e) => {
            warn!(key = %key, error = %e, "failed to persist state, keeping in-memory copy");
            false
        }
    }
}
