//! In-memory store backed by `DashMap`.

use dashmap::DashMap;

use locus_core::errors::LocusResult;
use locus_core::traits::IKeyValueStore;

/// Process-local key-value store. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Synchronous peek, for assertions.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.clone())
    }
}

impl IKeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> LocusResult<Option<String>> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> LocusResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> LocusResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn remove_many(&self, keys: &[String]) -> LocusResult<()> {
        for key in keys {
            self.entries.remove(key);
        }
        Ok(())
    }

    async fn list_keys(&self) -> LocusResult<Vec<String>> {
        let mut keys: Vec<String> = self.entries.iter().map(|r| r.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }
}
