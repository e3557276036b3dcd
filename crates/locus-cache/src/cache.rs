//! Generic TTL + capacity cache persisted as one store entry per namespace.
//!
//! Lookups and eviction are synchronous map operations; only persistence
//! suspends. Storage failures are logged and never reach the caller.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Duration;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use locus_core::config::LocusConfig;
use locus_core::errors::{LocusError, LocusResult};
use locus_core::models::{CacheEntry, CacheStats};
use locus_core::traits::{IClock, IKeyValueStore};
use locus_storage::{persist_or_log, read_json, Snapshot};

use crate::eviction::{self, EvictionCandidate, EvictionReport, EvictionWeights};
use crate::namespace::CacheNamespace;
use crate::stats::{self, EntryFacts};

/// Construction parameters of one cache namespace.
#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub namespace: CacheNamespace,
    /// Store key the namespace is persisted under.
    pub store_key: String,
    pub ttl: Duration,
    pub max_entries: usize,
    pub weights: EvictionWeights,
}

impl CacheSettings {
    /// Settings for `namespace` derived from the engine config.
    pub fn for_namespace(namespace: CacheNamespace, config: &LocusConfig) -> Self {
        Self {
            namespace,
            store_key: config.storage.key(namespace.key_suffix()),
            ttl: namespace.ttl(&config.cache),
            max_entries: config.cache.max_entries,
            weights: EvictionWeights {
                access: config.cache.access_weight,
                idle: config.cache.idle_weight,
            },
        }
    }
}

type PersistedEntries<T> = Vec<(String, CacheEntry<T>)>;

/// Autocomplete result cache.
pub struct AutocompleteCache<T, S> {
    settings: CacheSettings,
    entries: DashMap<String, CacheEntry<T>>,
    hits: AtomicU64,
    misses: AtomicU64,
    store: Arc<S>,
    clock: Arc<dyn IClock>,
}

impl<T, S> AutocompleteCache<T, S>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync,
    S: IKeyValueStore,
{
    /// Create an empty cache. Fails on zero capacity or a non-positive TTL.
    pub fn new(settings: CacheSettings, store: Arc<S>, clock: Arc<dyn IClock>) -> LocusResult<Self> {
        if settings.max_entries == 0 {
            return Err(LocusError::InvalidArgument(format!(
                "{} cache capacity must be at least 1",
                settings.namespace
            )));
        }
        if settings.ttl <= Duration::zero() {
            return Err(LocusError::InvalidArgument(format!(
                "{} cache TTL must be positive",
                settings.namespace
            )));
        }
        Ok(Self {
            settings,
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            store,
            clock,
        })
    }

    pub fn settings(&self) -> &CacheSettings {
        &self.settings
    }

    /// Look up `key`. Only entries within the TTL are hits; an expired entry
    /// is dropped on sight.
    pub fn get(&self, key: &str) -> Option<T> {
        let now = self.clock.now();
        let mut expired = false;

        let found = match self.entries.get_mut(key) {
            Some(mut entry) if entry.is_valid(now, self.settings.ttl) => {
                entry.touch(now);
                Some(entry.data.clone())
            }
            Some(_) => {
                expired = true;
                None
            }
            None => None,
        };

        if expired {
            self.entries.remove(key);
        }

        match found {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(namespace = %self.settings.namespace, key = %key, "cache hit");
                Some(value)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(namespace = %self.settings.namespace, key = %key, expired, "cache miss");
                None
            }
        }
    }

    /// Whether a valid entry exists, without counting a lookup.
    pub fn contains(&self, key: &str) -> bool {
        let now = self.clock.now();
        self.entries
            .get(key)
            .is_some_and(|e| e.is_valid(now, self.settings.ttl))
    }

    /// Insert or refresh `key`, then evict and persist.
    ///
    /// Refreshing a still-valid entry keeps its access history and counts the
    /// write as one more access.
    pub async fn put(&self, key: impl Into<String>, value: T) {
        let key = key.into();
        let now = self.clock.now();
        let ttl = self.settings.ttl;

        let prior_accesses = self
            .entries
            .get(&key)
            .filter(|e| e.is_valid(now, ttl))
            .map(|e| e.access_count);

        let mut entry = CacheEntry::new(value, now);
        if let Some(count) = prior_accesses {
            entry.access_count = count + 1;
        }
        self.entries.insert(key, entry);

        self.evict();
        self.persist().await;
    }

    /// Drop `key` and persist.
    pub async fn remove(&self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.persist().await;
        }
    }

    /// Drop every entry and delete the persisted namespace.
    pub async fn clear(&self) {
        self.entries.clear();
        if let Err(e) = self.store.remove(&self.settings.store_key).await {
            warn!(
                namespace = %self.settings.namespace,
                error = %e,
                "failed to delete persisted cache"
            );
        }
    }

    /// Drop expired entries, then the lowest-scoring entries while over capacity.
    pub fn evict(&self) -> EvictionReport {
        let now = self.clock.now();
        let ttl = self.settings.ttl;

        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_valid(now, ttl));
        let expired = before - self.entries.len();

        let len = self.entries.len();
        let overflow = if len > self.settings.max_entries {
            let candidates: Vec<EvictionCandidate> = self
                .entries
                .iter()
                .map(|r| EvictionCandidate {
                    key: r.key().clone(),
                    access_count: r.access_count,
                    last_accessed: r.last_accessed,
                })
                .collect();
            let victims = eviction::select_victims(
                candidates,
                len - self.settings.max_entries,
                now,
                self.settings.weights,
            );
            for key in &victims {
                self.entries.remove(key);
            }
            victims.len()
        } else {
            0
        };

        let report = EvictionReport { expired, overflow };
        if report.total() > 0 {
            debug!(
                namespace = %self.settings.namespace,
                expired,
                overflow,
                remaining = self.entries.len(),
                "cache eviction"
            );
        }
        report
    }

    /// Periodic maintenance: evict, and persist if anything was dropped.
    pub async fn sweep(&self) -> EvictionReport {
        let report = self.evict();
        if report.total() > 0 {
            self.persist().await;
        }
        report
    }

    /// Restore the persisted namespace. Expired entries are discarded and
    /// capacity is enforced. Unreadable snapshots load as empty.
    pub async fn load(&self) -> usize {
        let key = &self.settings.store_key;
        let restored = match read_json::<Snapshot, S>(self.store.as_ref(), key).await {
            Ok(Some(snapshot)) => snapshot.open::<PersistedEntries<T>>(key),
            Ok(None) => Ok(Vec::new()),
            Err(e) => Err(e),
        };

        let entries = match restored {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    namespace = %self.settings.namespace,
                    error = %e,
                    "failed to restore cache, starting empty"
                );
                return 0;
            }
        };

        for (key, entry) in entries {
            self.entries.insert(key, entry);
        }
        self.evict();
        self.entries.len()
    }

    /// Write the namespace to the store. Returns whether the write landed.
    pub async fn persist(&self) -> bool {
        let mut entries: PersistedEntries<T> = self
            .entries
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let snapshot = match Snapshot::seal(&entries) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(namespace = %self.settings.namespace, error = %e, "failed to encode cache");
                return false;
            }
        };
        persist_or_log(self.store.as_ref(), &self.settings.store_key, &snapshot).await
    }

    /// Size, hit/miss rates, entry ages, and the most accessed key.
    pub fn stats(&self) -> CacheStats {
        let facts = self
            .entries
            .iter()
            .map(|r| EntryFacts {
                key: r.key().clone(),
                timestamp: r.timestamp,
                access_count: r.access_count,
            })
            .collect();
        stats::compute(
            facts,
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
            self.clock.now(),
        )
    }

    /// Raw entry, expired or not, for diagnostics.
    pub fn entry(&self, key: &str) -> Option<CacheEntry<T>> {
        self.entries.get(key).map(|e| e.clone())
    }

    /// Entries held, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Held keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.iter().map(|r| r.key().clone()).collect();
        keys.sort();
        keys
    }
}
