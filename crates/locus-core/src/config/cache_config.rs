use serde::{Deserialize, Serialize};

use super::defaults;

/// Autocomplete cache configuration, shared by both namespaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// TTL of prediction-list entries (seconds).
    pub prediction_ttl_secs: u64,
    /// TTL of place-detail entries (seconds).
    pub detail_ttl_secs: u64,
    /// Maximum entries per namespace before capacity eviction.
    pub max_entries: usize,
    /// Interval between periodic sweeps (seconds).
    pub sweep_interval_secs: u64,
    /// Weight of the access count in the eviction score.
    pub access_weight: f64,
    /// Weight of idle seconds in the eviction score.
    pub idle_weight: f64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            prediction_ttl_secs: defaults::DEFAULT_PREDICTION_TTL_SECS,
            detail_ttl_secs: defaults::DEFAULT_DETAIL_TTL_SECS,
            max_entries: defaults::DEFAULT_MAX_CACHE_ENTRIES,
            sweep_interval_secs: defaults::DEFAULT_CACHE_SWEEP_INTERVAL_SECS,
            access_weight: defaults::DEFAULT_EVICTION_ACCESS_WEIGHT,
            idle_weight: defaults::DEFAULT_EVICTION_IDLE_WEIGHT,
        }
    }
}
