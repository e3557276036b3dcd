use serde::{Deserialize, Serialize};

/// Diagnostic snapshot of one cache namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Entries currently held, expired ones included until the next sweep.
    pub size: usize,
    pub hits: u64,
    pub misses: u64,
    /// `hits / (hits + misses)`, 0.0 before the first lookup.
    pub hit_rate: f64,
    /// `misses / (hits + misses)`, 0.0 before the first lookup.
    pub miss_rate: f64,
    pub oldest_age_ms: Option<i64>,
    pub newest_age_ms: Option<i64>,
    /// Key and access count of the most accessed entry.
    pub most_accessed: Option<(String, u64)>,
}
