//! Cache statistics.

use chrono::{DateTime, Utc};

use locus_core::models::CacheStats;

/// Per-entry facts needed for stats.
pub struct EntryFacts {
    pub key: String,
    pub timestamp: DateTime<Utc>,
    pub access_count: u64,
}

/// Build a [`CacheStats`] from entry facts and cumulative counters.
pub fn compute(entries: Vec<EntryFacts>, hits: u64, misses: u64, now: DateTime<Utc>) -> CacheStats {
    let lookups = hits + misses;
    let ages = entries
        .iter()
        .map(|e| (now - e.timestamp).num_milliseconds().max(0));

    let most_accessed = entries
        .iter()
        .max_by(|a, b| {
            a.access_count
                .cmp(&b.access_count)
                .then_with(|| b.key.cmp(&a.key))
        })
        .map(|e| (e.key.clone(), e.access_count));

    CacheStats {
        size: entries.len(),
        hits,
        misses,
        hit_rate: rate(hits, lookups),
        miss_rate: rate(misses, lookups),
        oldest_age_ms: ages.clone().max(),
        newest_age_ms: ages.min(),
        most_accessed,
    }
}

fn rate(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
