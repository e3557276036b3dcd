use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A cached value with its bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    /// Creation or refresh time. TTL is measured from here.
    pub timestamp: DateTime<Utc>,
    pub access_count: u64,
    pub last_accessed: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// Fresh entry stamped at `now` with one access.
    pub fn new(data: T, now: DateTime<Utc>) -> Self {
        Self {
            data,
            timestamp: now,
            access_count: 1,
            last_accessed: now,
        }
    }

    /// An entry is valid iff `now - timestamp <= ttl`.
    pub fn is_valid(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.timestamp <= ttl
    }

    /// Record a hit.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.access_count += 1;
        self.last_accessed = now;
    }
}
