use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::text::normalize;

/// One search term or place description tracked by the usage tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Normalized term, unique within the tracker.
    pub term: String,
    pub count: u64,
    pub last_used: DateTime<Utc>,
    /// Place last selected under this term, if the term came from a selection.
    #[serde(default)]
    pub place_id: Option<String>,
}

impl UsageRecord {
    /// First observation of `term`.
    pub fn new(term: &str, place_id: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            term: normalize(term),
            count: 1,
            last_used: now,
            place_id,
        }
    }

    /// Repeat observation: bump the count and refresh recency.
    pub fn observe(&mut self, place_id: Option<String>, now: DateTime<Utc>) {
        self.count += 1;
        self.last_used = self.last_used.max(now);
        if place_id.is_some() {
            self.place_id = place_id;
        }
    }
}
