//! The two cache namespaces the engine keeps.

use std::fmt;

use chrono::Duration;

use locus_core::config::CacheConfig;
use locus_core::constants::keys;
use locus_core::models::{PlaceCandidate, PlaceDetails};

use crate::AutocompleteCache;

/// Prediction lists keyed by normalized query.
pub type PredictionCache<S> = AutocompleteCache<Vec<PlaceCandidate>, S>;

/// Place details keyed by place id.
pub type DetailCache<S> = AutocompleteCache<PlaceDetails, S>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheNamespace {
    Predictions,
    Details,
}

impl CacheNamespace {
    /// Store key suffix, appended to the configured prefix.
    pub fn key_suffix(self) -> &'static str {
        match self {
            Self::Predictions => keys::PREDICTION_CACHE,
            Self::Details => keys::DETAIL_CACHE,
        }
    }

    /// Configured TTL. Query results drift faster than place metadata.
    pub fn ttl(self, config: &CacheConfig) -> Duration {
        let secs = match self {
            Self::Predictions => config.prediction_ttl_secs,
            Self::Details => config.detail_ttl_secs,
        };
        i64::try_from(secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX)
    }
}

impl fmt::Display for CacheNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predictions => f.write_str("predictions"),
            Self::Details => f.write_str("details"),
        }
    }
}
