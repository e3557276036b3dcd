//! # locus-cache
//!
//! Autocomplete result cache: TTL-validated entries, hit/miss accounting,
//! capacity eviction by a blended recency/frequency score, and independent
//! persistence per namespace.
//!
//! ## Namespaces
//!
//! | Namespace | Key | Default TTL |
//! |-----------|-----|-------------|
//! | Predictions | Normalized query text | 30 minutes |
//! | Details | Place id | 7 days |
//!
//! ## Eviction
//!
//! 1. Drop entries older than the TTL.
//! 2. Over capacity: drop the lowest `0.7 × accessCount − 0.3 × idleSeconds`
//!    until at capacity.

pub mod cache;
pub mod eviction;
pub mod namespace;
pub mod stats;

pub use cache::{AutocompleteCache, CacheSettings};
pub use eviction::{EvictionReport, EvictionWeights};
pub use namespace::{CacheNamespace, DetailCache, PredictionCache};
