//! # locus-suggest
//!
//! The suggestion pipeline and the [`SuggestionEngine`] session service.
//!
//! ```text
//! query ─▶ debounce ─▶ favorites ┐
//!                      history   ├─▶ de-dup ─▶ re-rank remote ─▶ truncate
//!                      usage     │
//!                      remote ───┘ (prediction cache, then source with timeout)
//! ```

pub mod debounce;
pub mod engine;
pub mod merge;
pub mod remote;
pub mod saved_places;

pub use debounce::{RequestGuard, RequestTicket};
pub use engine::{EngineCacheStats, MaintenanceReport, SuggestionEngine, SuggestionOutcome};
pub use merge::{merge_candidates, SourceLists};
pub use saved_places::SavedPlaces;
