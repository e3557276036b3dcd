//! # locus-usage
//!
//! Decay-weighted usage tracker. Terms that were used both often and recently
//! surface above terms that were merely frequent long ago.
//!
//! ```text
//! relevance = recencyWeight × exp(-ageDays / daysFactor)
//!           + frequencyWeight × similarCount / totalCount
//! ```

pub mod factors;
pub mod formula;
pub mod tracker;

pub use factors::RelevanceContext;
pub use formula::RelevanceBreakdown;
pub use tracker::{UsagePrediction, UsageTracker};
