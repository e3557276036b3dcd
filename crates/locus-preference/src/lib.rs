//! # locus-preference
//!
//! Category preference model. Each place category carries a weight in
//! `[min_weight, max_weight]`; selecting a place nudges its categories up and
//! lets every other category drift slowly toward the floor. Remote
//! predictions are re-ranked by the product of their category weights.
//! Re-ranking only reorders, it never filters.

pub mod model;
pub mod rerank;
pub mod update;

pub use model::PreferenceModel;
pub use rerank::rerank_by_weight;
