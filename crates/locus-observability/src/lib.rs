//! # locus-observability
//!
//! `tracing` subscriber setup and the span macros the engine opens around
//! suggestion, selection, and cache work.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
