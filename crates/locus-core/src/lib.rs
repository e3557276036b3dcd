//! # locus-core
//!
//! Foundation crate for the Locus place-suggestion engine.
//! Defines the data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LocusConfig;
pub use errors::{LocusError, LocusResult, RemoteError, StorageError};
pub use models::{CandidateSource, PlaceCandidate, PlaceDetails, RemotePrediction};
