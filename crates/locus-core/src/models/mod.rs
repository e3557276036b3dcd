mod cache_entry;
mod cache_stats;
mod category_weight;
mod place_candidate;
mod place_details;
mod remote_prediction;
mod usage_record;

pub use cache_entry::CacheEntry;
pub use cache_stats::CacheStats;
pub use category_weight::CategoryWeight;
pub use place_candidate::{CandidateSource, PlaceCandidate};
pub use place_details::{LatLng, PlaceDetails};
pub use remote_prediction::RemotePrediction;
pub use usage_record::UsageRecord;
