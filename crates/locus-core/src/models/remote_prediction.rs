use serde::{Deserialize, Serialize};

/// A place prediction as returned by the remote source, before it is adapted
/// into a [`super::PlaceCandidate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePrediction {
    pub place_id: String,
    pub description: String,
    pub main_text: String,
    pub secondary_text: String,
    /// Category tags, e.g. "restaurant", "locality".
    #[serde(default)]
    pub types: Vec<String>,
}
