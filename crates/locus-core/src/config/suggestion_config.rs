use serde::{Deserialize, Serialize};

use super::defaults;

/// Suggestion merger and engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum suggestions returned to the UI.
    pub max_results: usize,
    /// Maximum places kept in the selection history.
    pub max_history: usize,
    /// Quiet period before a typed query is resolved (milliseconds).
    pub debounce_ms: u64,
    /// Budget for a single remote call (milliseconds).
    pub remote_timeout_ms: u64,
    /// ISO country restriction passed to the remote source.
    pub country: Option<String>,
    /// Response language passed to the remote source.
    pub language: Option<String>,
    /// Bias radius in meters, used when a bias location is set.
    pub radius_m: u32,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_results: defaults::DEFAULT_MAX_RESULTS,
            max_history: defaults::DEFAULT_MAX_HISTORY,
            debounce_ms: defaults::DEFAULT_DEBOUNCE_MS,
            remote_timeout_ms: defaults::DEFAULT_REMOTE_TIMEOUT_MS,
            country: None,
            language: None,
            radius_m: defaults::DEFAULT_RADIUS_M,
        }
    }
}
