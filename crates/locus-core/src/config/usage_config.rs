use serde::{Deserialize, Serialize};

use super::defaults;

/// Decay-weighted usage tracker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageConfig {
    /// Recency decay constant in days: `exp(-age_days / days_factor)`.
    pub days_factor: f64,
    /// Weight of the recency factor.
    pub recency_weight: f64,
    /// Weight of the frequency factor.
    pub frequency_weight: f64,
    /// Maximum predictions returned per lookup.
    pub max_predictions: usize,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            days_factor: defaults::DEFAULT_DAYS_FACTOR,
            recency_weight: defaults::DEFAULT_RECENCY_WEIGHT,
            frequency_weight: defaults::DEFAULT_FREQUENCY_WEIGHT,
            max_predictions: defaults::DEFAULT_MAX_PREDICTIONS,
        }
    }
}
