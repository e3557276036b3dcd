use serde::{Deserialize, Serialize};

use super::defaults;

/// Category preference model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceConfig {
    /// Additive boost applied to selected categories.
    pub increment: f64,
    /// Multiplicative decay applied to every other tracked category.
    pub decay: f64,
    /// Lower weight bound.
    pub min_weight: f64,
    /// Upper weight bound.
    pub max_weight: f64,
    /// Days without a selection before a non-seed category is purged.
    pub purge_window_days: u64,
    /// Categories always tracked, starting at the default weight.
    pub seed_categories: Vec<String>,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            increment: defaults::DEFAULT_WEIGHT_INCREMENT,
            decay: defaults::DEFAULT_WEIGHT_DECAY,
            min_weight: defaults::DEFAULT_MIN_WEIGHT,
            max_weight: defaults::DEFAULT_MAX_WEIGHT,
            purge_window_days: defaults::DEFAULT_PURGE_WINDOW_DAYS,
            seed_categories: defaults::DEFAULT_SEED_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
