pub mod cache_config;
pub mod defaults;
pub mod observability_config;
pub mod preference_config;
pub mod storage_config;
pub mod suggestion_config;
pub mod usage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use cache_config::CacheConfig;
pub use observability_config::ObservabilityConfig;
pub use preference_config::PreferenceConfig;
pub use storage_config::StorageConfig;
pub use suggestion_config::SuggestionConfig;
pub use usage_config::UsageConfig;

use crate::errors::{LocusError, LocusResult};

/// Top-level engine configuration. Every section falls back to its defaults
/// when omitted from the TOML source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocusConfig {
    pub cache: CacheConfig,
    pub usage: UsageConfig,
    pub preference: PreferenceConfig,
    pub suggestion: SuggestionConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl LocusConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> LocusResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| LocusError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> LocusResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            LocusError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Reject values that would make the engine misbehave.
    ///
    /// These are programming errors, so they fail loudly at construction
    /// instead of being degraded at runtime.
    pub fn validate(&self) -> LocusResult<()> {
        let c = &self.cache;
        if c.max_entries == 0 {
            return Err(invalid("cache.max_entries must be at least 1"));
        }
        if c.prediction_ttl_secs == 0 || c.detail_ttl_secs == 0 {
            return Err(invalid("cache TTLs must be positive"));
        }
        if c.access_weight < 0.0 || c.idle_weight < 0.0 {
            return Err(invalid("cache eviction weights must be non-negative"));
        }

        let u = &self.usage;
        if !(u.days_factor > 0.0) {
            return Err(invalid("usage.days_factor must be positive"));
        }
        if u.recency_weight < 0.0 || u.frequency_weight < 0.0 {
            return Err(invalid("usage weights must be non-negative"));
        }

        let p = &self.preference;
        if !(p.min_weight > 0.0) || p.min_weight > p.max_weight {
            return Err(invalid(
                "preference weights must satisfy 0 < min_weight <= max_weight",
            ));
        }
        if !(defaults::DEFAULT_WEIGHT >= p.min_weight && defaults::DEFAULT_WEIGHT <= p.max_weight)
        {
            return Err(invalid("default weight 1.0 must lie within preference bounds"));
        }
        if !(p.decay > 0.0 && p.decay <= 1.0) {
            return Err(invalid("preference.decay must be in (0, 1]"));
        }
        if p.increment < 0.0 {
            return Err(invalid("preference.increment must be non-negative"));
        }

        let s = &self.suggestion;
        if s.max_results == 0 {
            return Err(invalid("suggestion.max_results must be at least 1"));
        }
        if s.remote_timeout_ms == 0 {
            return Err(invalid("suggestion.remote_timeout_ms must be positive"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> LocusError {
    LocusError::InvalidArgument(reason.to_string())
}
