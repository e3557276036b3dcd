//! Pure weight update rules.

use locus_core::config::PreferenceConfig;

/// Weight of a category carried by the selected place.
pub fn boost(weight: f64, config: &PreferenceConfig) -> f64 {
    (weight + config.increment).min(config.max_weight)
}

/// Weight of a tracked category the selected place did not carry.
pub fn decay(weight: f64, config: &PreferenceConfig) -> f64 {
    (weight * config.decay).max(config.min_weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_caps_at_max() {
        let config = PreferenceConfig::default();
        assert!((boost(1.0, &config) - 1.1).abs() < 1e-12);
        assert_eq!(boost(1.95, &config), 2.0);
        assert_eq!(boost(2.0, &config), 2.0);
    }

    #[test]
    fn decay_floors_at_min() {
        let config = PreferenceConfig::default();
        assert!((decay(1.0, &config) - 0.99).abs() < 1e-12);
        assert_eq!(decay(0.501, &config), 0.5);
        assert_eq!(decay(0.5, &config), 0.5);
    }
}
