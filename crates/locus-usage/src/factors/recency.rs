use chrono::{DateTime, Utc};

use locus_core::constants::MS_PER_DAY;
use locus_core::models::UsageRecord;

/// Recency factor: `e^(-ageDays / daysFactor)`.
///
/// Range: 0.0 – 1.0. A `last_used` in the future counts as age zero.
pub fn calculate(record: &UsageRecord, now: DateTime<Utc>, days_factor: f64) -> f64 {
    let age_days = (now - record.last_used).num_milliseconds().max(0) as f64 / MS_PER_DAY;
    (-age_days / days_factor).exp()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn used(days_ago: i64, now: DateTime<Utc>) -> UsageRecord {
        UsageRecord::new("milano", None, now - Duration::days(days_ago))
    }

    #[test]
    fn fresh_record_scores_one() {
        let now = Utc::now();
        assert!((calculate(&used(0, now), now, 7.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn one_days_factor_is_one_over_e() {
        let now = Utc::now();
        let r = calculate(&used(7, now), now, 7.0);
        assert!((r - (-1.0f64).exp()).abs() < 1e-9);
    }

    #[test]
    fn future_timestamps_clamp_to_zero_age() {
        let now = Utc::now();
        assert_eq!(calculate(&used(-3, now), now, 7.0), 1.0);
    }
}
