//! Blended recency/frequency eviction.

use chrono::{DateTime, Duration, Utc};

/// Coefficients of the eviction score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvictionWeights {
    /// Multiplies the access count.
    pub access: f64,
    /// Multiplies idle time in seconds.
    pub idle: f64,
}

impl Default for EvictionWeights {
    fn default() -> Self {
        Self {
            access: 0.7,
            idle: 0.3,
        }
    }
}

/// What one eviction pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvictionReport {
    /// Entries dropped for exceeding the TTL.
    pub expired: usize,
    /// Entries dropped to get back under capacity.
    pub overflow: usize,
}

impl EvictionReport {
    pub fn total(&self) -> usize {
        self.expired + self.overflow
    }
}

/// The per-entry facts the score is computed from.
#[derive(Debug, Clone)]
pub struct EvictionCandidate {
    pub key: String,
    pub access_count: u64,
    pub last_accessed: DateTime<Utc>,
}

/// `access × accessCount − idle × idleSeconds`. Higher survives longer.
pub fn blended_score(access_count: u64, idle: Duration, weights: EvictionWeights) -> f64 {
    let idle_secs = idle.max(Duration::zero()).num_milliseconds() as f64 / 1000.0;
    weights.access * access_count as f64 - weights.idle * idle_secs
}

/// Pick the `excess` lowest-scoring keys.
///
/// Ties go to the entry idle longest, then to key order, so the choice is
/// deterministic.
pub fn select_victims(
    mut candidates: Vec<EvictionCandidate>,
    excess: usize,
    now: DateTime<Utc>,
    weights: EvictionWeights,
) -> Vec<String> {
    if excess == 0 {
        return Vec::new();
    }

    let score = |c: &EvictionCandidate| blended_score(c.access_count, now - c.last_accessed, weights);
    candidates.sort_by(|a, b| {
        score(a)
            .partial_cmp(&score(b))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.last_accessed.cmp(&b.last_accessed))
            .then_with(|| a.key.cmp(&b.key))
    });

    candidates
        .into_iter()
        .take(excess)
        .map(|c| c.key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn candidate(key: &str, access_count: u64, last_accessed: DateTime<Utc>) -> EvictionCandidate {
        EvictionCandidate {
            key: key.to_string(),
            access_count,
            last_accessed,
        }
    }

    #[test]
    fn score_rewards_access_and_penalizes_idle() {
        let w = EvictionWeights::default();
        assert!(blended_score(5, Duration::zero(), w) > blended_score(1, Duration::zero(), w));
        assert!(blended_score(1, Duration::seconds(1), w) > blended_score(1, Duration::seconds(60), w));
        assert!((blended_score(10, Duration::seconds(10), w) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn victims_are_lowest_scores() {
        let now = at(100);
        let victims = select_victims(
            vec![
                candidate("hot", 20, at(90)),
                candidate("stale", 1, at(0)),
                candidate("fresh", 1, at(99)),
            ],
            1,
            now,
            EvictionWeights::default(),
        );
        assert_eq!(victims, vec!["stale"]);
    }

    #[test]
    fn ties_break_on_idle_then_key() {
        let now = at(10);
        let w = EvictionWeights { access: 1.0, idle: 0.0 };
        let victims = select_victims(
            vec![
                candidate("b", 1, at(5)),
                candidate("a", 1, at(5)),
                candidate("c", 1, at(1)),
            ],
            2,
            now,
            w,
        );
        assert_eq!(victims, vec!["c", "a"]);
    }

    #[test]
    fn zero_excess_selects_nothing() {
        let victims = select_victims(vec![candidate("a", 1, at(0))], 0, at(1), EvictionWeights::default());
        assert!(victims.is_empty());
    }
}
