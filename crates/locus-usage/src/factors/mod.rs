pub mod frequency;
pub mod recency;

use chrono::{DateTime, Utc};

use locus_core::models::UsageRecord;

/// What every factor is computed against: the clock reading and the full,
/// unfiltered record population.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceContext<'a> {
    pub now: DateTime<Utc>,
    pub population: &'a [UsageRecord],
    /// Sum of `count` over the population, never below 1.
    pub total_count: u64,
}

impl<'a> RelevanceContext<'a> {
    pub fn new(now: DateTime<Utc>, population: &'a [UsageRecord]) -> Self {
        let total_count = population.iter().map(|r| r.count).sum::<u64>().max(1);
        Self {
            now,
            population,
            total_count,
        }
    }
}
