use locus_core::config::UsageConfig;
use locus_core::models::UsageRecord;

use crate::factors::{self, RelevanceContext};

/// Two-factor additive relevance formula.
///
/// ```text
/// relevance = recencyWeight × recency
///           + frequencyWeight × frequency
/// ```
///
/// The weights need not sum to 1, so the result is not clamped.
pub fn compute(record: &UsageRecord, ctx: &RelevanceContext<'_>, config: &UsageConfig) -> f64 {
    let recency = factors::recency::calculate(record, ctx.now, config.days_factor);
    let frequency = factors::frequency::calculate(record, ctx);
    config.recency_weight * recency + config.frequency_weight * frequency
}

/// Each factor of a relevance score, for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceBreakdown {
    pub term: String,
    pub age_days: f64,
    pub recency: f64,
    pub frequency: f64,
    pub relevance: f64,
}

/// Compute relevance with a full breakdown of each factor.
pub fn compute_breakdown(
    record: &UsageRecord,
    ctx: &RelevanceContext<'_>,
    config: &UsageConfig,
) -> RelevanceBreakdown {
    let recency = factors::recency::calculate(record, ctx.now, config.days_factor);
    let frequency = factors::frequency::calculate(record, ctx);
    let age_days = (ctx.now - record.last_used).num_milliseconds().max(0) as f64
        / locus_core::constants::MS_PER_DAY;

    RelevanceBreakdown {
        term: record.term.clone(),
        age_days,
        recency,
        frequency,
        relevance: config.recency_weight * recency + config.frequency_weight * frequency,
    }
}
