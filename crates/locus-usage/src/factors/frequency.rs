use locus_core::models::UsageRecord;
use locus_core::text::is_similar;

use super::RelevanceContext;

/// Frequency factor: share of all recorded uses that went to this term or a
/// term containing / contained in it.
///
/// Range: 0.0 – 1.0. Records are aggregated per term, so each contributes
/// its full `count`.
pub fn calculate(record: &UsageRecord, ctx: &RelevanceContext<'_>) -> f64 {
    let similar: u64 = ctx
        .population
        .iter()
        .filter(|r| is_similar(&r.term, &record.term))
        .map(|r| r.count)
        .sum();
    similar as f64 / ctx.total_count as f64
}
