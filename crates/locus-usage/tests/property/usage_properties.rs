use chrono::Duration;
use locus_core::config::UsageConfig;
use locus_core::models::UsageRecord;
use locus_usage::formula;
use locus_usage::RelevanceContext;
use proptest::prelude::*;
use test_fixtures::epoch;

fn record(term: &str, count: u64, hours_ago: i64) -> UsageRecord {
    UsageRecord {
        count,
        ..UsageRecord::new(term, None, epoch() - Duration::hours(hours_ago))
    }
}

proptest! {
    // Holding count fixed, an older last_used never scores higher.
    #[test]
    fn relevance_decreases_with_age(
        count in 1u64..100,
        younger in 0i64..5_000,
        gap in 0i64..5_000,
        others in proptest::collection::vec(1u64..50, 0..5),
    ) {
        let config = UsageConfig::default();
        let mut population: Vec<UsageRecord> = others
            .iter()
            .enumerate()
            .map(|(i, c)| record(&format!("other {i}"), *c, 10))
            .collect();

        population.push(record("target", count, younger));
        let ctx = RelevanceContext::new(epoch(), &population);
        let young = formula::compute(population.last().unwrap(), &ctx, &config);

        population.pop();
        population.push(record("target", count, younger + gap));
        let ctx = RelevanceContext::new(epoch(), &population);
        let old = formula::compute(population.last().unwrap(), &ctx, &config);

        prop_assert!(old <= young + 1e-12);
    }

    #[test]
    fn factors_stay_in_unit_range(
        counts in proptest::collection::vec((1u64..100, 0i64..10_000), 1..20),
    ) {
        let population: Vec<UsageRecord> = counts
            .iter()
            .enumerate()
            .map(|(i, (c, h))| record(&format!("t{i}"), *c, *h))
            .collect();
        let ctx = RelevanceContext::new(epoch(), &population);
        let config = UsageConfig::default();
        for r in &population {
            let bd = formula::compute_breakdown(r, &ctx, &config);
            prop_assert!((0.0..=1.0).contains(&bd.recency));
            prop_assert!((0.0..=1.0).contains(&bd.frequency));
            prop_assert!(bd.relevance <= config.recency_weight + config.frequency_weight + 1e-12);
        }
    }
}
