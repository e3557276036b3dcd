use std::sync::Arc;

use chrono::Duration;
use locus_cache::eviction::{blended_score, select_victims, EvictionCandidate};
use locus_cache::{AutocompleteCache, CacheNamespace, CacheSettings, EvictionWeights};
use locus_storage::MemoryStore;
use proptest::prelude::*;
use test_fixtures::{epoch, ManualClock};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

#[derive(Debug, Clone)]
enum Op {
    Put(u8),
    Get(u8),
    Tick(u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..32).prop_map(Op::Put),
        (0u8..32).prop_map(Op::Get),
        (0u16..900).prop_map(Op::Tick),
    ]
}

proptest! {
    #[test]
    fn size_never_exceeds_capacity(
        max in 1usize..10,
        ops in proptest::collection::vec(op(), 1..120),
    ) {
        runtime().block_on(async {
            let clock = Arc::new(ManualClock::at_epoch());
            let cache: AutocompleteCache<u32, MemoryStore> = AutocompleteCache::new(
                CacheSettings {
                    namespace: CacheNamespace::Predictions,
                    store_key: "locus:cache:predictions".into(),
                    ttl: Duration::minutes(30),
                    max_entries: max,
                    weights: EvictionWeights::default(),
                },
                Arc::new(MemoryStore::new()),
                clock.clone(),
            )
            .unwrap();

            for op in ops {
                match op {
                    Op::Put(k) => cache.put(format!("q{k}"), k as u32).await,
                    Op::Get(k) => {
                        cache.get(&format!("q{k}"));
                    }
                    Op::Tick(secs) => clock.advance(Duration::seconds(secs as i64)),
                }
                prop_assert!(cache.len() <= max);
            }
            Ok(())
        })?;
    }

    #[test]
    fn victims_never_outscore_survivors(
        facts in proptest::collection::vec((0u64..50, 0i64..3_600), 1..40),
        excess_seed in 0usize..40,
    ) {
        let now = epoch();
        let weights = EvictionWeights::default();
        let candidates: Vec<EvictionCandidate> = facts
            .iter()
            .enumerate()
            .map(|(i, (count, idle))| EvictionCandidate {
                key: format!("k{i:02}"),
                access_count: *count,
                last_accessed: now - Duration::seconds(*idle),
            })
            .collect();
        let excess = excess_seed % (candidates.len() + 1);

        let victims = select_victims(candidates.clone(), excess, now, weights);
        prop_assert_eq!(victims.len(), excess);

        let score = |c: &EvictionCandidate| {
            blended_score(c.access_count, now - c.last_accessed, weights)
        };
        let worst_survivor = candidates
            .iter()
            .filter(|c| !victims.contains(&c.key))
            .map(score)
            .fold(f64::INFINITY, f64::min);
        for c in candidates.iter().filter(|c| victims.contains(&c.key)) {
            prop_assert!(score(c) <= worst_survivor);
        }
    }
}
