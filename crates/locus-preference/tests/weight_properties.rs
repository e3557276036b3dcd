use std::sync::Arc;

use locus_core::config::LocusConfig;
use locus_preference::PreferenceModel;
use locus_storage::MemoryStore;
use proptest::prelude::*;
use test_fixtures::ManualClock;

const TAGS: &[&str] = &["restaurant", "cafe", "lodging", "church", "museum", "bar"];

proptest! {
    #[test]
    fn weights_stay_within_bounds(
        selections in proptest::collection::vec(
            proptest::collection::vec(0usize..TAGS.len(), 0..3),
            1..200,
        ),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            let model = PreferenceModel::new(
                &LocusConfig::default(),
                Arc::new(MemoryStore::new()),
                Arc::new(ManualClock::at_epoch()),
            );
            for picks in selections {
                model.record_selection(picks.iter().map(|i| TAGS[*i])).await;
                for row in model.snapshot() {
                    prop_assert!(row.weight >= 0.5 && row.weight <= 2.0, "{} = {}", row.tag, row.weight);
                }
            }
            Ok(())
        })?;
    }

    #[test]
    fn rerank_is_a_permutation(
        picks in proptest::collection::vec(0usize..TAGS.len(), 0..20),
        candidate_tags in proptest::collection::vec(
            proptest::collection::vec(0usize..TAGS.len(), 0..3),
            0..10,
        ),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            let model = PreferenceModel::new(
                &LocusConfig::default(),
                Arc::new(MemoryStore::new()),
                Arc::new(ManualClock::at_epoch()),
            );
            for p in &picks {
                model.record_selection([TAGS[*p]]).await;
            }
            let candidates: Vec<_> = candidate_tags
                .iter()
                .enumerate()
                .map(|(i, tags)| {
                    let tags: Vec<&str> = tags.iter().map(|t| TAGS[*t]).collect();
                    test_fixtures::remote_candidate(&format!("p{i}"), &format!("Place {i}"), &tags)
                })
                .collect();

            let ranked = model.rerank(candidates.clone());
            let mut before: Vec<String> = candidates.into_iter().map(|c| c.place_id).collect();
            let mut after: Vec<String> = ranked.into_iter().map(|c| c.place_id).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
            Ok(())
        })?;
    }
}
