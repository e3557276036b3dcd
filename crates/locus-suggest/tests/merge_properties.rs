use std::collections::HashSet;

use locus_core::models::{CandidateSource, PlaceCandidate};
use locus_suggest::{merge_candidates, SourceLists};
use proptest::prelude::*;
use test_fixtures::candidate;

fn list(ids: &[u8], source: CandidateSource) -> Vec<PlaceCandidate> {
    ids.iter()
        .map(|i| candidate(&format!("p{i}"), &format!("Place {i}"), source))
        .collect()
}

fn ids() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..12, 0..8)
}

proptest! {
    #[test]
    fn merged_ids_are_unique_and_capped(
        favorites in ids(),
        history in ids(),
        frequency in ids(),
        remote in ids(),
        limit in 1usize..10,
    ) {
        let favorite_ids: HashSet<String> = favorites.iter().map(|i| format!("p{i}")).collect();
        let merged = merge_candidates(
            SourceLists {
                favorites: list(&favorites, CandidateSource::Favorite),
                history: list(&history, CandidateSource::History),
                frequency: list(&frequency, CandidateSource::Frequency),
                remote: list(&remote, CandidateSource::Remote),
            },
            &favorite_ids,
            |r| r.into_iter().rev().collect(),
            limit,
        );

        prop_assert!(merged.len() <= limit);
        let unique: HashSet<&str> = merged.iter().map(|c| c.place_id.as_str()).collect();
        prop_assert_eq!(unique.len(), merged.len());

        for c in &merged {
            if favorite_ids.contains(&c.place_id) {
                prop_assert_eq!(c.source, CandidateSource::Favorite);
                prop_assert!(c.is_favorite);
            }
        }

        // Sources never interleave out of priority order.
        let sources: Vec<CandidateSource> = merged.iter().map(|c| c.source).collect();
        let mut sorted = sources.clone();
        sorted.sort();
        prop_assert_eq!(sources, sorted);
    }

    #[test]
    fn merge_is_deterministic(
        favorites in ids(),
        history in ids(),
        remote in ids(),
    ) {
        let run = || {
            merge_candidates(
                SourceLists {
                    favorites: list(&favorites, CandidateSource::Favorite),
                    history: list(&history, CandidateSource::History),
                    frequency: Vec::new(),
                    remote: list(&remote, CandidateSource::Remote),
                },
                &HashSet::new(),
                |r| r,
                5,
            )
        };
        prop_assert_eq!(run(), run());
    }
}
