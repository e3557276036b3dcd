use std::sync::Arc;

use chrono::Duration;
use locus_core::config::LocusConfig;
use locus_core::constants::keys;
use locus_core::models::CandidateSource;
use locus_storage::MemoryStore;
use locus_suggest::SavedPlaces;
use test_fixtures::{remote_candidate, ManualClock};

fn book(max_history: usize) -> (SavedPlaces<MemoryStore>, Arc<ManualClock>, Arc<MemoryStore>) {
    let mut config = LocusConfig::default();
    config.suggestion.max_history = max_history;
    let clock = Arc::new(ManualClock::at_epoch());
    let store = Arc::new(MemoryStore::new());
    (SavedPlaces::new(&config, store.clone(), clock.clone()), clock, store)
}

#[tokio::test]
async fn history_is_capped_by_recency() {
    let (book, clock, _) = book(3);
    for i in 0..5 {
        book.record_selection(&remote_candidate(&format!("p{i}"), "Place", &[]))
            .await;
        clock.advance(Duration::seconds(1));
    }

    let ids: Vec<String> = book.history().into_iter().map(|c| c.place_id).collect();
    assert_eq!(ids, vec!["p4", "p3", "p2"]);
}

#[tokio::test]
async fn reselecting_refreshes_recency() {
    let (book, clock, _) = book(3);
    for i in 0..3 {
        book.record_selection(&remote_candidate(&format!("p{i}"), "Place", &[]))
            .await;
        clock.advance(Duration::seconds(1));
    }
    book.record_selection(&remote_candidate("p0", "Place", &[])).await;
    clock.advance(Duration::seconds(1));
    book.record_selection(&remote_candidate("p3", "Place", &[])).await;

    let ids: Vec<String> = book.history().into_iter().map(|c| c.place_id).collect();
    assert_eq!(ids, vec!["p3", "p0", "p2"]);
}

#[tokio::test]
async fn selection_touches_favorite_copy() {
    let (book, clock, _) = book(10);
    let place = remote_candidate("p0", "Place", &[]);
    book.toggle_favorite(&place).await;
    clock.advance(Duration::hours(2));
    book.record_selection(&place).await;

    let favorite = &book.favorites()[0];
    assert_eq!(favorite.source, CandidateSource::Favorite);
    assert_eq!(favorite.last_used, Some(test_fixtures::epoch() + Duration::hours(2)));
    assert_eq!(book.history()[0].source, CandidateSource::History);
}

#[tokio::test]
async fn both_lists_reload() {
    let (book, _, store) = book(10);
    book.toggle_favorite(&remote_candidate("fav", "Casa", &[])).await;
    book.record_selection(&remote_candidate("hist", "Bar", &["cafe"])).await;

    let reloaded = SavedPlaces::new(
        &LocusConfig::default(),
        store,
        Arc::new(ManualClock::at_epoch()),
    );
    assert_eq!(reloaded.load().await, (1, 1));
    assert!(reloaded.is_favorite("fav"));
    let hist = &reloaded.history()[0];
    assert_eq!(hist.use_count, 1);
    assert!(hist.types.contains("cafe"));
}

#[tokio::test]
async fn blank_search_terms_are_ignored() {
    let (book, _, _) = book(10);
    assert!(book.record_search_term("  ").await.is_none());
    assert!(book.history().is_empty());
}

#[tokio::test]
async fn history_entry_from_favorite_does_not_keep_the_flag() {
    let (book, clock, store) = book(10);
    book.toggle_favorite(&remote_candidate("p1", "Duomo", &[])).await;
    clock.advance(Duration::minutes(1));

    let favorite = book.favorites()[0].clone();
    assert!(favorite.is_favorite);
    let entry = book.record_selection(&favorite).await;
    assert!(!entry.is_favorite);

    assert!(!book.toggle_favorite(&favorite).await);
    let hist = &book.history()[0];
    assert_eq!(hist.place_id, "p1");
    assert_eq!(hist.source, CandidateSource::History);
    assert!(!hist.is_favorite);

    let persisted = store.raw(&LocusConfig::default().storage.key(keys::HISTORY));
    assert!(persisted.is_some_and(|json| !json.contains("\"is_favorite\":true")));
}
