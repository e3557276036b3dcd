//! Favorites and selection history, each persisted as one store entry.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info, warn};

use locus_core::config::LocusConfig;
use locus_core::constants::keys;
use locus_core::models::{CandidateSource, PlaceCandidate};
use locus_core::traits::{IClock, IKeyValueStore};
use locus_storage::{load_or_default, persist_or_log};

/// The user's favorite places and recently selected places.
pub struct SavedPlaces<S> {
    favorites: DashMap<String, PlaceCandidate>,
    history: DashMap<String, PlaceCandidate>,
    max_history: usize,
    favorites_key: String,
    history_key: String,
    store: Arc<S>,
    clock: Arc<dyn IClock>,
}

impl<S: IKeyValueStore> SavedPlaces<S> {
    pub fn new(config: &LocusConfig, store: Arc<S>, clock: Arc<dyn IClock>) -> Self {
        Self {
            favorites: DashMap::new(),
            history: DashMap::new(),
            max_history: config.suggestion.max_history,
            favorites_key: config.storage.key(keys::FAVORITES),
            history_key: config.storage.key(keys::HISTORY),
            store,
            clock,
        }
    }

    /// Restore both lists. Unreadable state loads as empty.
    /// Returns `(favorites, history)` counts.
    pub async fn load(&self) -> (usize, usize) {
        let favorites: Vec<PlaceCandidate> =
            load_or_default(self.store.as_ref(), &self.favorites_key).await;
        let history: Vec<PlaceCandidate> =
            load_or_default(self.store.as_ref(), &self.history_key).await;

        self.favorites.clear();
        for place in favorites {
            let now = place.last_used.unwrap_or_else(|| self.clock.now());
            self.favorites.insert(place.place_id.clone(), place.to_favorite(now));
        }
        self.history.clear();
        for mut place in history {
            place.source = CandidateSource::History;
            place.is_favorite = false;
            self.history.insert(place.place_id.clone(), place);
        }
        self.trim_history();

        let counts = (self.favorites.len(), self.history.len());
        info!(favorites = counts.0, history = counts.1, "saved places loaded");
        counts
    }

    /// Favorites, most recently used first.
    pub fn favorites(&self) -> Vec<PlaceCandidate> {
        sorted_by_recency(self.favorites.iter().map(|r| r.value().clone()).collect())
    }

    /// History, most recently used first.
    pub fn history(&self) -> Vec<PlaceCandidate> {
        sorted_by_recency(self.history.iter().map(|r| r.value().clone()).collect())
    }

    /// Ids of every favorite.
    pub fn favorite_ids(&self) -> HashSet<String> {
        self.favorites.iter().map(|r| r.key().clone()).collect()
    }

    pub fn is_favorite(&self, place_id: &str) -> bool {
        self.favorites.contains_key(place_id)
    }

    /// Add `place` to favorites, or remove it if already there.
    /// Returns the new favorite state.
    pub async fn toggle_favorite(&self, place: &PlaceCandidate) -> bool {
        let now_favorite = if self.favorites.remove(&place.place_id).is_some() {
            false
        } else {
            self.favorites
                .insert(place.place_id.clone(), place.to_favorite(self.clock.now()));
            true
        };
        debug!(place_id = %place.place_id, favorite = now_favorite, "favorite toggled");
        self.persist_favorites().await;
        now_favorite
    }

    /// Count one selection of `place` in history, and refresh its favorite
    /// copy if it has one. Returns the history entry.
    pub async fn record_selection(&self, place: &PlaceCandidate) -> PlaceCandidate {
        let now = self.clock.now();

        let favorite_touched = match self.favorites.get_mut(&place.place_id) {
            Some(mut favorite) => {
                favorite.mark_used(now);
                true
            }
            None => false,
        };

        let entry = {
            let mut row = self
                .history
                .entry(place.place_id.clone())
                .or_insert_with(|| place.to_history());
            if !place.types.is_empty() {
                row.types = place.types.clone();
            }
            row.mark_used(now);
            row.clone()
        };
        self.trim_history();

        if favorite_touched {
            self.persist_favorites().await;
        }
        self.persist_history().await;
        entry
    }

    /// Record a typed query that never resolved to a place.
    pub async fn record_search_term(&self, term: &str) -> Option<PlaceCandidate> {
        let entry = PlaceCandidate::from_search_term(term, self.clock.now());
        if entry.main_text.is_empty() {
            return None;
        }
        Some(self.record_selection(&entry).await)
    }

    pub async fn clear_favorites(&self) {
        self.favorites.clear();
        self.delete(&self.favorites_key).await;
    }

    pub async fn clear_history(&self) {
        self.history.clear();
        self.delete(&self.history_key).await;
    }

    /// Drop the least recently used history entries beyond the cap.
    fn trim_history(&self) {
        let excess = self.history.len().saturating_sub(self.max_history);
        if excess == 0 {
            return;
        }
        let mut oldest = self.history();
        let victims = oldest.split_off(oldest.len() - excess);
        for victim in victims {
            self.history.remove(&victim.place_id);
        }
        debug!(dropped = excess, "history trimmed");
    }

    async fn persist_favorites(&self) -> bool {
        persist_or_log(self.store.as_ref(), &self.favorites_key, &self.favorites()).await
    }

    async fn persist_history(&self) -> bool {
        persist_or_log(self.store.as_ref(), &self.history_key, &self.history()).await
    }

    async fn delete(&self, key: &str) {
        if let Err(e) = self.store.remove(key).await {
            warn!(key = %key, error = %e, "failed to delete saved places");
        }
    }
}

/// Most recently used first; never-used last; then by id for determinism.
fn sorted_by_recency(mut places: Vec<PlaceCandidate>) -> Vec<PlaceCandidate> {
    places.sort_by(|a, b| match b.last_used.cmp(&a.last_used) {
        Ordering::Equal => a.place_id.cmp(&b.place_id),
        other => other,
    });
    places
}
