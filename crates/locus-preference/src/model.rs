//! Category weight table, seeded at construction and persisted on every change.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use chrono::Duration;
use dashmap::DashMap;
use tracing::{debug, info, warn};

use locus_core::config::{LocusConfig, PreferenceConfig};
use locus_core::constants::keys;
use locus_core::models::{CategoryWeight, PlaceCandidate};
use locus_core::traits::{IClock, IKeyValueStore};
use locus_storage::{load_or_default, persist_or_log};

use crate::rerank::rerank_by_weight;
use crate::update;

/// Per-category preference weights.
pub struct PreferenceModel<S> {
    config: PreferenceConfig,
    weights: DashMap<String, CategoryWeight>,
    seeds: HashSet<String>,
    store_key: String,
    store: Arc<S>,
    clock: Arc<dyn IClock>,
}

impl<S: IKeyValueStore> PreferenceModel<S> {
    /// A model holding only the seed categories at the default weight.
    pub fn new(config: &LocusConfig, store: Arc<S>, clock: Arc<dyn IClock>) -> Self {
        let preference = config.preference.clone();
        let seeds: HashSet<String> = preference
            .seed_categories
            .iter()
            .map(|t| normalize_tag(t))
            .filter(|t| !t.is_empty())
            .collect();
        let model = Self {
            config: preference,
            weights: DashMap::new(),
            seeds,
            store_key: config.storage.key(keys::WEIGHTS),
            store,
            clock,
        };
        model.seed();
        model
    }

    fn seed(&self) {
        for tag in &self.seeds {
            self.weights
                .entry(tag.clone())
                .or_insert_with(|| CategoryWeight::new(tag.clone()));
        }
    }

    /// Restore persisted weights over the seed set. Unreadable state loads as
    /// the seed set alone; out-of-range weights are clamped.
    pub async fn load(&self) -> usize {
        let rows: Vec<CategoryWeight> = load_or_default(self.store.as_ref(), &self.store_key).await;
        for mut row in rows {
            row.tag = normalize_tag(&row.tag);
            if row.tag.is_empty() || !row.weight.is_finite() {
                continue;
            }
            row.weight = row.weight.clamp(self.config.min_weight, self.config.max_weight);
            self.weights.insert(row.tag.clone(), row);
        }
        info!(categories = self.weights.len(), "preference weights loaded");
        self.weights.len()
    }

    /// Apply one selection of a place carrying `tags`.
    ///
    /// Selected categories gain `increment` up to the ceiling; every other
    /// tracked category decays toward the floor. A selection without tags
    /// carries no category signal and changes nothing.
    pub async fn record_selection<I, T>(&self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let selected: BTreeSet<String> = tags
            .into_iter()
            .map(|t| normalize_tag(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        if selected.is_empty() {
            return;
        }
        let now = self.clock.now();

        for mut row in self.weights.iter_mut() {
            if !selected.contains(row.key()) {
                row.weight = update::decay(row.weight, &self.config);
            }
        }
        for tag in &selected {
            let mut row = self
                .weights
                .entry(tag.clone())
                .or_insert_with(|| CategoryWeight::new(tag.clone()));
            row.weight = update::boost(row.weight, &self.config);
            row.selections += 1;
            row.last_selected = Some(now);
        }

        debug!(tags = ?selected, "preference weights updated");
        self.persist().await;
    }

    /// Soft re-rank of `candidates` by category preference.
    pub fn rerank(&self, candidates: Vec<PlaceCandidate>) -> Vec<PlaceCandidate> {
        rerank_by_weight(candidates, |tag| self.weight(tag))
    }

    /// Current weight of `tag`, if tracked.
    pub fn weight(&self, tag: &str) -> Option<f64> {
        self.weights.get(&normalize_tag(tag)).map(|w| w.weight)
    }

    /// Every tracked category, sorted by tag.
    pub fn snapshot(&self) -> Vec<CategoryWeight> {
        let mut rows: Vec<CategoryWeight> = self.weights.iter().map(|r| r.value().clone()).collect();
        rows.sort_by(|a, b| a.tag.cmp(&b.tag));
        rows
    }

    /// Drop non-seed categories not selected within `window`. Returns how
    /// many were dropped.
    pub async fn purge_inactive(&self, window: Duration) -> usize {
        // A window reaching past the representable range keeps everything.
        let Some(cutoff) = self.clock.now().checked_sub_signed(window) else {
            return 0;
        };
        let before = self.weights.len();
        self.weights.retain(|tag, row| {
            self.seeds.contains(tag) || row.last_selected.is_some_and(|at| at >= cutoff)
        });
        let purged = before - self.weights.len();
        if purged > 0 {
            info!(purged, "purged inactive preference categories");
            self.persist().await;
        }
        purged
    }

    /// [`purge_inactive`](Self::purge_inactive) with the configured window.
    pub async fn purge_expired(&self) -> usize {
        let window = i64::try_from(self.config.purge_window_days)
            .ok()
            .and_then(Duration::try_days)
            .unwrap_or(Duration::MAX);
        self.purge_inactive(window).await
    }

    /// Back to the seed set and delete the persisted weights.
    pub async fn reset(&self) {
        self.weights.clear();
        self.seed();
        if let Err(e) = self.store.remove(&self.store_key).await {
            warn!(key = %self.store_key, error = %e, "failed to delete persisted weights");
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    async fn persist(&self) -> bool {
        persist_or_log(self.store.as_ref(), &self.store_key, &self.snapshot()).await
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}
