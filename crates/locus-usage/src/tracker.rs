//! Usage tracker: aggregated per-term records, persisted as one store entry.

use std::cmp::Ordering;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info, warn};

use locus_core::config::{LocusConfig, UsageConfig};
use locus_core::constants::keys;
use locus_core::models::UsageRecord;
use locus_core::text::{contains_normalized, normalize};
use locus_core::traits::{IClock, IKeyValueStore};
use locus_storage::{load_or_default, persist_or_log};

use crate::factors::RelevanceContext;
use crate::formula::{self, RelevanceBreakdown};

/// A ranked usage record.
#[derive(Debug, Clone, PartialEq)]
pub struct UsagePrediction {
    pub record: UsageRecord,
    pub relevance: f64,
}

/// Decay-weighted usage tracker.
pub struct UsageTracker<S> {
    config: UsageConfig,
    records: DashMap<String, UsageRecord>,
    store_key: String,
    store: Arc<S>,
    clock: Arc<dyn IClock>,
}

impl<S: IKeyValueStore> UsageTracker<S> {
    pub fn new(config: &LocusConfig, store: Arc<S>, clock: Arc<dyn IClock>) -> Self {
        Self {
            config: config.usage.clone(),
            records: DashMap::new(),
            store_key: config.storage.key(keys::USAGE),
            store,
            clock,
        }
    }

    /// Restore persisted records. Unreadable state loads as empty.
    ///
    /// Rows are re-keyed by normalized term, merging any duplicates.
    pub async fn load(&self) -> usize {
        let rows: Vec<UsageRecord> = load_or_default(self.store.as_ref(), &self.store_key).await;
        self.records.clear();
        for mut row in rows {
            row.term = normalize(&row.term);
            if row.term.is_empty() {
                continue;
            }
            let term = row.term.clone();
            self.records
                .entry(term)
                .and_modify(|existing| {
                    existing.count += row.count;
                    existing.last_used = existing.last_used.max(row.last_used);
                    if row.place_id.is_some() {
                        existing.place_id = row.place_id.clone();
                    }
                })
                .or_insert(row);
        }
        info!(records = self.records.len(), "usage tracker loaded");
        self.records.len()
    }

    /// Count one use of `term`, optionally remembering the selected place.
    /// Blank terms are ignored. Returns the updated record.
    pub async fn record(&self, term: &str, place_id: Option<&str>) -> Option<UsageRecord> {
        let normalized = normalize(term);
        if normalized.is_empty() {
            return None;
        }
        let now = self.clock.now();
        let place_id = place_id.map(str::to_string);

        let updated = self
            .records
            .entry(normalized.clone())
            .and_modify(|r| r.observe(place_id.clone(), now))
            .or_insert_with(|| UsageRecord::new(&normalized, place_id, now))
            .clone();

        debug!(term = %updated.term, count = updated.count, "usage recorded");
        self.persist().await;
        Some(updated)
    }

    /// Ranked records matching `partial` (all records when `None` or blank).
    ///
    /// Relevance is always computed against the full population. Ties go to
    /// the more recent record, then to term order.
    pub fn predictions(&self, partial: Option<&str>) -> Vec<UsagePrediction> {
        let population = self.records();
        if population.is_empty() {
            return Vec::new();
        }
        let needle = partial.map(normalize).unwrap_or_default();
        let ctx = RelevanceContext::new(self.clock.now(), &population);

        let mut ranked: Vec<UsagePrediction> = population
            .iter()
            .filter(|r| contains_normalized(&r.term, &needle))
            .map(|r| UsagePrediction {
                relevance: formula::compute(r, &ctx, &self.config),
                record: r.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.record.last_used.cmp(&a.record.last_used))
                .then_with(|| a.record.term.cmp(&b.record.term))
        });
        ranked.truncate(self.config.max_predictions);
        ranked
    }

    /// Per-factor breakdown for `term`, if it is tracked.
    pub fn relevance_breakdown(&self, term: &str) -> Option<RelevanceBreakdown> {
        let population = self.records();
        let ctx = RelevanceContext::new(self.clock.now(), &population);
        let term = normalize(term);
        population
            .iter()
            .find(|r| r.term == term)
            .map(|r| formula::compute_breakdown(r, &ctx, &self.config))
    }

    /// Forget `term`. Returns whether it was tracked.
    pub async fn remove(&self, term: &str) -> bool {
        let removed = self.records.remove(&normalize(term)).is_some();
        if removed {
            self.persist().await;
        }
        removed
    }

    /// Forget every record and delete the persisted state.
    pub async fn clear(&self) {
        self.records.clear();
        if let Err(e) = self.store.remove(&self.store_key).await {
            warn!(key = %self.store_key, error = %e, "failed to delete persisted usage");
        }
    }

    /// All records, sorted by term.
    pub fn records(&self) -> Vec<UsageRecord> {
        let mut rows: Vec<UsageRecord> = self.records.iter().map(|r| r.value().clone()).collect();
        rows.sort_by(|a, b| a.term.cmp(&b.term));
        rows
    }

    pub fn get(&self, term: &str) -> Option<UsageRecord> {
        self.records.get(&normalize(term)).map(|r| r.clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    async fn persist(&self) -> bool {
        persist_or_log(self.store.as_ref(), &self.store_key, &self.records()).await
    }
}
