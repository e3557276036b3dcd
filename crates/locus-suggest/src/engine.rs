//! SuggestionEngine: the session service the UI talks to.
//!
//! Owns the caches, the usage tracker, the preference model, and the saved
//! places, all sharing one injected store and clock. Every operation
//! degrades to partial or empty results on collaborator failure; only
//! invalid configuration fails, at [`SuggestionEngine::open`].

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn, Instrument};

use locus_cache::{CacheNamespace, CacheSettings, DetailCache, EvictionReport, PredictionCache};
use locus_core::config::LocusConfig;
use locus_core::constants::keys;
use locus_core::errors::LocusResult;
use locus_core::models::{CacheStats, LatLng, PlaceCandidate, PlaceDetails};
use locus_core::text::normalize;
use locus_core::traits::{DetailOptions, IClock, IKeyValueStore, IPlaceSource, PredictionOptions};
use locus_observability::{cache_span, selection_span, suggestion_span};
use locus_preference::PreferenceModel;
use locus_usage::UsageTracker;

use crate::debounce::{RequestGuard, RequestTicket};
use crate::merge::{self, SourceLists};
use crate::remote;
use crate::saved_places::SavedPlaces;

/// Result of a debounced suggestion request.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    /// Suggestions for the latest request.
    Fresh(Vec<PlaceCandidate>),
    /// A newer request started before this one finished; its results were
    /// discarded.
    Superseded,
}

impl SuggestionOutcome {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }

    pub fn into_fresh(self) -> Option<Vec<PlaceCandidate>> {
        match self {
            Self::Fresh(list) => Some(list),
            Self::Superseded => None,
        }
    }
}

/// Stats of both cache namespaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineCacheStats {
    pub predictions: CacheStats,
    pub details: CacheStats,
}

/// What one maintenance pass did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaintenanceReport {
    pub predictions: EvictionReport,
    pub details: EvictionReport,
    pub purged_categories: usize,
}

/// Place-suggestion engine for one user session.
pub struct SuggestionEngine<S, R> {
    config: LocusConfig,
    store: Arc<S>,
    source: Arc<R>,
    clock: Arc<dyn IClock>,
    predictions: PredictionCache<S>,
    details: DetailCache<S>,
    usage: UsageTracker<S>,
    preferences: PreferenceModel<S>,
    places: SavedPlaces<S>,
    guard: RequestGuard,
}

impl<S, R> SuggestionEngine<S, R>
where
    S: IKeyValueStore,
    R: IPlaceSource,
{
    /// Validate `config`, build every component, and restore persisted state.
    ///
    /// Persisted state that can't be read loads as empty; only invalid
    /// configuration is an error.
    pub async fn open(
        store: Arc<S>,
        source: Arc<R>,
        clock: Arc<dyn IClock>,
        config: LocusConfig,
    ) -> LocusResult<Self> {
        config.validate()?;

        let predictions = PredictionCache::new(
            CacheSettings::for_namespace(CacheNamespace::Predictions, &config),
            store.clone(),
            clock.clone(),
        )?;
        let details = DetailCache::new(
            CacheSettings::for_namespace(CacheNamespace::Details, &config),
            store.clone(),
            clock.clone(),
        )?;
        let usage = UsageTracker::new(&config, store.clone(), clock.clone());
        let preferences = PreferenceModel::new(&config, store.clone(), clock.clone());
        let places = SavedPlaces::new(&config, store.clone(), clock.clone());

        let engine = Self {
            config,
            store,
            source,
            clock,
            predictions,
            details,
            usage,
            preferences,
            places,
            guard: RequestGuard::new(),
        };
        engine.load().await;
        Ok(engine)
    }

    async fn load(&self) {
        let cached_predictions = self.predictions.load().await;
        let cached_details = self.details.load().await;
        let usage = self.usage.load().await;
        let categories = self.preferences.load().await;
        let (favorites, history) = self.places.load().await;
        info!(
            cached_predictions,
            cached_details,
            usage,
            categories,
            favorites,
            history,
            "suggestion engine ready"
        );
    }

    pub fn config(&self) -> &LocusConfig {
        &self.config
    }

    /// Prediction options built from config, optionally biased toward `location`.
    pub fn prediction_options(&self, location: Option<LatLng>) -> PredictionOptions {
        let s = &self.config.suggestion;
        PredictionOptions {
            country: s.country.clone(),
            language: s.language.clone(),
            radius_m: location.map(|_| s.radius_m),
            location_bias: location,
        }
    }

    // ── Suggestions ──────────────────────────────────────────────────────

    /// Ranked, de-duplicated suggestions for `query`, at most `max_results`.
    pub async fn get_suggestions(&self, query: &str) -> Vec<PlaceCandidate> {
        let options = self.prediction_options(None);
        self.get_suggestions_with(query, &options).await
    }

    /// [`get_suggestions`](Self::get_suggestions) with explicit remote options.
    ///
    /// The remote source receives the normalized (trimmed, lower-cased) query.
    /// Cached predictions are keyed by that query alone, so a result fetched
    /// with different `options` (for example another location bias) is reused
    /// until it expires.
    pub async fn get_suggestions_with(
        &self,
        query: &str,
        options: &PredictionOptions,
    ) -> Vec<PlaceCandidate> {
        let needle = normalize(query);
        let span = suggestion_span!(needle, self.guard.current());
        async {
            let limit = self.config.suggestion.max_results;
            let sources = if needle.is_empty() {
                SourceLists {
                    favorites: self.places.favorites(),
                    history: self.places.history(),
                    ..Default::default()
                }
            } else {
                SourceLists {
                    favorites: matching(self.places.favorites(), &needle),
                    history: matching(self.places.history(), &needle),
                    frequency: self.frequency_candidates(&needle, limit),
                    remote: self.remote_candidates(&needle, options, limit).await,
                }
            };

            let favorite_ids = self.places.favorite_ids();

            let merged = merge::merge_candidates(
                sources,
                &favorite_ids,
                |remote| self.preferences.rerank(remote),
                limit,
            );
            debug!(results = merged.len(), "suggestions merged");
            merged
        }
        .instrument(span)
        .await
    }

    /// Debounced [`get_suggestions`](Self::get_suggestions).
    ///
    /// Waits out the debounce delay and yields [`SuggestionOutcome::Superseded`]
    /// if a newer call started meanwhile, either before or during the fetch.
    pub async fn suggest(&self, query: &str) -> SuggestionOutcome {
        let ticket = self.guard.begin();
        tokio::time::sleep(Duration::from_millis(self.config.suggestion.debounce_ms)).await;
        if !self.still_current(ticket, query) {
            return SuggestionOutcome::Superseded;
        }

        let results = self.get_suggestions(query).await;
        if !self.still_current(ticket, query) {
            return SuggestionOutcome::Superseded;
        }
        SuggestionOutcome::Fresh(results)
    }

    fn still_current(&self, ticket: RequestTicket, query: &str) -> bool {
        let current = self.guard.is_current(ticket);
        if !current {
            debug!(
                query = %query,
                generation = ticket.generation(),
                latest = self.guard.current(),
                "request superseded"
            );
        }
        current
    }

    fn frequency_candidates(&self, needle: &str, limit: usize) -> Vec<PlaceCandidate> {
        self.usage
            .predictions(Some(needle))
            .into_iter()
            .take(limit)
            .map(|p| PlaceCandidate::from_usage(&p.record))
            .collect()
    }

    /// Cached predictions for `needle`, or a fresh fetch. Remote failures
    /// contribute nothing.
    async fn remote_candidates(
        &self,
        needle: &str,
        options: &PredictionOptions,
        limit: usize,
    ) -> Vec<PlaceCandidate> {
        if let Some(cached) = self.predictions.get(needle) {
            return cached.into_iter().take(limit).collect();
        }

        let budget = Duration::from_millis(self.config.suggestion.remote_timeout_ms);
        match remote::fetch_predictions(self.source.as_ref(), needle, options, budget).await {
            Ok(predictions) => {
                let candidates: Vec<PlaceCandidate> = predictions
                    .into_iter()
                    .take(limit)
                    .map(PlaceCandidate::from_remote)
                    .collect();
                self.predictions.put(needle, candidates.clone()).await;
                candidates
            }
            Err(e) => {
                warn!(
                    query = %needle,
                    error = %e,
                    rejected = e.is_rejection(),
                    "remote predictions unavailable, showing local suggestions only"
                );
                Vec::new()
            }
        }
    }

    // ── Selection and saved places ───────────────────────────────────────

    /// Record that the user picked `candidate`: history, usage, and category
    /// preferences are updated and persisted.
    pub async fn record_selection(&self, candidate: &PlaceCandidate) {
        let span = selection_span!(candidate.place_id, candidate.source);
        async {
            self.places.record_selection(candidate).await;

            let term = if candidate.main_text.trim().is_empty() {
                &candidate.description
            } else {
                &candidate.main_text
            };
            let place_id = (!candidate.is_synthetic()).then_some(candidate.place_id.as_str());
            self.usage.record(term, place_id).await;

            self.preferences.record_selection(&candidate.types).await;
        }
        .instrument(span)
        .await
    }

    /// Record a typed query the user submitted without picking a suggestion.
    pub async fn record_search_term(&self, term: &str) {
        if self.places.record_search_term(term).await.is_some() {
            self.usage.record(term, None).await;
        }
    }

    /// Add or remove `candidate` from favorites. Returns the new state.
    pub async fn toggle_favorite(&self, candidate: &PlaceCandidate) -> bool {
        self.places.toggle_favorite(candidate).await
    }

    pub fn is_favorite(&self, place_id: &str) -> bool {
        self.places.is_favorite(place_id)
    }

    pub fn favorites(&self) -> Vec<PlaceCandidate> {
        self.places.favorites()
    }

    pub fn history(&self) -> Vec<PlaceCandidate> {
        self.places.history()
    }

    /// Forget selection history and the usage records derived from it.
    pub async fn clear_history(&self) {
        self.places.clear_history().await;
        self.usage.clear().await;
    }

    pub async fn clear_favorites(&self) {
        self.places.clear_favorites().await;
    }

    // ── Details ──────────────────────────────────────────────────────────

    /// Details for `place_id` from the detail cache or the remote source.
    pub async fn place_details(&self, place_id: &str) -> Option<PlaceDetails> {
        if let Some(cached) = self.details.get(place_id) {
            return Some(cached);
        }

        let options = DetailOptions {
            language: self.config.suggestion.language.clone(),
            fields: Vec::new(),
        };
        let budget = Duration::from_millis(self.config.suggestion.remote_timeout_ms);
        match remote::fetch_details(self.source.as_ref(), place_id, &options, budget).await {
            Ok(details) => {
                self.details.put(place_id, details.clone()).await;
                Some(details)
            }
            Err(e) => {
                warn!(place_id = %place_id, error = %e, "place details unavailable");
                None
            }
        }
    }

    // ── Caches and maintenance ───────────────────────────────────────────

    pub fn cache_stats(&self) -> EngineCacheStats {
        EngineCacheStats {
            predictions: self.predictions.stats(),
            details: self.details.stats(),
        }
    }

    /// Empty both caches and sweep any other cache key under the engine
    /// prefix from the store. Returns the number of store keys swept.
    pub async fn clear_caches(&self) -> usize {
        self.predictions.clear().await;
        self.details.clear().await;

        let prefix = self.config.storage.key(keys::CACHE_PREFIX);
        let stale: Vec<String> = match self.store.list_keys().await {
            Ok(keys) => keys.into_iter().filter(|k| k.starts_with(&prefix)).collect(),
            Err(e) => {
                warn!(prefix = %prefix, error = %e, "failed to list cache keys");
                return 0;
            }
        };
        if stale.is_empty() {
            return 0;
        }
        match self.store.remove_many(&stale).await {
            Ok(()) => {
                info!(swept = stale.len(), "cache keys swept");
                stale.len()
            }
            Err(e) => {
                warn!(prefix = %prefix, error = %e, "failed to sweep cache keys");
                0
            }
        }
    }

    /// One maintenance pass: sweep both caches and purge inactive categories.
    pub async fn maintain(&self) -> MaintenanceReport {
        let predictions = self
            .predictions
            .sweep()
            .instrument(cache_span!(CacheNamespace::Predictions, "sweep"))
            .await;
        let details = self
            .details
            .sweep()
            .instrument(cache_span!(CacheNamespace::Details, "sweep"))
            .await;
        let purged_categories = self.preferences.purge_expired().await;
        MaintenanceReport {
            predictions,
            details,
            purged_categories,
        }
    }

    /// Run [`maintain`](Self::maintain) every `period`, forever. The first
    /// pass runs after one full period.
    pub async fn run_maintenance(&self, period: Duration) {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        interval.tick().await;
        loop {
            interval.tick().await;
            let report = self.maintain().await;
            debug!(?report, "maintenance pass");
        }
    }

    /// [`run_maintenance`](Self::run_maintenance) at the configured sweep interval.
    pub async fn run_default_maintenance(&self) {
        let period = Duration::from_secs(self.config.cache.sweep_interval_secs.max(1));
        self.run_maintenance(period).await
    }

    // ── Component access ─────────────────────────────────────────────────

    pub fn usage(&self) -> &UsageTracker<S> {
        &self.usage
    }

    pub fn preferences(&self) -> &PreferenceModel<S> {
        &self.preferences
    }

    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }
}

fn matching(places: Vec<PlaceCandidate>, needle: &str) -> Vec<PlaceCandidate> {
    places.into_iter().filter(|p| p.matches(needle)).collect()
}
