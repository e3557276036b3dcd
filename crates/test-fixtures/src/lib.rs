//! Shared fakes and fixture loaders for Locus tests.
//!
//! - [`ManualClock`]: a clock that only moves when told to.
//! - [`ScriptedPlaceSource`]: a remote source with canned responses, call
//!   counting, and optional latency.
//! - [`FailingStore`]: a store whose reads and/or writes can be made to fail.
//! - Builders for candidates, predictions, and details.
//! - JSON scenario loading from `fixtures/`.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use locus_core::errors::{LocusResult, RemoteError, StorageError};
use locus_core::models::{
    CandidateSource, LatLng, PlaceCandidate, PlaceDetails, RemotePrediction, UsageRecord,
};
use locus_core::text::normalize;
use locus_core::traits::{DetailOptions, IClock, IKeyValueStore, IPlaceSource, PredictionOptions};
use locus_storage::MemoryStore;

// ── Clock ────────────────────────────────────────────────────────────────

/// Deterministic clock for tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Clock starting at [`epoch`].
    pub fn at_epoch() -> Self {
        Self::new(epoch())
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap() = to;
    }
}

impl IClock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Fixed reference instant used across tests.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()
}

// ── Remote source ────────────────────────────────────────────────────────

/// Remote source answering from a script keyed by normalized query.
#[derive(Default)]
pub struct ScriptedPlaceSource {
    predictions: Mutex<HashMap<String, Result<Vec<RemotePrediction>, RemoteError>>>,
    details: Mutex<HashMap<String, PlaceDetails>>,
    /// Latency per normalized query; falls back to `default_latency`.
    latencies: Mutex<HashMap<String, StdDuration>>,
    default_latency: Mutex<Option<StdDuration>>,
    prediction_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl ScriptedPlaceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with `predictions`.
    pub fn with_predictions(self, query: &str, predictions: Vec<RemotePrediction>) -> Self {
        self.predictions
            .lock()
            .unwrap()
            .insert(normalize(query), Ok(predictions));
        self
    }

    /// Fail `query` with `error`.
    pub fn with_error(self, query: &str, error: RemoteError) -> Self {
        self.predictions
            .lock()
            .unwrap()
            .insert(normalize(query), Err(error));
        self
    }

    pub fn with_details(self, details: PlaceDetails) -> Self {
        self.details
            .lock()
            .unwrap()
            .insert(details.place_id.clone(), details);
        self
    }

    /// Delay answers to `query` by `latency`.
    pub fn with_latency(self, query: &str, latency: StdDuration) -> Self {
        self.latencies
            .lock()
            .unwrap()
            .insert(normalize(query), latency);
        self
    }

    /// Delay every answer by `latency` unless a per-query latency is set.
    pub fn with_default_latency(self, latency: StdDuration) -> Self {
        *self.default_latency.lock().unwrap() = Some(latency);
        self
    }

    pub fn prediction_calls(&self) -> usize {
        self.prediction_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    /// Queries received, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn latency_for(&self, query: &str) -> Option<StdDuration> {
        let per_query = self.latencies.lock().unwrap().get(query).copied();
        per_query.or(*self.default_latency.lock().unwrap())
    }
}

impl IPlaceSource for ScriptedPlaceSource {
    async fn fetch_predictions(
        &self,
        query: &str,
        _options: &PredictionOptions,
    ) -> Result<Vec<RemotePrediction>, RemoteError> {
        let query = normalize(query);
        self.prediction_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());
        if let Some(latency) = self.latency_for(&query) {
            tokio::time::sleep(latency).await;
        }
        let scripted = self.predictions.lock().unwrap().get(&query).cloned();
        scripted.unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_details(
        &self,
        place_id: &str,
        _options: &DetailOptions,
    ) -> Result<PlaceDetails, RemoteError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let found = self.details.lock().unwrap().get(place_id).cloned();
        found.ok_or_else(|| RemoteError::Network {
            reason: format!("no details scripted for {place_id}"),
        })
    }
}

// ── Store ────────────────────────────────────────────────────────────────

/// In-memory store with switchable failures.
#[derive(Debug, Default)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    write_attempts: AtomicUsize,
}

impl FailingStore {
    /// A store where every write fails.
    pub fn failing_writes() -> Self {
        let store = Self::default();
        store.set_fail_writes(true);
        store
    }

    /// A store where every read and write fails.
    pub fn unavailable() -> Self {
        let store = Self::failing_writes();
        store.set_fail_reads(true);
        store
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn write_attempts(&self) -> usize {
        self.write_attempts.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    fn check_read(&self) -> LocusResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(unavailable("reads disabled"));
        }
        Ok(())
    }

    fn check_write(&self) -> LocusResult<()> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(unavailable("writes disabled"));
        }
        Ok(())
    }
}

fn unavailable(reason: &str) -> locus_core::LocusError {
    StorageError::Unavailable {
        reason: reason.to_string(),
    }
    .into()
}

impl IKeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> LocusResult<Option<String>> {
        self.check_read()?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> LocusResult<()> {
        self.check_write()?;
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> LocusResult<()> {
        self.check_write()?;
        self.inner.remove(key).await
    }

    async fn remove_many(&self, keys: &[String]) -> LocusResult<()> {
        self.check_write()?;
        self.inner.remove_many(keys).await
    }

    async fn list_keys(&self) -> LocusResult<Vec<String>> {
        self.check_read()?;
        self.inner.list_keys().await
    }
}

// ── Builders ─────────────────────────────────────────────────────────────

pub fn remote_prediction(place_id: &str, description: &str, types: &[&str]) -> RemotePrediction {
    let (main, secondary) = description
        .split_once(", ")
        .unwrap_or((description, ""));
    RemotePrediction {
        place_id: place_id.to_string(),
        description: description.to_string(),
        main_text: main.to_string(),
        secondary_text: secondary.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn remote_candidate(place_id: &str, description: &str, types: &[&str]) -> PlaceCandidate {
    PlaceCandidate::from_remote(remote_prediction(place_id, description, types))
}

/// A candidate with an explicit source, for merge tests.
pub fn candidate(place_id: &str, description: &str, source: CandidateSource) -> PlaceCandidate {
    let mut c = remote_candidate(place_id, description, &[]);
    c.source = source;
    c.is_favorite = source == CandidateSource::Favorite;
    c
}

pub fn place_details(place_id: &str, name: &str) -> PlaceDetails {
    PlaceDetails {
        place_id: place_id.to_string(),
        name: name.to_string(),
        formatted_address: format!("{name}, Milano, Italia"),
        location: Some(LatLng {
            lat: 45.4642,
            lng: 9.19,
        }),
        types: BTreeSet::from(["point_of_interest".to_string()]),
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────

/// A usage-history ranking scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageScenario {
    pub description: String,
    pub now: DateTime<Utc>,
    pub records: Vec<UsageFixture>,
    pub query: String,
    pub expected_order: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsageFixture {
    pub term: String,
    pub count: u64,
    pub days_ago: i64,
}

impl UsageScenario {
    /// Materialize the fixture rows relative to `self.now`.
    pub fn usage_records(&self) -> Vec<UsageRecord> {
        self.records
            .iter()
            .map(|r| UsageRecord {
                term: normalize(&r.term),
                count: r.count,
                last_used: self.now - Duration::days(r.days_ago),
                place_id: None,
            })
            .collect()
    }
}

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The Milan usage ranking scenario.
pub fn milan_usage() -> UsageScenario {
    load_fixture("scenarios/milan_usage.json")
}

/// Canned remote predictions for queries around Milan.
pub fn milan_predictions() -> Vec<RemotePrediction> {
    load_fixture("scenarios/milan_predictions.json")
}
