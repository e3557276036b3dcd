use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RemotePrediction, UsageRecord};
use crate::constants::SYNTHETIC_ID_PREFIX;
use crate::text::{contains_normalized, normalize};

/// Where a candidate came from.
///
/// Variants are declared in merge priority order, so the derived `Ord`
/// ranks `Favorite` first and `Remote` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    Favorite,
    History,
    Frequency,
    Remote,
}

impl CandidateSource {
    /// Whether this source is local to the device.
    pub fn is_local(self) -> bool {
        !matches!(self, Self::Remote)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Favorite => "favorite",
            Self::History => "history",
            Self::Frequency => "frequency",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single suggestable place or search term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub description: String,
    pub main_text: String,
    pub secondary_text: String,
    #[serde(default)]
    pub types: BTreeSet<String>,
    pub source: CandidateSource,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
    #[serde(default)]
    pub use_count: u64,
}

impl PlaceCandidate {
    /// Adapt a remote prediction.
    pub fn from_remote(prediction: RemotePrediction) -> Self {
        Self {
            place_id: prediction.place_id,
            description: prediction.description,
            main_text: prediction.main_text,
            secondary_text: prediction.secondary_text,
            types: prediction.types.into_iter().collect(),
            source: CandidateSource::Remote,
            is_favorite: false,
            last_used: None,
            use_count: 0,
        }
    }

    /// Adapt a usage record into a frequency-sourced candidate.
    ///
    /// Records that remember the selected place reuse its id so they collapse
    /// onto the history or favorite copy during de-duplication.
    pub fn from_usage(record: &UsageRecord) -> Self {
        let place_id = record
            .place_id
            .clone()
            .unwrap_or_else(|| Self::synthetic_id(&record.term));
        Self {
            place_id,
            description: record.term.clone(),
            main_text: record.term.clone(),
            secondary_text: String::new(),
            types: BTreeSet::new(),
            source: CandidateSource::Frequency,
            is_favorite: false,
            last_used: Some(record.last_used),
            use_count: record.count,
        }
    }

    /// A pure-text history entry for a typed query that never resolved to a place.
    pub fn from_search_term(term: &str, now: DateTime<Utc>) -> Self {
        let term = normalize(term);
        Self {
            place_id: Self::synthetic_id(&term),
            description: term.clone(),
            main_text: term,
            secondary_text: String::new(),
            types: BTreeSet::new(),
            source: CandidateSource::History,
            is_favorite: false,
            last_used: Some(now),
            use_count: 1,
        }
    }

    /// Canonical favorite record for this place.
    pub fn to_favorite(&self, now: DateTime<Utc>) -> Self {
        Self {
            source: CandidateSource::Favorite,
            is_favorite: true,
            last_used: Some(now),
            ..self.clone()
        }
    }

    /// Canonical history record for this place, before its first use is counted.
    ///
    /// History never stores the favorite flag; it is derived from the
    /// favorites list at merge time.
    pub fn to_history(&self) -> Self {
        Self {
            source: CandidateSource::History,
            is_favorite: false,
            use_count: 0,
            ..self.clone()
        }
    }

    /// Synthetic id for a history-only term.
    pub fn synthetic_id(term: &str) -> String {
        format!("{SYNTHETIC_ID_PREFIX}{}", normalize(term))
    }

    /// Whether the id was synthesized from a search term.
    pub fn is_synthetic(&self) -> bool {
        self.place_id.starts_with(SYNTHETIC_ID_PREFIX)
    }

    /// Case-insensitive substring match against the description or main text.
    /// `needle` must already be normalized.
    pub fn matches(&self, needle: &str) -> bool {
        contains_normalized(&self.description, needle) || contains_normalized(&self.main_text, needle)
    }

    /// Record one more use at `now`.
    pub fn mark_used(&mut self, now: DateTime<Utc>) {
        self.use_count += 1;
        self.last_used = Some(self.last_used.map_or(now, |prev| prev.max(now)));
    }
}
