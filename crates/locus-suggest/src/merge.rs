//! Source merging and de-duplication.
//!
//! Candidates are concatenated in source priority order
//! (favorite, history, frequency, remote) and de-duplicated by place id,
//! keeping the first copy. Only the remote tail is re-ranked; local entries
//! keep the order their source gave them.

use std::collections::HashSet;

use locus_core::models::PlaceCandidate;

/// Per-source candidate lists, each already in its own source order.
#[derive(Debug, Clone, Default)]
pub struct SourceLists {
    pub favorites: Vec<PlaceCandidate>,
    pub history: Vec<PlaceCandidate>,
    pub frequency: Vec<PlaceCandidate>,
    pub remote: Vec<PlaceCandidate>,
}

impl SourceLists {
    fn concat(self) -> Vec<PlaceCandidate> {
        let mut all = self.favorites;
        all.extend(self.history);
        all.extend(self.frequency);
        all.extend(self.remote);
        all
    }
}

/// Merge `sources` into at most `limit` candidates.
///
/// Any surviving candidate whose id is in `favorite_ids` is flagged as a
/// favorite. `rerank` sees only the remote candidates that survived
/// de-duplication. Deterministic for identical inputs.
pub fn merge_candidates<F>(
    sources: SourceLists,
    favorite_ids: &HashSet<String>,
    rerank: F,
    limit: usize,
) -> Vec<PlaceCandidate>
where
    F: FnOnce(Vec<PlaceCandidate>) -> Vec<PlaceCandidate>,
{
    let mut local = Vec::new();
    let mut remote = Vec::new();

    for mut candidate in deduplicate(sources.concat()) {
        candidate.is_favorite = favorite_ids.contains(&candidate.place_id);
        if candidate.source.is_local() {
            local.push(candidate);
        } else {
            remote.push(candidate);
        }
    }

    let mut merged = local;
    if merged.len() < limit {
        merged.extend(rerank(remote));
    }
    merged.truncate(limit);
    merged
}

/// Keep the first candidate for each place id, preserving order.
pub fn deduplicate(candidates: Vec<PlaceCandidate>) -> Vec<PlaceCandidate> {
    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.place_id.clone()))
        .collect()
}
