//! Remote calls raced against an explicit timer.

use std::time::Duration;

use locus_core::errors::RemoteError;
use locus_core::models::{PlaceDetails, RemotePrediction};
use locus_core::traits::{DetailOptions, IPlaceSource, PredictionOptions};

/// Fetch predictions, failing with [`RemoteError::Timeout`] once `budget` elapses.
pub async fn fetch_predictions<R: IPlaceSource>(
    source: &R,
    query: &str,
    options: &PredictionOptions,
    budget: Duration,
) -> Result<Vec<RemotePrediction>, RemoteError> {
    tokio::time::timeout(budget, source.fetch_predictions(query, options))
        .await
        .map_err(|_| timed_out(budget))?
}

/// Fetch place details, failing with [`RemoteError::Timeout`] once `budget` elapses.
pub async fn fetch_details<R: IPlaceSource>(
    source: &R,
    place_id: &str,
    options: &DetailOptions,
    budget: Duration,
) -> Result<PlaceDetails, RemoteError> {
    tokio::time::timeout(budget, source.fetch_details(place_id, options))
        .await
        .map_err(|_| timed_out(budget))?
}

fn timed_out(budget: Duration) -> RemoteError {
    RemoteError::Timeout {
        after_ms: u64::try_from(budget.as_millis()).unwrap_or(u64::MAX),
    }
}
