use serde::{Deserialize, Serialize};

use crate::errors::RemoteError;
use crate::models::{LatLng, PlaceDetails, RemotePrediction};

/// Options forwarded with every prediction request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionOptions {
    pub country: Option<String>,
    pub language: Option<String>,
    pub location_bias: Option<LatLng>,
    pub radius_m: Option<u32>,
}

/// Options forwarded with every detail request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailOptions {
    pub language: Option<String>,
    /// Restrict the response to these fields; empty = source default.
    pub fields: Vec<String>,
}

/// Remote place prediction and detail source.
///
/// No timeout is assumed on the implementation side; callers enforce one.
#[allow(async_fn_in_trait)]
pub trait IPlaceSource: Send + Sync {
    async fn fetch_predictions(
        &self,
        query: &str,
        options: &PredictionOptions,
    ) -> Result<Vec<RemotePrediction>, RemoteError>;

    async fn fetch_details(
        &self,
        place_id: &str,
        options: &DetailOptions,
    ) -> Result<PlaceDetails, RemoteError>;
}
