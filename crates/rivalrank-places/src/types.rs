//! Places provider wire types.
//!
//! All types model the JSON structures returned by the provider's REST
//! endpoints. Every response carries a top-level `"status"` field
//! (`"OK"`, `"ZERO_RESULTS"`, `"OVER_QUERY_LIMIT"`, ...); [`ApiResponse`]
//! captures that envelope generically. Fields the provider may omit are
//! `#[serde(default)]` or `Option` so partial records never fail to parse.

use serde::Deserialize;

/// Top-level envelope for all provider responses.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

// ---------------------------------------------------------------------------
// autocomplete
// ---------------------------------------------------------------------------

/// Wrapper for the autocomplete response: `{ "predictions": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct PredictionsResponse {
    #[serde(default)]
    pub predictions: Vec<PredictionRecord>,
}

/// A single autocomplete prediction.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRecord {
    pub place_id: String,
    #[serde(default)]
    pub description: String,
    pub structured_formatting: StructuredFormatting,
}

/// The split main/secondary rendering of a prediction.
#[derive(Debug, Clone, Deserialize)]
pub struct StructuredFormatting {
    pub main_text: String,
    #[serde(default)]
    pub secondary_text: String,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

/// Wrapper for the details response: `{ "result": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub result: PlaceRecord,
}

// ---------------------------------------------------------------------------
// nearby search / text search
// ---------------------------------------------------------------------------

/// Wrapper for the search responses: `{ "results": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceRecord>,
}

/// A place-shaped record from any search or detail endpoint.
///
/// Rating, review count, and geometry are routinely missing for sparsely
/// reviewed businesses; downstream normalization substitutes defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRecord {
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub geometry: Option<GeometryRecord>,
    /// Detail endpoint address field.
    #[serde(default)]
    pub formatted_address: Option<String>,
    /// Nearby-search address field.
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeometryRecord {
    pub location: LatLngRecord,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLngRecord {
    pub lat: f64,
    pub lng: f64,
}
