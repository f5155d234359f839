//! HTTP client for the places-search provider REST API.
//!
//! Wraps `reqwest` with provider-specific error handling, API key
//! management, and typed response deserialization. All endpoints check the
//! `"status"` field in the JSON envelope: `"ZERO_RESULTS"` is a successful
//! empty response (distinct from failure), `"OVER_QUERY_LIMIT"` becomes
//! [`PlacesError::QuotaExceeded`], and any other non-`"OK"` status surfaces
//! as [`PlacesError::ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};
use rivalrank_core::Coordinate;

use crate::error::PlacesError;
use crate::types::{
    ApiResponse, DetailsResponse, PlaceRecord, PredictionRecord, PredictionsResponse,
    SearchResponse,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Fields requested from the detail endpoint. Kept explicit so the target's
/// detail record always carries everything scoring and classification need.
const DETAIL_FIELDS: &str = "place_id,name,formatted_address,geometry,rating,user_ratings_total,types";

/// Client for the places-search provider.
///
/// Manages the HTTP client, API key, and base URL. Use [`PlacesClient::new`]
/// for production or [`PlacesClient::with_base_url`] to point at a mock
/// server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production provider API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("rivalrank/0.1 (local-rank-estimation)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining endpoint paths appends rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| PlacesError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches autocomplete predictions for a partial business-name query.
    ///
    /// Restricted to establishment results. Returns an empty list for
    /// `ZERO_RESULTS`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::QuotaExceeded`] / [`PlacesError::ApiError`] on a
    ///   non-success provider status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn predict(
        &self,
        input: &str,
        language: &str,
    ) -> Result<Vec<PredictionRecord>, PlacesError> {
        let url = self.build_url(
            "autocomplete/json",
            &[
                ("input", input),
                ("language", language),
                ("types", "establishment"),
            ],
        )?;
        let body = self.request_json(&url).await?;
        if !Self::check_status(&body)? {
            return Ok(vec![]);
        }

        let envelope: ApiResponse<PredictionsResponse> =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("autocomplete(input={input})"),
                source: e,
            })?;

        Ok(envelope.data.predictions)
    }

    /// Fetches the detail record for a place by its provider id.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiError`] on a non-success provider status or when
    ///   no detail record exists for the id.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn get_details(&self, place_id: &str) -> Result<PlaceRecord, PlacesError> {
        let url = self.build_url(
            "details/json",
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        )?;
        let body = self.request_json(&url).await?;
        if !Self::check_status(&body)? {
            return Err(PlacesError::ApiError(format!(
                "no details for place {place_id}"
            )));
        }

        let envelope: ApiResponse<DetailsResponse> =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        Ok(envelope.data.result)
    }

    /// Nearby search around a center coordinate, scoped by category type
    /// and an optional refining keyword. Returns an empty list for
    /// `ZERO_RESULTS`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::QuotaExceeded`] / [`PlacesError::ApiError`] on a
    ///   non-success provider status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_nearby(
        &self,
        center: Coordinate,
        radius_m: u32,
        category_type: &str,
        keyword: Option<&str>,
    ) -> Result<Vec<PlaceRecord>, PlacesError> {
        let location = format!("{},{}", center.lat, center.lng);
        let radius = radius_m.to_string();
        let mut params = vec![
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("type", category_type),
        ];
        if let Some(kw) = keyword {
            params.push(("keyword", kw));
        }

        let url = self.build_url("nearbysearch/json", &params)?;
        let body = self.request_json(&url).await?;
        if !Self::check_status(&body)? {
            return Ok(vec![]);
        }

        let envelope: ApiResponse<SearchResponse> =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("nearbysearch(type={category_type})"),
                source: e,
            })?;

        Ok(envelope.data.results)
    }

    /// Free-text search around a center coordinate. Returns an empty list
    /// for `ZERO_RESULTS`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::QuotaExceeded`] / [`PlacesError::ApiError`] on a
    ///   non-success provider status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_by_text(
        &self,
        center: Coordinate,
        radius_m: u32,
        query: &str,
    ) -> Result<Vec<PlaceRecord>, PlacesError> {
        let location = format!("{},{}", center.lat, center.lng);
        let radius = radius_m.to_string();
        let url = self.build_url(
            "textsearch/json",
            &[
                ("query", query),
                ("location", location.as_str()),
                ("radius", radius.as_str()),
            ],
        )?;
        let body = self.request_json(&url).await?;
        if !Self::check_status(&body)? {
            return Ok(vec![]);
        }

        let envelope: ApiResponse<SearchResponse> =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("textsearch(query={query})"),
                source: e,
            })?;

        Ok(envelope.data.results)
    }

    /// Builds the full endpoint URL with properly percent-encoded query
    /// parameters, appending the API key last.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::ApiError(format!("invalid endpoint '{endpoint}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on network failure or a non-2xx status.
    /// Returns [`PlacesError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field.
    ///
    /// Returns `Ok(true)` for `"OK"`, `Ok(false)` for `"ZERO_RESULTS"`
    /// (success with no results), and the mapped error for anything else.
    fn check_status(body: &serde_json::Value) -> Result<bool, PlacesError> {
        let status = body
            .get("status")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("MISSING_STATUS");
        match status {
            "OK" => Ok(true),
            "ZERO_RESULTS" => Ok(false),
            other => {
                let msg = body
                    .get("error_message")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("no message");
                if other == "OVER_QUERY_LIMIT" {
                    Err(PlacesError::QuotaExceeded(msg.to_string()))
                } else {
                    Err(PlacesError::ApiError(format!("{other}: {msg}")))
                }
            }
        }
    }
}
