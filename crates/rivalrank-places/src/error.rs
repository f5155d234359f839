use thiserror::Error;

/// Errors returned by the places provider client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider reported `OVER_QUERY_LIMIT`. Never retried.
    #[error("places API quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The provider returned a non-success status (e.g. `REQUEST_DENIED`,
    /// `INVALID_REQUEST`) with an optional message.
    #[error("places API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
