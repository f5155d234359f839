//! Client for the external places-search provider.
//!
//! [`PlacesClient`] wraps the provider's REST endpoints (autocomplete
//! predictions, place details, nearby search, text search) with typed
//! responses and a shared error taxonomy. [`retrieve`] layers the
//! nearby-then-text fallback policy on top of the raw client and never
//! fails: exhausted retrieval degrades to an empty candidate list.

mod client;
mod error;
mod normalize;
mod retriever;
mod retry;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use normalize::normalize_place;
pub use retriever::{retrieve, RetrievalPolicy};
pub use types::{GeometryRecord, LatLngRecord, PlaceRecord, PredictionRecord};
