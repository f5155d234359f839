//! Domain types for the ranking pipeline.
//!
//! Everything here is plain data: a [`Place`] is immutable once normalized
//! from a provider record, a [`ScoredCandidate`] lives only for the duration
//! of one ranking computation, and a [`RankingResult`] is produced once per
//! lookup and handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A business, either the lookup target or a competitor candidate.
///
/// Missing provider fields are substituted at normalization time: absent
/// rating becomes `0.0`, absent review count becomes `0`, absent geometry
/// becomes `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub place_id: String,
    pub name: String,
    /// Star rating in `[0.0, 5.0]`, `0.0` when the provider omits it.
    pub rating: f64,
    pub review_count: u32,
    pub location: Option<Coordinate>,
    pub address: Option<String>,
    /// Provider category tags, used by the classifier fallback.
    pub type_tags: Vec<String>,
}

impl Place {
    /// True when `other` refers to the same business.
    ///
    /// Identity is the provider `place_id`; when the id is empty the
    /// comparison falls back to exact name equality.
    #[must_use]
    pub fn same_business(&self, other: &Place) -> bool {
        if self.place_id.is_empty() {
            self.name == other.name
        } else {
            self.place_id == other.place_id
        }
    }
}

/// An inferred search category: a canonical provider type code plus an
/// optional refining keyword. Derived once per lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub category_type: String,
    pub keyword: String,
}

impl CategorySpec {
    #[must_use]
    pub fn new(category_type: &str, keyword: &str) -> Self {
        Self {
            category_type: category_type.to_string(),
            keyword: keyword.to_string(),
        }
    }

    /// The query string used for the text-search fallback:
    /// `"<keyword> <type>"`, or just `<type>` when the keyword is empty.
    #[must_use]
    pub fn fallback_query(&self) -> String {
        if self.keyword.is_empty() {
            self.category_type.clone()
        } else {
            format!("{} {}", self.keyword, self.category_type)
        }
    }
}

/// A place with its computed distance from the search center and its
/// composite score.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub place: Place,
    pub distance_meters: f64,
    pub score: f64,
}

/// The target's 1-based rank within the scored set, or `Unknown` when no
/// competitor data was available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankPosition {
    Known(usize),
    Unknown,
}

impl std::fmt::Display for RankPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankPosition::Known(n) => write!(f, "{n}"),
            RankPosition::Unknown => write!(f, "unknown"),
        }
    }
}

/// The outcome of one ranking computation.
#[derive(Debug, Clone)]
pub struct RankingResult {
    pub position: RankPosition,
    /// Competitors strictly ahead of the target, highest score first,
    /// capped at the configured display limit.
    pub competitors_ahead: Vec<ScoredCandidate>,
}
