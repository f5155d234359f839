//! Interactive lookup session: debounced suggestions, staleness guarding,
//! and the full predict → details → rank flow.
//!
//! The session owns the provider client and a monotonically increasing
//! request sequence. Each suggestion request takes a ticket; any newer
//! request bumps the sequence, and a ticket holder that observes a moved
//! sequence — before or after its provider await — reports itself stale and
//! surfaces nothing. Only the most recent request may reach the display.
//!
//! Provider failures never escape as errors: they degrade to informational
//! [`Notice`]s and the session stays usable.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use rivalrank_core::{AppConfig, CategorySpec, Place, RankPosition, RankingResult};
use rivalrank_places::{normalize_place, PlacesClient, PredictionRecord, RetrievalPolicy};
use tokio::sync::mpsc;

use crate::classify::classify;
use crate::rank::rank;

/// User-facing informational messages for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Loading,
    NoResults,
    DetailsUnavailable,
    NoCompetitors,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Loading => write!(f, "Loading details..."),
            Notice::NoResults => write!(f, "No results found"),
            Notice::DetailsUnavailable => {
                write!(f, "Could not load business details. Try another search.")
            }
            Notice::NoCompetitors => write!(f, "No competitors found nearby"),
        }
    }
}

/// Session tuning, usually derived from [`AppConfig`].
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub debounce_ms: u64,
    pub min_query_chars: usize,
    pub max_predictions: usize,
    pub language: String,
    pub retrieval: RetrievalPolicy,
    pub display_cap: usize,
}

impl SessionSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            debounce_ms: config.debounce_ms,
            min_query_chars: config.min_query_chars,
            max_predictions: config.max_predictions,
            language: config.language.clone(),
            retrieval: RetrievalPolicy {
                radius_m: config.search_radius_m,
                max_retries: config.max_retries,
                backoff_base_ms: config.retry_backoff_base_ms,
            },
            display_cap: config.display_cap,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            min_query_chars: 3,
            max_predictions: 6,
            language: "en".to_string(),
            retrieval: RetrievalPolicy::default(),
            display_cap: 7,
        }
    }
}

/// Outcome of a debounced suggestion request.
#[derive(Debug)]
pub enum Suggestions {
    /// The query was below the minimum length; suggestion state clears.
    Cleared,
    /// A newer request superseded this one; show nothing.
    Stale,
    Ready(Vec<PredictionRecord>),
    /// The provider failed or had no predictions; a notice was emitted.
    Unavailable,
}

/// Outcome of a full lookup.
#[derive(Debug)]
pub enum LookupOutcome {
    Ranked {
        target: Place,
        category: CategorySpec,
        result: RankingResult,
    },
    /// No prediction matched the query.
    NoMatches,
    /// The detail record could not be loaded.
    DetailsUnavailable,
}

/// One user's lookup context: provider client, settings, request sequence,
/// and the notice channel feeding the presentation layer.
pub struct LookupSession {
    client: PlacesClient,
    settings: SessionSettings,
    seq: AtomicU64,
    notices: mpsc::UnboundedSender<Notice>,
}

impl LookupSession {
    /// Creates the session and the receiving end of its notice channel.
    #[must_use]
    pub fn new(
        client: PlacesClient,
        settings: SessionSettings,
    ) -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (notices, rx) = mpsc::unbounded_channel();
        (
            Self {
                client,
                settings,
                seq: AtomicU64::new(0),
                notices,
            },
            rx,
        )
    }

    fn notify(&self, notice: Notice) {
        // The presentation side may have hung up; that is not our problem.
        let _ = self.notices.send(notice);
    }

    /// Debounced autocomplete.
    ///
    /// Sleeps for the debounce window before issuing the provider request,
    /// so a burst of keystrokes collapses into a single query: every newer
    /// call bumps the sequence and everything older resolves to
    /// [`Suggestions::Stale`]. The staleness check runs again after the
    /// provider await, so an in-flight response that lost the race is
    /// discarded rather than rendered.
    pub async fn suggest(&self, query: &str) -> Suggestions {
        let query = query.trim();
        if query.chars().count() < self.settings.min_query_chars {
            // Short input clears the dropdown and invalidates anything
            // still in flight.
            self.seq.fetch_add(1, Ordering::SeqCst);
            return Suggestions::Cleared;
        }

        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(Duration::from_millis(self.settings.debounce_ms)).await;
        if self.seq.load(Ordering::SeqCst) != ticket {
            return Suggestions::Stale;
        }

        let outcome = self.client.predict(query, &self.settings.language).await;
        if self.seq.load(Ordering::SeqCst) != ticket {
            return Suggestions::Stale;
        }

        match outcome {
            Ok(mut predictions) if !predictions.is_empty() => {
                predictions.truncate(self.settings.max_predictions);
                Suggestions::Ready(predictions)
            }
            Ok(_) => {
                self.notify(Notice::NoResults);
                Suggestions::Unavailable
            }
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "autocomplete request failed");
                self.notify(Notice::NoResults);
                Suggestions::Unavailable
            }
        }
    }

    /// Full lookup from a raw query: takes the top prediction and ranks it.
    pub async fn lookup(&self, query: &str) -> LookupOutcome {
        let query = query.trim();
        match self.client.predict(query, &self.settings.language).await {
            Ok(predictions) => match predictions.into_iter().next() {
                Some(top) => self.lookup_selected(query, &top.place_id).await,
                None => {
                    self.notify(Notice::NoResults);
                    LookupOutcome::NoMatches
                }
            },
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "prediction lookup failed");
                self.notify(Notice::NoResults);
                LookupOutcome::NoMatches
            }
        }
    }

    /// Ranks a business the user selected from the suggestion list.
    ///
    /// `query_text` is the text the user typed; it drives category
    /// inference together with the detail record's type tags.
    pub async fn lookup_selected(&self, query_text: &str, place_id: &str) -> LookupOutcome {
        self.notify(Notice::Loading);

        let record = match self.client.get_details(place_id).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(place_id = %place_id, error = %e, "detail fetch failed");
                self.notify(Notice::DetailsUnavailable);
                return LookupOutcome::DetailsUnavailable;
            }
        };
        let target = normalize_place(record);
        let category = classify(query_text, &target.type_tags);

        // Without a target location there is no center to search around.
        let Some(center) = target.location else {
            tracing::warn!(target = %target.name, "detail record has no location");
            self.notify(Notice::NoCompetitors);
            return LookupOutcome::Ranked {
                target,
                category,
                result: RankingResult {
                    position: RankPosition::Unknown,
                    competitors_ahead: vec![],
                },
            };
        };

        let result = rank(
            &self.client,
            &target,
            center,
            &category,
            &self.settings.retrieval,
            self.settings.display_cap,
        )
        .await;

        if result.position == RankPosition::Unknown {
            self.notify(Notice::NoCompetitors);
        }

        LookupOutcome::Ranked {
            target,
            category,
            result,
        }
    }
}
