//! The ranking pipeline: category inference, distance, scoring, and the
//! position/leaderboard computation, plus the interactive lookup session.
//!
//! The pure pieces ([`classify`], [`distance_meters`], [`score`],
//! [`rank_candidates`]) take all inputs as parameters and never touch I/O;
//! the async pieces ([`rank`], [`LookupSession`]) suspend only on provider
//! calls and the debounce sleep.

mod classify;
mod geo;
mod rank;
mod score;
mod session;

pub use classify::classify;
pub use geo::distance_meters;
pub use rank::{rank, rank_candidates};
pub use score::score;
pub use session::{LookupOutcome, LookupSession, Notice, SessionSettings, Suggestions};
