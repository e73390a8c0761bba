//! Game Log Client
//!
//! Fetches per-game logs from the stats.nba.com provider and turns them into
//! the windowed summaries computed by `stats-core`. The provider returns its
//! payload in one of several equivalent shapes; `normalize` converts all of
//! them into the canonical `GameRecord` form before any aggregation runs.
//!
//! One bounded-timeout request per lookup, no retries. A short-lived TTL
//! cache in `SummaryService` absorbs repeated identical queries.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod summary;

pub use client::GameLogClient;
pub use config::GameLogConfig;
pub use error::{GameLogError, GameLogResult};
pub use summary::{RosterPlayer, RosterWarning, SummaryService, TeamWindowSummary};
