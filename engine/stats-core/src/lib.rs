//! Stats Core
//!
//! Pure statistics computations for the matchup tools: windowed per-game
//! averaging over a player's game log, attempt-weighted team aggregation,
//! and category-by-category comparison of two teams. No I/O lives here;
//! game logs come from the `gamelog-client` crate.

pub mod compare;
pub mod team;
pub mod types;
pub mod window;

pub use compare::{compare_teams, DEFAULT_CATEGORIES};
pub use team::compute_team_summary;
pub use types::{Category, CategoryVerdict, GameRecord, Leader, PlayerWindowSummary, TeamSummary};
pub use window::compute_window_summary;
