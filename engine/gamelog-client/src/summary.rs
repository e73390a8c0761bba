//! Windowed summaries on top of the raw game log fetch
//!
//! Single-player lookups are fetch + `stats-core` averaging, behind a TTL
//! cache. Roster lookups fetch each player independently and degrade
//! per-player failures into warnings: one cold player with a flaky fetch
//! never sinks the whole team computation.

use crate::cache::TtlCache;
use crate::client::GameLogClient;
use crate::config::GameLogConfig;
use crate::error::GameLogResult;
use stats_core::{compute_team_summary, compute_window_summary, PlayerWindowSummary, TeamSummary};
use std::time::Duration;
use tracing::{info, warn};

/// One roster slot: a resolved player identity plus display name
#[derive(Debug, Clone)]
pub struct RosterPlayer {
    pub id: u32,
    pub name: String,
}

/// A player excluded from a team summary, and why
#[derive(Debug, Clone)]
pub struct RosterWarning {
    pub player: String,
    pub error: String,
}

/// Team roll-up plus the players that had to be left out
#[derive(Debug, Clone)]
pub struct TeamWindowSummary {
    pub summary: TeamSummary,
    pub warnings: Vec<RosterWarning>,
}

/// Fetch-and-average service used by the presentation layer
pub struct SummaryService {
    client: GameLogClient,
    cache: TtlCache<(u32, String, usize), PlayerWindowSummary>,
}

impl SummaryService {
    /// Create a service from configuration
    pub fn new(config: GameLogConfig) -> GameLogResult<Self> {
        let ttl = Duration::from_secs(config.cache_ttl_secs);
        let client = GameLogClient::new(config)?;
        Ok(Self { client, cache: TtlCache::new(ttl) })
    }

    /// Season the underlying client was configured for
    pub fn season(&self) -> &str {
        self.client.season()
    }

    /// Average a player's most recent `window` games for the given season.
    ///
    /// Identical lookups within the cache TTL are served without another
    /// provider round trip.
    pub async fn player_window_summary(
        &self,
        player_id: u32,
        season: &str,
        window: usize,
    ) -> GameLogResult<PlayerWindowSummary> {
        let key = (player_id, season.to_string(), window);
        if let Some(cached) = self.cache.get(&key) {
            info!("Serving cached window summary for player {}", player_id);
            return Ok(cached);
        }

        let records = self.client.fetch_game_log(player_id, season).await?;
        let summary = compute_window_summary(&records, window);

        self.cache.insert(key, summary.clone());
        Ok(summary)
    }

    /// Aggregate a whole roster's windowed averages into a team summary.
    ///
    /// Players whose fetch fails are excluded and reported as warnings; the
    /// result reflects whoever could be fetched. An all-failed (or empty)
    /// roster yields an all-zero summary, which the caller may treat as it
    /// sees fit.
    pub async fn team_window_summary(
        &self,
        roster: &[RosterPlayer],
        season: &str,
        window: usize,
    ) -> TeamWindowSummary {
        let mut results = Vec::with_capacity(roster.len());
        for player in roster {
            let result = self.player_window_summary(player.id, season, window).await;
            results.push((player.name.clone(), result));
        }
        aggregate_roster(results)
    }
}

/// Fold per-player fetch results into a team summary, turning failures into
/// warnings. Split out from the async path so the exclusion behavior is
/// testable without a provider.
pub fn aggregate_roster(
    results: Vec<(String, GameLogResult<PlayerWindowSummary>)>,
) -> TeamWindowSummary {
    let mut summaries = Vec::with_capacity(results.len());
    let mut warnings = Vec::new();

    for (player, result) in results {
        match result {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                warn!("Failed to fetch {}: {}", player, e);
                warnings.push(RosterWarning { player, error: e.to_string() });
            }
        }
    }

    TeamWindowSummary { summary: compute_team_summary(&summaries), warnings }
}
