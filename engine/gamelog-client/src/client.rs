use crate::config::GameLogConfig;
use crate::error::{GameLogError, GameLogResult};
use crate::normalize::extract_game_records;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use stats_core::GameRecord;
use std::time::Duration;
use tracing::info;

/// HTTP client for the stats.nba.com game log endpoint
///
/// One request per lookup, bounded by the configured timeout. A timeout or
/// provider error is a fetch failure surfaced to the caller; retries are
/// the caller's decision (and nobody here makes one).
pub struct GameLogClient {
    client: Client,
    config: GameLogConfig,
}

impl GameLogClient {
    /// Create a new client from configuration
    pub fn new(config: GameLogConfig) -> GameLogResult<Self> {
        // stats.nba.com rejects requests without browser-like headers.
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36",
            ),
        );
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Season the client was configured for
    pub fn season(&self) -> &str {
        &self.config.season
    }

    /// Fetch a player's regular-season game log, most-recent-first.
    ///
    /// The season identifier (e.g., "2025-26") is passed through to the
    /// provider unvalidated. The response is normalized into canonical
    /// `GameRecord`s regardless of which shape the provider chose.
    pub async fn fetch_game_log(
        &self,
        player_id: u32,
        season: &str,
    ) -> GameLogResult<Vec<GameRecord>> {
        let url = format!("{}/playergamelog", self.config.base_url);
        info!("Fetching game log for player {} season {}", player_id, season);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("PlayerID", player_id.to_string().as_str()),
                ("Season", season),
                ("SeasonType", "Regular Season"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GameLogError::Status(response.status()));
        }

        let body: Value = response.json().await?;
        let records = extract_game_records(&body)?;

        info!("Fetched {} games for player {}", records.len(), player_id);
        Ok(records)
    }
}
