use serde::{Deserialize, Serialize};

/// Configuration for the game log client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameLogConfig {
    /// Base URL of the stats provider
    pub base_url: String,

    /// Per-request timeout in seconds; a timeout is a fetch failure, never
    /// retried
    pub timeout_secs: u64,

    /// Season identifier passed through to the provider (e.g., "2025-26")
    pub season: String,

    /// How long identical summary lookups are served from cache
    pub cache_ttl_secs: u64,
}

impl Default for GameLogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://stats.nba.com/stats".to_string(),
            timeout_secs: 30,
            season: "2025-26".to_string(),
            cache_ttl_secs: 600,
        }
    }
}

impl GameLogConfig {
    /// Load configuration, overriding defaults from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("GAMELOG_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(season) = std::env::var("GAMELOG_SEASON") {
            config.season = season;
        }

        if let Ok(timeout) = std::env::var("GAMELOG_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().unwrap_or(config.timeout_secs);
        }

        config
    }
}
