//! Error types for the game log client

use thiserror::Error;

/// Errors that can occur while fetching or normalizing a game log
#[derive(Error, Debug)]
pub enum GameLogError {
    #[error("Game log request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Game log request failed with status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Unable to parse game log response: {0}")]
    Unparseable(String),

    #[error("Game record {index} is missing numeric field '{field}'")]
    MalformedRecord { index: usize, field: &'static str },
}

/// Result type for game log operations
pub type GameLogResult<T> = Result<T, GameLogError>;
