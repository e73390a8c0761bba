//! Error types for the player directory

use thiserror::Error;

/// Errors that can occur while loading or querying the directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("No player found for '{0}'")]
    PlayerNotFound(String),

    #[error("Failed to read roster file: {0}")]
    RosterRead(#[from] std::io::Error),

    #[error("Failed to parse roster file: {0}")]
    RosterParse(#[from] serde_json::Error),
}

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;
