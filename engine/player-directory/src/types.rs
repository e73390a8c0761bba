use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the static player roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerIdentity {
    /// Provider player ID (e.g., 2544 for LeBron James)
    pub id: u32,
    /// Full display name (e.g., "LeBron James")
    pub full_name: String,
    /// Whether the player is currently on an NBA roster
    pub is_active: bool,
}

/// On-disk roster file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryFile {
    /// When this roster snapshot was taken
    pub last_updated: DateTime<Utc>,
    /// All known players
    pub players: Vec<PlayerIdentity>,
}
