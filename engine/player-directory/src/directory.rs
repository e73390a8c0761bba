use crate::error::{DirectoryError, DirectoryResult};
use crate::types::{DirectoryFile, PlayerIdentity};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Player Directory - name search over a static roster
///
/// The roster is a snapshot loaded once from JSON; the directory itself
/// holds no mutable state between queries.
pub struct PlayerDirectory {
    players: Vec<PlayerIdentity>,
}

impl PlayerDirectory {
    /// Build a directory from an in-memory roster (used by tests and by
    /// callers that load the roster themselves). Duplicate IDs are dropped,
    /// keeping the first occurrence.
    pub fn from_players(players: Vec<PlayerIdentity>) -> Self {
        let mut seen = HashSet::new();
        let players: Vec<PlayerIdentity> =
            players.into_iter().filter(|p| seen.insert(p.id)).collect();
        Self { players }
    }

    /// Load the roster from a JSON file
    pub async fn load_from_file<P: AsRef<Path>>(file_path: P) -> DirectoryResult<Self> {
        info!("Loading player roster from: {:?}", file_path.as_ref());

        let json_content = tokio::fs::read_to_string(&file_path).await?;
        let file: DirectoryFile = serde_json::from_str(&json_content)?;

        info!("Loaded {} players from roster file", file.players.len());
        Ok(Self::from_players(file.players))
    }

    /// Number of players in the directory
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Search for players by partial name match, case-insensitive.
    ///
    /// Results are deduplicated by ID and ordered with active players
    /// first, then alphabetically by name.
    pub fn search(&self, query: &str) -> Vec<PlayerIdentity> {
        let query_lower = query.to_lowercase();
        let mut matches: Vec<PlayerIdentity> = self
            .players
            .iter()
            .filter(|p| p.full_name.to_lowercase().contains(&query_lower))
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            (!a.is_active, a.full_name.to_lowercase())
                .cmp(&(!b.is_active, b.full_name.to_lowercase()))
        });
        matches
    }

    /// Resolve a full name to a single player.
    ///
    /// Prefers an exact case-insensitive match among the candidates; falls
    /// back to the first candidate otherwise. No candidates at all is a
    /// `PlayerNotFound` error.
    pub fn resolve_full_name(&self, full_name: &str) -> DirectoryResult<PlayerIdentity> {
        let candidates = self.search(full_name);
        if candidates.is_empty() {
            return Err(DirectoryError::PlayerNotFound(full_name.to_string()));
        }

        let exact = candidates
            .iter()
            .find(|p| p.full_name.eq_ignore_ascii_case(full_name))
            .cloned();

        Ok(exact.unwrap_or_else(|| candidates[0].clone()))
    }
}
