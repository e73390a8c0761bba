//! Player Directory
//!
//! Loads a static NBA roster from JSON and answers free-text name queries:
//! substring search (deduplicated, active players first) and exact
//! full-name resolution. This is the lookup side of the matchup tools; the
//! game logs themselves come from `gamelog-client`.

pub mod directory;
pub mod error;
pub mod types;

pub use directory::PlayerDirectory;
pub use error::{DirectoryError, DirectoryResult};
pub use types::{DirectoryFile, PlayerIdentity};
