use serde::{Deserialize, Serialize};
use std::fmt;

/// One player's box-score line for a single game.
///
/// Records arrive most-recent-first from the game log source and are
/// discarded after aggregation. All values are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    /// Three-pointers made
    pub threes_made: f64,
    pub fg_made: f64,
    pub fg_attempted: f64,
    pub ft_made: f64,
    pub ft_attempted: f64,
}

/// Per-game averages for one player over a window of recent games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerWindowSummary {
    /// Number of games actually aggregated. May be less than the requested
    /// window, and 0 when the player has no games this season; in that case
    /// every average below is 0 and should not be read as production.
    pub games_used: u32,

    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub threes_made: f64,

    /// Per-game makes/attempts, kept so team percentages can be weighted
    /// by attempts across a roster.
    pub fg_made_pg: f64,
    pub fg_attempted_pg: f64,
    pub ft_made_pg: f64,
    pub ft_attempted_pg: f64,

    /// Attempt-weighted over the window: total makes / total attempts,
    /// 0.0 when there were no attempts (no signal, not "shot 0%").
    pub fg_pct: f64,
    pub ft_pct: f64,
}

/// Projected team production per game, summed across a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub threes_made: f64,

    /// Weighted by summed per-game attempts across the roster, never an
    /// average of individual players' percentages.
    pub fg_pct: f64,
    pub ft_pct: f64,
}

impl TeamSummary {
    /// All-zero summary, the result of aggregating an empty roster.
    pub fn zero() -> Self {
        Self {
            points: 0.0,
            rebounds: 0.0,
            assists: 0.0,
            steals: 0.0,
            blocks: 0.0,
            turnovers: 0.0,
            threes_made: 0.0,
            fg_pct: 0.0,
            ft_pct: 0.0,
        }
    }

    /// Value of one comparison category for this team.
    pub fn category_value(&self, category: Category) -> f64 {
        match category {
            Category::FieldGoalPct => self.fg_pct,
            Category::FreeThrowPct => self.ft_pct,
            Category::ThreesMade => self.threes_made,
            Category::Points => self.points,
            Category::Rebounds => self.rebounds,
            Category::Assists => self.assists,
            Category::Steals => self.steals,
            Category::Blocks => self.blocks,
            Category::Turnovers => self.turnovers,
        }
    }
}

/// One statistical dimension used in head-to-head comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    FieldGoalPct,
    FreeThrowPct,
    ThreesMade,
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
}

impl Category {
    /// Turnovers are the one category where less is more.
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Category::Turnovers)
    }

    /// Percentage categories render differently from counting stats.
    pub fn is_percentage(&self) -> bool {
        matches!(self, Category::FieldGoalPct | Category::FreeThrowPct)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::FieldGoalPct => "FG%",
            Category::FreeThrowPct => "FT%",
            Category::ThreesMade => "3PM",
            Category::Points => "PTS",
            Category::Rebounds => "REB",
            Category::Assists => "AST",
            Category::Steals => "STL",
            Category::Blocks => "BLK",
            Category::Turnovers => "TOV",
        };
        write!(f, "{label}")
    }
}

/// Which side of a comparison leads one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Leader {
    TeamA,
    TeamB,
    Tie,
}

/// Head-to-head result for a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryVerdict {
    pub category: Category,
    pub team_a: f64,
    pub team_b: f64,
    pub leader: Leader,
}
