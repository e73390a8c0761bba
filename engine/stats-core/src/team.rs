use crate::types::{PlayerWindowSummary, TeamSummary};

/// Roll up individual window summaries into projected team production.
///
/// Counting stats are summed element-wise. Shooting percentages are
/// attempt-weighted across the roster: per-game makes and attempts are
/// summed first and divided once. Averaging each player's own percentage
/// would let a 2-attempt player move the team number as much as a
/// 20-attempt player.
///
/// An empty slice (empty roster, or every fetch failed upstream) yields an
/// all-zero summary; whether that is meaningful is the caller's call.
pub fn compute_team_summary(summaries: &[PlayerWindowSummary]) -> TeamSummary {
    let mut team = TeamSummary::zero();
    let mut fgm = 0.0;
    let mut fga = 0.0;
    let mut ftm = 0.0;
    let mut fta = 0.0;

    for summary in summaries {
        team.points += summary.points;
        team.rebounds += summary.rebounds;
        team.assists += summary.assists;
        team.steals += summary.steals;
        team.blocks += summary.blocks;
        team.turnovers += summary.turnovers;
        team.threes_made += summary.threes_made;
        fgm += summary.fg_made_pg;
        fga += summary.fg_attempted_pg;
        ftm += summary.ft_made_pg;
        fta += summary.ft_attempted_pg;
    }

    team.fg_pct = if fga > 0.0 { fgm / fga } else { 0.0 };
    team.ft_pct = if fta > 0.0 { ftm / fta } else { 0.0 };
    team
}
