use crate::types::{GameRecord, PlayerWindowSummary};

/// Average the most recent `window` games of a player's log.
///
/// `records` must already be ordered most-recent-first; this function does
/// not re-sort. If fewer than `window` games exist the whole log is used,
/// and `games_used` reports the count actually aggregated.
///
/// Shooting percentages are attempt-weighted: makes and attempts are summed
/// over the window before dividing, so a 1-for-1 game does not count the
/// same as a 10-for-10 game. Zero attempts yields 0.0, meaning "no signal".
pub fn compute_window_summary(records: &[GameRecord], window: usize) -> PlayerWindowSummary {
    let active = &records[..window.min(records.len())];
    let games_used = active.len() as u32;

    let mut points = 0.0;
    let mut rebounds = 0.0;
    let mut assists = 0.0;
    let mut steals = 0.0;
    let mut blocks = 0.0;
    let mut turnovers = 0.0;
    let mut threes_made = 0.0;
    let mut fgm = 0.0;
    let mut fga = 0.0;
    let mut ftm = 0.0;
    let mut fta = 0.0;

    for game in active {
        points += game.points;
        rebounds += game.rebounds;
        assists += game.assists;
        steals += game.steals;
        blocks += game.blocks;
        turnovers += game.turnovers;
        threes_made += game.threes_made;
        fgm += game.fg_made;
        fga += game.fg_attempted;
        ftm += game.ft_made;
        fta += game.ft_attempted;
    }

    // Forced divisor of 1 when no games were found: the averages come out
    // as the raw sums (all zero) and games_used == 0 tells the caller the
    // numbers are not meaningful.
    let divisor = games_used.max(1) as f64;

    PlayerWindowSummary {
        games_used,
        points: points / divisor,
        rebounds: rebounds / divisor,
        assists: assists / divisor,
        steals: steals / divisor,
        blocks: blocks / divisor,
        turnovers: turnovers / divisor,
        threes_made: threes_made / divisor,
        fg_made_pg: fgm / divisor,
        fg_attempted_pg: fga / divisor,
        ft_made_pg: ftm / divisor,
        ft_attempted_pg: fta / divisor,
        fg_pct: if fga > 0.0 { fgm / fga } else { 0.0 },
        ft_pct: if fta > 0.0 { ftm / fta } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(points: f64, fgm: f64, fga: f64, ftm: f64, fta: f64) -> GameRecord {
        GameRecord {
            points,
            rebounds: 5.0,
            assists: 3.0,
            steals: 1.0,
            blocks: 1.0,
            turnovers: 2.0,
            threes_made: 2.0,
            fg_made: fgm,
            fg_attempted: fga,
            ft_made: ftm,
            ft_attempted: fta,
        }
    }

    #[test]
    fn games_used_is_min_of_window_and_log_length() {
        let records = vec![game(10.0, 4.0, 8.0, 2.0, 2.0); 6];

        assert_eq!(compute_window_summary(&records, 10).games_used, 6);
        assert_eq!(compute_window_summary(&records, 6).games_used, 6);
        assert_eq!(compute_window_summary(&records, 4).games_used, 4);
        assert_eq!(compute_window_summary(&records, 1).games_used, 1);
    }

    #[test]
    fn window_takes_most_recent_games_first() {
        let records = vec![
            game(30.0, 10.0, 20.0, 10.0, 10.0),
            game(20.0, 8.0, 16.0, 4.0, 4.0),
            game(2.0, 1.0, 2.0, 0.0, 0.0),
        ];

        // Window of 2 must use the first two entries only.
        let summary = compute_window_summary(&records, 2);
        assert_eq!(summary.games_used, 2);
        assert!((summary.points - 25.0).abs() < 1e-9);
    }

    #[test]
    fn counting_averages_divide_by_games_used() {
        let records =
            vec![game(10.0, 4.0, 8.0, 2.0, 2.0), game(20.0, 8.0, 16.0, 4.0, 4.0)];

        let summary = compute_window_summary(&records, 10);
        assert!((summary.points - 15.0).abs() < 1e-9);
        assert!((summary.rebounds - 5.0).abs() < 1e-9);
        assert!((summary.assists - 3.0).abs() < 1e-9);
        assert!((summary.turnovers - 2.0).abs() < 1e-9);
        assert!((summary.threes_made - 2.0).abs() < 1e-9);
    }

    #[test]
    fn percentages_are_attempt_weighted_not_averaged_per_game() {
        // 1-of-10 game plus 9-of-10 game: per-game averaging would say 50%,
        // the aggregate is 10/20.
        let records =
            vec![game(2.0, 1.0, 10.0, 0.0, 0.0), game(18.0, 9.0, 10.0, 0.0, 0.0)];

        let summary = compute_window_summary(&records, 10);
        assert!((summary.fg_pct - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_attempts_gives_zero_percentage_not_nan() {
        let records = vec![game(0.0, 0.0, 0.0, 0.0, 0.0)];

        let summary = compute_window_summary(&records, 10);
        assert_eq!(summary.fg_pct, 0.0);
        assert_eq!(summary.ft_pct, 0.0);
        assert!(!summary.fg_pct.is_nan());
    }

    #[test]
    fn percentages_stay_in_unit_range() {
        let records = vec![
            game(50.0, 20.0, 20.0, 10.0, 10.0),
            game(0.0, 0.0, 15.0, 0.0, 6.0),
        ];

        let summary = compute_window_summary(&records, 10);
        assert!((0.0..=1.0).contains(&summary.fg_pct));
        assert!((0.0..=1.0).contains(&summary.ft_pct));
    }

    #[test]
    fn empty_log_yields_zeroed_summary_without_dividing_by_zero() {
        let summary = compute_window_summary(&[], 10);

        assert_eq!(summary.games_used, 0);
        assert_eq!(summary.points, 0.0);
        assert_eq!(summary.fg_attempted_pg, 0.0);
        assert_eq!(summary.fg_pct, 0.0);
        assert!(!summary.points.is_nan());
    }

    #[test]
    fn per_game_makes_and_attempts_are_preserved_for_team_weighting() {
        let records =
            vec![game(10.0, 4.0, 10.0, 2.0, 4.0), game(10.0, 6.0, 10.0, 4.0, 4.0)];

        let summary = compute_window_summary(&records, 2);
        assert!((summary.fg_made_pg - 5.0).abs() < 1e-9);
        assert!((summary.fg_attempted_pg - 10.0).abs() < 1e-9);
        assert!((summary.ft_made_pg - 3.0).abs() < 1e-9);
        assert!((summary.ft_attempted_pg - 4.0).abs() < 1e-9);
    }
}
