//! Matchup CLI
//!
//! Terminal front end for the recent-averages engine, with two modes:
//! - player: search-then-select a single player and show last-N averages
//! - compare: build two fantasy teams interactively and rank them
//!   category by category
//!
//! All lookup failures are rendered as messages here; nothing below this
//! layer retries, and nothing crashes the process.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, BufRead, Write};

use gamelog_client::{GameLogConfig, RosterPlayer, SummaryService, TeamWindowSummary};
use player_directory::{PlayerDirectory, PlayerIdentity};
use stats_core::{compare_teams, CategoryVerdict, Leader, PlayerWindowSummary, DEFAULT_CATEGORIES};

const DEFAULT_WINDOW: usize = 10;
const MAX_WINDOW: usize = 20;

#[derive(Parser)]
#[command(name = "matchup-cli")]
#[command(about = "NBA recent per-game averages and two-team fantasy comparison")]
#[command(version = "0.1.0")]
struct Cli {
    /// Season identifier passed through to the stats provider
    #[arg(long, default_value = "2025-26")]
    season: String,

    /// Number of most recent games to average per player (1-20)
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    window: usize,

    /// Path to the player roster JSON file
    #[arg(long, default_value = "data/players.json")]
    roster: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one player's last-N per-game averages
    Player {
        /// Full player name; omit to search interactively
        #[arg(long)]
        name: Option<String>,
    },

    /// Build two teams interactively and compare them category by category
    Compare,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let window = checked_window(cli.window);

    let directory = PlayerDirectory::load_from_file(&cli.roster)
        .await
        .with_context(|| format!("Failed to load player roster from {}", cli.roster))?;

    let mut config = GameLogConfig::from_env();
    config.season = cli.season.clone();
    let service = SummaryService::new(config).context("Failed to create game log client")?;

    let mut input = io::stdin().lock();
    match cli.command {
        Commands::Player { name } => {
            run_player_lookup(&directory, &service, name, window, &mut input).await
        }
        Commands::Compare => run_compare(&directory, &service, window, &mut input).await,
    }

    Ok(())
}

/// Clamp the window to the UI range, falling back to the default on
/// nonsense input rather than refusing to run.
fn checked_window(window: usize) -> usize {
    if (1..=MAX_WINDOW).contains(&window) {
        window
    } else {
        println!(
            "{}",
            format!("Window must be between 1 and {MAX_WINDOW}; using {DEFAULT_WINDOW}.")
                .yellow()
        );
        DEFAULT_WINDOW
    }
}

async fn run_player_lookup(
    directory: &PlayerDirectory,
    service: &SummaryService,
    name: Option<String>,
    window: usize,
    input: &mut impl BufRead,
) {
    let player = match name {
        Some(name) => match directory.resolve_full_name(&name) {
            Ok(player) => player,
            Err(e) => {
                println!("{}", e.to_string().red());
                return;
            }
        },
        None => match prompt_select_player(directory, input) {
            Some(player) => player,
            None => {
                println!("Cancelled.");
                return;
            }
        },
    };

    println!("\n{} (season {}, regular season only)", player.full_name.bold(), service.season());

    match service.player_window_summary(player.id, service.season(), window).await {
        Ok(summary) => render_player_summary(&summary),
        Err(e) => {
            println!(
                "{}",
                format!("Failed to fetch game log for {}: {}", player.full_name, e).red()
            );
        }
    }
}

async fn run_compare(
    directory: &PlayerDirectory,
    service: &SummaryService,
    window: usize,
    input: &mut impl BufRead,
) {
    println!("Fantasy matchup helper - compare two teams using last-{window} averages per player.");

    let Some(team1) = build_team("Team 1", directory, input) else {
        println!("{}", "Comparison cancelled.".yellow());
        return;
    };
    let Some(team2) = build_team("Team 2", directory, input) else {
        println!("{}", "Comparison cancelled.".yellow());
        return;
    };

    let summary1 = service.team_window_summary(&team1, service.season(), window).await;
    let summary2 = service.team_window_summary(&team2, service.season(), window).await;

    render_team("Team 1", &team1, &summary1);
    render_team("Team 2", &team2, &summary2);
    render_comparison("Team 1", &summary1, "Team 2", &summary2, window);
}

/// Outcome of one numbered-selection prompt
enum Pick {
    Chosen(PlayerIdentity),
    Retry,
    InputEnded,
}

/// Search-then-select loop for a single player. Blank query cancels;
/// 'r' re-runs the search; end of input cancels too.
fn prompt_select_player(
    directory: &PlayerDirectory,
    input: &mut impl BufRead,
) -> Option<PlayerIdentity> {
    loop {
        let query = prompt(input, "Search player (or leave blank to cancel): ")?;
        if query.is_empty() {
            return None;
        }

        let matches = directory.search(&query);
        if matches.is_empty() {
            println!("No matches. Try again.");
            continue;
        }

        match pick_from_matches(input, &matches) {
            Pick::Chosen(player) => return Some(player),
            Pick::Retry => continue,
            Pick::InputEnded => return None,
        }
    }
}

/// Interactively assemble one side of the comparison. Duplicate picks are
/// rejected; 'done' finishes once the team is non-empty. Returns None if
/// input ends before the team is finished.
fn build_team(
    team_name: &str,
    directory: &PlayerDirectory,
    input: &mut impl BufRead,
) -> Option<Vec<RosterPlayer>> {
    let mut roster: Vec<RosterPlayer> = Vec::new();

    println!("\n--- Build {team_name} ---");
    println!("Type a name fragment to search, select a player, repeat. Type 'done' to finish.");

    loop {
        let Some(entry) = prompt(input, &format!("Add to {team_name} (search or 'done'): "))
        else {
            println!("Input ended before {team_name} was finished.");
            return None;
        };

        if entry.eq_ignore_ascii_case("done") {
            if roster.is_empty() {
                println!("Team is empty; add at least one player.");
                continue;
            }
            return Some(roster);
        }
        if entry.is_empty() {
            continue;
        }

        let matches = directory.search(&entry);
        if matches.is_empty() {
            println!("No matches. Try again.");
            continue;
        }

        let chosen = match pick_from_matches(input, &matches) {
            Pick::Chosen(player) => player,
            Pick::Retry => continue,
            Pick::InputEnded => {
                println!("Input ended before {team_name} was finished.");
                return None;
            }
        };

        if roster.iter().any(|p| p.id == chosen.id) {
            println!("{} already on {team_name}.", chosen.full_name);
            continue;
        }

        println!("Added {} to {team_name}.", chosen.full_name.green());
        roster.push(RosterPlayer { id: chosen.id, name: chosen.full_name });
    }
}

/// Show numbered matches and read a selection.
fn pick_from_matches(input: &mut impl BufRead, matches: &[PlayerIdentity]) -> Pick {
    println!("Matches:");
    for (idx, player) in matches.iter().enumerate() {
        let active = if player.is_active { "ACTIVE".green().to_string() } else { String::new() };
        println!("  [{:>2}] {} {}", idx + 1, player.full_name, active);
    }

    let Some(selection) = prompt(input, "Pick number (or 'r' to retry): ") else {
        return Pick::InputEnded;
    };
    if selection.eq_ignore_ascii_case("r") {
        return Pick::Retry;
    }

    match selection.parse::<usize>() {
        Ok(i) if (1..=matches.len()).contains(&i) => Pick::Chosen(matches[i - 1].clone()),
        Ok(_) => {
            println!("Out of range. Try again.");
            Pick::Retry
        }
        Err(_) => {
            println!("Invalid input. Enter a number from the list.");
            Pick::Retry
        }
    }
}

/// Read one trimmed line, or None once the input is closed or unreadable.
fn prompt(input: &mut impl BufRead, label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn render_player_summary(summary: &PlayerWindowSummary) {
    println!("Per-game averages over {} games:", summary.games_used);
    if summary.games_used == 0 {
        println!(
            "{}",
            "No games found in this window; the averages below are not meaningful.".yellow()
        );
    }

    println!(
        "  PTS {:>5.1}  REB {:>5.1}  AST {:>5.1}  STL {:>5.1}  BLK {:>5.1}  TOV {:>5.1}",
        summary.points,
        summary.rebounds,
        summary.assists,
        summary.steals,
        summary.blocks,
        summary.turnovers
    );
    println!(
        "  3PM {:>5.1}  FG% {:>5.1}%  FT% {:>5.1}%",
        summary.threes_made,
        summary.fg_pct * 100.0,
        summary.ft_pct * 100.0
    );
    println!(
        "  FGM/G {:.2}  FGA/G {:.2}  FTM/G {:.2}  FTA/G {:.2}",
        summary.fg_made_pg, summary.fg_attempted_pg, summary.ft_made_pg, summary.ft_attempted_pg
    );
}

fn render_team(team_name: &str, roster: &[RosterPlayer], team: &TeamWindowSummary) {
    println!("\n{} roster ({}):", team_name.bold(), roster.len());
    println!("  {}", roster.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", "));

    for warning in &team.warnings {
        println!(
            "{}",
            format!("  Warning: {} excluded ({})", warning.player, warning.error).yellow()
        );
    }

    let s = &team.summary;
    println!("  PTS {:.2}  REB {:.2}  AST {:.2}", s.points, s.rebounds, s.assists);
    println!(
        "  STL {:.2}  BLK {:.2}  TOV {:.2}  3PM {:.2}",
        s.steals, s.blocks, s.turnovers, s.threes_made
    );
    println!("  FG% {:.3}  FT% {:.3}", s.fg_pct, s.ft_pct);
}

fn render_comparison(
    name_a: &str,
    team_a: &TeamWindowSummary,
    name_b: &str,
    team_b: &TeamWindowSummary,
    window: usize,
) {
    println!("\n--- Category Comparison (per-game, last-{window} window) ---");

    let verdicts = compare_teams(&team_a.summary, &team_b.summary, &DEFAULT_CATEGORIES);

    let header = format!("{:<8}  {name_a:>12}  {name_b:>12}   Lead", "Category");
    println!("{header}");
    println!("{}", "-".repeat(header.len()));

    for verdict in &verdicts {
        let lead = lead_label(verdict, name_a, name_b);
        if verdict.category.is_percentage() {
            println!(
                "{:<8}  {:>12.3}  {:>12.3}   {}",
                verdict.category.to_string(),
                verdict.team_a,
                verdict.team_b,
                lead
            );
        } else {
            println!(
                "{:<8}  {:>12.2}  {:>12.2}   {}",
                verdict.category.to_string(),
                verdict.team_a,
                verdict.team_b,
                lead
            );
        }
    }
}

fn lead_label(verdict: &CategoryVerdict, name_a: &str, name_b: &str) -> String {
    match verdict.leader {
        Leader::TeamA => name_a.cyan().to_string(),
        Leader::TeamB => name_b.magenta().to_string(),
        Leader::Tie => "=".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn directory() -> PlayerDirectory {
        PlayerDirectory::from_players(vec![
            PlayerIdentity {
                id: 201939,
                full_name: "Stephen Curry".to_string(),
                is_active: true,
            },
            PlayerIdentity { id: 2544, full_name: "LeBron James".to_string(), is_active: true },
        ])
    }

    #[test]
    fn build_team_terminates_when_input_is_already_closed() {
        let mut input = Cursor::new("");

        assert!(build_team("Team 1", &directory(), &mut input).is_none());
    }

    #[test]
    fn build_team_terminates_when_input_ends_mid_selection() {
        // Search succeeds, then the stream closes at the pick prompt.
        let mut input = Cursor::new("curry\n");

        assert!(build_team("Team 1", &directory(), &mut input).is_none());
    }

    #[test]
    fn build_team_selects_searched_player_and_finishes_on_done() {
        let mut input = Cursor::new("curry\n1\ndone\n");

        let roster = build_team("Team 1", &directory(), &mut input).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, 201939);
        assert_eq!(roster[0].name, "Stephen Curry");
    }

    #[test]
    fn build_team_rejects_duplicate_picks() {
        let mut input = Cursor::new("curry\n1\ncurry\n1\ndone\n");

        let roster = build_team("Team 1", &directory(), &mut input).unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn build_team_refuses_done_on_empty_team_then_ends_with_input() {
        let mut input = Cursor::new("done\n");

        assert!(build_team("Team 1", &directory(), &mut input).is_none());
    }

    #[test]
    fn select_player_blank_query_cancels() {
        let mut input = Cursor::new("\n");

        assert!(prompt_select_player(&directory(), &mut input).is_none());
    }

    #[test]
    fn select_player_closed_input_cancels() {
        let mut input = Cursor::new("");

        assert!(prompt_select_player(&directory(), &mut input).is_none());
    }

    #[test]
    fn prompt_distinguishes_blank_line_from_end_of_input() {
        let mut input = Cursor::new("\n");
        assert_eq!(prompt(&mut input, ""), Some(String::new()));
        assert_eq!(prompt(&mut input, ""), None);
    }
}
