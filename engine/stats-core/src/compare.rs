use crate::types::{Category, CategoryVerdict, Leader, TeamSummary};

/// Standard 9-cat comparison order.
pub const DEFAULT_CATEGORIES: [Category; 9] = [
    Category::FieldGoalPct,
    Category::FreeThrowPct,
    Category::ThreesMade,
    Category::Points,
    Category::Rebounds,
    Category::Assists,
    Category::Steals,
    Category::Blocks,
    Category::Turnovers,
];

/// Compare two team summaries category by category.
///
/// Higher value wins everywhere except turnovers, where lower wins. Exact
/// equality is an explicit tie, attributed to neither team. Categories are
/// independent; no overall winner is computed here.
pub fn compare_teams(
    team_a: &TeamSummary,
    team_b: &TeamSummary,
    categories: &[Category],
) -> Vec<CategoryVerdict> {
    categories
        .iter()
        .map(|&category| {
            let a = team_a.category_value(category);
            let b = team_b.category_value(category);
            let leader = if a == b {
                Leader::Tie
            } else {
                let a_wins = if category.lower_is_better() { a < b } else { a > b };
                if a_wins {
                    Leader::TeamA
                } else {
                    Leader::TeamB
                }
            };
            CategoryVerdict { category, team_a: a, team_b: b, leader }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(points: f64, turnovers: f64, fg_pct: f64) -> TeamSummary {
        TeamSummary {
            points,
            rebounds: 40.0,
            assists: 25.0,
            steals: 7.0,
            blocks: 5.0,
            turnovers,
            threes_made: 12.0,
            fg_pct,
            ft_pct: 0.78,
        }
    }

    #[test]
    fn higher_value_leads_counting_categories() {
        let verdicts = compare_teams(
            &team(100.0, 12.0, 0.47),
            &team(95.0, 12.0, 0.47),
            &[Category::Points],
        );

        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].leader, Leader::TeamA);
        assert_eq!(verdicts[0].team_a, 100.0);
        assert_eq!(verdicts[0].team_b, 95.0);
    }

    #[test]
    fn lower_turnovers_lead() {
        let verdicts = compare_teams(
            &team(100.0, 12.0, 0.47),
            &team(100.0, 10.0, 0.47),
            &[Category::Turnovers],
        );

        assert_eq!(verdicts[0].leader, Leader::TeamB);
    }

    #[test]
    fn exact_equality_is_a_tie() {
        let verdicts = compare_teams(
            &team(100.0, 12.0, 0.47),
            &team(100.0, 12.0, 0.47),
            &DEFAULT_CATEGORIES,
        );

        assert!(verdicts.iter().all(|v| v.leader == Leader::Tie));
    }

    #[test]
    fn verdicts_follow_requested_category_order() {
        let categories = [Category::Turnovers, Category::FieldGoalPct, Category::Points];
        let verdicts =
            compare_teams(&team(100.0, 12.0, 0.50), &team(95.0, 10.0, 0.45), &categories);

        let order: Vec<Category> = verdicts.iter().map(|v| v.category).collect();
        assert_eq!(order, categories);
        assert_eq!(verdicts[0].leader, Leader::TeamB); // fewer turnovers
        assert_eq!(verdicts[1].leader, Leader::TeamA); // better FG%
        assert_eq!(verdicts[2].leader, Leader::TeamA); // more points
    }

    #[test]
    fn comparison_is_deterministic() {
        let a = team(101.5, 11.0, 0.48);
        let b = team(99.0, 13.0, 0.49);

        let first = compare_teams(&a, &b, &DEFAULT_CATEGORIES);
        let second = compare_teams(&a, &b, &DEFAULT_CATEGORIES);
        assert_eq!(first, second);
    }
}
