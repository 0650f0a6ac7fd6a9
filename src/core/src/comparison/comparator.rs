use crate::comparison::{COMPARISON_COMPLETED, Category, CategoryResult, ComparisonResult};
use crate::Player;
use indexmap::IndexMap;
use log::debug;

pub struct CategoryComparator;

impl CategoryComparator {
    /// Picks a winner per category. Fewer than two players yields the
    /// insufficient-input result instead of an error.
    pub fn compare(players: Vec<Player>) -> ComparisonResult {
        if players.len() < 2 {
            return ComparisonResult::insufficient(players);
        }

        let categories: IndexMap<Category, CategoryResult> = Category::ALL
            .iter()
            .map(|category| (*category, Self::compare_category(*category, &players)))
            .collect();

        debug!(
            "compared {} players across {} categories",
            players.len(),
            categories.len()
        );

        ComparisonResult {
            comparison: COMPARISON_COMPLETED.to_string(),
            players,
            categories,
        }
    }

    fn compare_category(category: Category, players: &[Player]) -> CategoryResult {
        let mut stats = IndexMap::with_capacity(players.len());

        for player in players {
            stats.insert(player.name.clone(), category.value_of(player));
        }

        CategoryResult {
            winner: Self::select_winner(&stats).unwrap_or_default(),
            stats,
        }
    }

    /// Left fold: the current champion is only replaced by a strictly greater value,
    /// so the first-encountered name wins ties.
    fn select_winner(stats: &IndexMap<String, f64>) -> Option<String> {
        stats
            .iter()
            .fold(None::<(&String, f64)>, |champion, (name, &value)| match champion {
                Some((_, best)) if value > best => Some((name, value)),
                Some(current) => Some(current),
                None => Some((name, value)),
            })
            .map(|(name, _)| name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CareerStats;

    fn player(name: &str, ppg: f64, rpg: f64, championships: u8) -> Player {
        Player {
            name: name.to_string(),
            position: "Guard".to_string(),
            height: "6'6\"".to_string(),
            weight: 210,
            years_active: "1990-2004".to_string(),
            teams: vec!["Bulls".to_string()],
            career_stats: CareerStats {
                games_played: 1000,
                points_per_game: ppg,
                rebounds_per_game: rpg,
                assists_per_game: 5.0,
                field_goal_percentage: 47.5,
                free_throw_percentage: 82.0,
                three_point_percentage: Some(35.0),
            },
            achievements: vec![],
            championships,
            toughness_of_league_index: None,
            strength_of_team_stats: None,
            image_url: None,
            generated: false,
        }
    }

    #[test]
    fn test_compare_picks_highest_value_per_category() {
        let result = CategoryComparator::compare(vec![
            player("A", 25.0, 10.0, 1),
            player("B", 30.0, 4.0, 3),
        ]);

        assert_eq!(result.comparison, COMPARISON_COMPLETED);
        assert_eq!(result.categories.len(), 7);
        assert_eq!(result.winner_of(Category::Scoring), Some("B"));
        assert_eq!(result.winner_of(Category::Rebounding), Some("A"));
        assert_eq!(result.winner_of(Category::Championships), Some("B"));
        assert_eq!(result.categories[&Category::Scoring].stats["A"], 25.0);
    }

    #[test]
    fn test_compare_ties_go_to_first_player() {
        let result = CategoryComparator::compare(vec![
            player("A", 27.5, 6.0, 2),
            player("B", 27.5, 6.0, 2),
        ]);

        assert_eq!(result.winner_of(Category::Scoring), Some("A"));
        assert_eq!(result.winner_of(Category::Efficiency), Some("A"));

        let reversed = CategoryComparator::compare(vec![
            player("B", 27.5, 6.0, 2),
            player("A", 27.5, 6.0, 2),
        ]);

        assert_eq!(reversed.winner_of(Category::Scoring), Some("B"));
    }

    #[test]
    fn test_compare_later_strictly_greater_value_wins() {
        let result = CategoryComparator::compare(vec![
            player("A", 20.0, 6.0, 0),
            player("B", 20.0, 6.0, 0),
            player("C", 20.1, 6.0, 0),
        ]);

        assert_eq!(result.winner_of(Category::Scoring), Some("C"));
        assert_eq!(result.winner_of(Category::Rebounding), Some("A"));
    }

    #[test]
    fn test_missing_indexes_default_to_five() {
        let mut strong = player("Strong", 20.0, 5.0, 0);
        strong.strength_of_team_stats = Some(9.1);

        let mut soft = player("Soft", 20.0, 5.0, 0);
        soft.toughness_of_league_index = Some(4.0);

        let result = CategoryComparator::compare(vec![soft, strong]);

        let toughness = &result.categories[&Category::LeagueToughness];
        assert_eq!(toughness.stats["Soft"], 4.0);
        assert_eq!(toughness.stats["Strong"], 5.0);
        assert_eq!(toughness.winner, "Strong");

        let team = &result.categories[&Category::TeamStrength];
        assert_eq!(team.stats["Soft"], 5.0);
        assert_eq!(team.winner, "Strong");
    }

    #[test]
    fn test_compare_with_less_than_two_players_is_insufficient() {
        let single = CategoryComparator::compare(vec![player("A", 20.0, 5.0, 0)]);

        assert!(single.is_insufficient());
        assert!(single.categories.is_empty());
        assert_eq!(single.players.len(), 1);

        let empty = CategoryComparator::compare(vec![]);
        assert!(empty.is_insufficient());
        assert!(empty.categories.is_empty());
    }

    #[test]
    fn test_categories_keep_fixed_order_in_json() {
        let result = CategoryComparator::compare(vec![
            player("A", 25.0, 10.0, 1),
            player("B", 30.0, 4.0, 3),
        ]);

        let json = serde_json::to_string(&result).unwrap();
        let scoring = json.find("\"Scoring\"").unwrap();
        let team = json.find("\"Team Strength\"").unwrap();

        assert!(scoring < team);
        assert!(json.contains("\"League Toughness\""));
    }
}
