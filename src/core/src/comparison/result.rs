use crate::comparison::Category;
use crate::Player;
use indexmap::IndexMap;
use serde::Serialize;

pub const COMPARISON_COMPLETED: &str = "Comparison completed successfully";
pub const INSUFFICIENT_PLAYERS: &str = "Please provide at least 2 valid player names to compare.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub winner: String,
    pub stats: IndexMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub comparison: String,
    pub players: Vec<Player>,
    pub categories: IndexMap<Category, CategoryResult>,
}

impl ComparisonResult {
    pub fn insufficient(players: Vec<Player>) -> Self {
        ComparisonResult {
            comparison: INSUFFICIENT_PLAYERS.to_string(),
            players,
            categories: IndexMap::new(),
        }
    }

    pub fn is_insufficient(&self) -> bool {
        self.players.len() < 2 && self.categories.is_empty()
    }

    pub fn winner_of(&self, category: Category) -> Option<&str> {
        self.categories
            .get(&category)
            .map(|result| result.winner.as_str())
    }
}
