use crate::Player;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Scoring,
    Rebounding,
    Assists,
    Efficiency,
    Championships,
    #[serde(rename = "League Toughness")]
    LeagueToughness,
    #[serde(rename = "Team Strength")]
    TeamStrength,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Scoring,
        Category::Rebounding,
        Category::Assists,
        Category::Efficiency,
        Category::Championships,
        Category::LeagueToughness,
        Category::TeamStrength,
    ];

    pub fn value_of(&self, player: &Player) -> f64 {
        let stats = &player.career_stats;

        match self {
            Category::Scoring => stats.points_per_game,
            Category::Rebounding => stats.rebounds_per_game,
            Category::Assists => stats.assists_per_game,
            Category::Efficiency => stats.field_goal_percentage,
            Category::Championships => player.championships as f64,
            Category::LeagueToughness => player.league_toughness(),
            Category::TeamStrength => player.team_strength(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Scoring => "Scoring",
            Category::Rebounding => "Rebounding",
            Category::Assists => "Assists",
            Category::Efficiency => "Efficiency",
            Category::Championships => "Championships",
            Category::LeagueToughness => "League Toughness",
            Category::TeamStrength => "Team Strength",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
