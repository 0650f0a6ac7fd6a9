use crate::player::CareerStats;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INDEX_VALUE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub position: String,
    pub height: String,
    pub weight: u16,
    pub years_active: String,
    pub teams: Vec<String>,
    pub career_stats: CareerStats,
    pub achievements: Vec<String>,
    pub championships: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toughness_of_league_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength_of_team_stats: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub generated: bool,
}

impl Player {
    /// Lowercased, trimmed name used as the store key.
    pub fn canonical_key(&self) -> String {
        Self::canonicalize(&self.name)
    }

    pub fn canonicalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    pub fn league_toughness(&self) -> f64 {
        self.toughness_of_league_index.unwrap_or(DEFAULT_INDEX_VALUE)
    }

    pub fn team_strength(&self) -> f64 {
        self.strength_of_team_stats.unwrap_or(DEFAULT_INDEX_VALUE)
    }

    pub fn with_image_url(self, image_url: impl Into<String>) -> Player {
        Player {
            image_url: Some(image_url.into()),
            ..self
        }
    }
}
