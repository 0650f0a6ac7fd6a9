use crate::error::LoadError;
use nba_core::Player;

const STATIC_PLAYERS_JSON: &str = include_str!("../../data/players.json");

pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load() -> Result<Vec<Player>, LoadError> {
        Self::parse(STATIC_PLAYERS_JSON)
    }

    pub fn parse(json: &str) -> Result<Vec<Player>, LoadError> {
        let players: Vec<Player> = serde_json::from_str(json)?;

        // Seed records are never generated, whatever the source says.
        Ok(players
            .into_iter()
            .map(|player| Player {
                generated: false,
                ..player
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_players() {
        let players = PlayerLoader::load().unwrap();

        assert_eq!(players.len(), 10);
        assert_eq!(players[0].name, "Michael Jordan");
        assert!(players.iter().all(|p| !p.generated));
    }

    #[test]
    fn test_optional_three_point_percentage() {
        let players = PlayerLoader::load().unwrap();

        let wilt = players.iter().find(|p| p.name == "Wilt Chamberlain").unwrap();
        assert_eq!(wilt.career_stats.three_point_percentage, None);

        let bird = players.iter().find(|p| p.name == "Larry Bird").unwrap();
        assert_eq!(bird.career_stats.three_point_percentage, Some(37.6));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = PlayerLoader::parse("[{\"name\": \"Broken\"}]");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }
}
