use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerStats {
    pub games_played: u32,
    pub points_per_game: f64,
    pub rebounds_per_game: f64,
    pub assists_per_game: f64,
    pub field_goal_percentage: f64,
    pub free_throw_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_point_percentage: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(three_point: Option<f64>) -> CareerStats {
        CareerStats {
            games_played: 1000,
            points_per_game: 20.0,
            rebounds_per_game: 5.0,
            assists_per_game: 5.0,
            field_goal_percentage: 48.0,
            free_throw_percentage: 80.0,
            three_point_percentage: three_point,
        }
    }

    #[test]
    fn test_missing_three_point_is_omitted_from_json() {
        let json = serde_json::to_value(stats(None)).unwrap();

        assert!(json.get("threePointPercentage").is_none());
        assert_eq!(json["gamesPlayed"], 1000);
    }
}
