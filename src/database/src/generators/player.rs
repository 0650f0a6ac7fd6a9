use crate::generators::{ARCHETYPES, Archetype};
use log::debug;
use nba_core::utils::{FloatUtils, StringUtils};
use nba_core::{CareerStats, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const TEAM_POOL: [&str; 19] = [
    "Lakers", "Celtics", "Bulls", "Warriors", "Spurs", "Heat", "Knicks", "Pistons", "Rockets",
    "Suns", "Nuggets", "Trail Blazers", "Kings", "Hawks", "Mavericks", "Nets", "Cavaliers", "Magic",
    "Thunder",
];

const UNKNOWN_FIRST_NAME: &str = "Unknown";
const UNKNOWN_LAST_NAME: &str = "Player";

const MVP_PROBABILITY: f64 = 0.3;

/// Synthesizes plausible legends for names missing from the store.
pub struct PlayerGenerator<R: Rng> {
    rng: R,
}

impl PlayerGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        PlayerGenerator::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> PlayerGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PlayerGenerator { rng }
    }

    pub fn generate(&mut self, raw_name: &str) -> Player {
        let name = Self::generate_name(raw_name);

        let archetype = &ARCHETYPES[self.rng.gen_range(0..ARCHETYPES.len())];

        let championships: u8 = self.rng.gen_range(0..=5);
        let games_played: u32 = self.rng.gen_range(800..1400);

        let start_year: u16 = self.rng.gen_range(1970..2010);
        let career_length: u16 = self.rng.gen_range(12..20);

        let career_stats = self.generate_stats(archetype, games_played);
        let achievements = self.generate_achievements(&career_stats, championships);
        let teams = self.generate_teams();

        let toughness = FloatUtils::round_to(self.rng.gen_range(5.0..=10.0f64).clamp(1.0, 10.0), 1);
        let team_strength = FloatUtils::round_to(self.rng.gen_range(3.0..=10.0f64).clamp(1.0, 10.0), 1);

        debug!(
            "generated player: {}, archetype: {:?}",
            name, archetype.archetype_type
        );

        Player {
            name,
            position: archetype.position.to_string(),
            height: archetype.height.to_string(),
            weight: archetype.weight,
            years_active: format!("{}-{}", start_year, start_year + career_length),
            teams,
            career_stats,
            achievements,
            championships,
            toughness_of_league_index: Some(toughness),
            strength_of_team_stats: Some(team_strength),
            image_url: None,
            generated: true,
        }
    }

    /// First two whitespace tokens, each capitalized.
    fn generate_name(raw_name: &str) -> String {
        let mut parts = raw_name.split_whitespace();

        let first_name = parts
            .next()
            .map(StringUtils::capitalize)
            .unwrap_or_else(|| UNKNOWN_FIRST_NAME.to_string());

        let last_name = parts
            .next()
            .map(StringUtils::capitalize)
            .unwrap_or_else(|| UNKNOWN_LAST_NAME.to_string());

        format!("{} {}", first_name, last_name)
    }

    fn generate_stats(&mut self, archetype: &Archetype, games_played: u32) -> CareerStats {
        let rng = &mut self.rng;

        CareerStats {
            games_played,
            points_per_game: FloatUtils::round_to(archetype.points.sample(rng), 1),
            rebounds_per_game: FloatUtils::round_to(archetype.rebounds.sample(rng), 1),
            assists_per_game: FloatUtils::round_to(archetype.assists.sample(rng), 1),
            field_goal_percentage: FloatUtils::round_to(archetype.field_goal.sample(rng), 1),
            free_throw_percentage: FloatUtils::round_to(archetype.free_throw.sample(rng), 1),
            three_point_percentage: Some(FloatUtils::round_to(archetype.three_point.sample(rng), 1)),
        }
    }

    fn generate_achievements(&mut self, stats: &CareerStats, championships: u8) -> Vec<String> {
        let mut achievements = Vec::with_capacity(8);

        if stats.points_per_game > 28.0 {
            achievements.push("Multiple Scoring Champion".to_string());
        }
        if stats.assists_per_game > 10.0 {
            achievements.push("Multiple Assist Leader".to_string());
        }
        if stats.rebounds_per_game > 12.0 {
            achievements.push("Multiple Rebounding Champion".to_string());
        }
        if championships > 2 {
            achievements.push(format!("{}× NBA Champion", championships));
        }
        if championships > 0 {
            achievements.push("Finals MVP".to_string());
        }

        achievements.push("NBA All-Star".to_string());
        achievements.push("Hall of Fame Inductee".to_string());

        if self.rng.gen_bool(MVP_PROBABILITY) {
            achievements.push("NBA MVP".to_string());
        }

        achievements
    }

    /// 1 to 3 distinct teams, sampled without replacement.
    fn generate_teams(&mut self) -> Vec<String> {
        let count = self.rng.gen_range(1..=3);

        TEAM_POOL
            .choose_multiple(&mut self.rng, count)
            .map(|team| team.to_string())
            .collect()
    }
}
