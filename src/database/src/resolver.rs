use crate::{LookupError, PLAYER_NAME_REQUIRED, PlayerGenerator, PlayerStore};
use log::debug;
use nba_core::{CategoryComparator, ComparisonResult, Player};
use rand::Rng;
use rand::rngs::StdRng;

/// Store first, generator on a miss.
pub struct PlayerResolver<'s, R: Rng> {
    store: &'s PlayerStore,
    generator: PlayerGenerator<R>,
}

impl<'s> PlayerResolver<'s, StdRng> {
    pub fn new(store: &'s PlayerStore) -> Self {
        PlayerResolver::with_generator(store, PlayerGenerator::from_entropy())
    }
}

impl<'s, R: Rng> PlayerResolver<'s, R> {
    pub fn with_generator(store: &'s PlayerStore, generator: PlayerGenerator<R>) -> Self {
        PlayerResolver { store, generator }
    }

    /// Store only.
    pub fn get(&self, name: &str) -> Result<Player, LookupError> {
        let key = Self::canonical(name)?;

        self.store
            .lookup(&key)
            .ok_or_else(|| LookupError::NotFound(name.trim().to_string()))
    }

    pub fn generate_or_lookup(&mut self, name: &str) -> Result<Player, LookupError> {
        let key = Self::canonical(name)?;

        match self.store.lookup(&key) {
            Some(player) => {
                debug!("resolved stored player: {}", player.name);
                Ok(player)
            }
            None => {
                let player = self.generator.generate(&key);
                debug!("generated player for '{}': {}", key, player.name);
                Ok(player)
            }
        }
    }

    /// One player per name, in input order.
    pub fn resolve<S: AsRef<str>>(&mut self, names: &[S]) -> Result<Vec<Player>, LookupError> {
        names
            .iter()
            .map(|name| self.generate_or_lookup(name.as_ref()))
            .collect()
    }

    pub fn compare<S: AsRef<str>>(&mut self, names: &[S]) -> Result<ComparisonResult, LookupError> {
        if names.len() < 2 {
            return Err(LookupError::InsufficientInput {
                provided: names.len(),
            });
        }

        let players = self.resolve(names)?;

        Ok(CategoryComparator::compare(players))
    }

    fn canonical(name: &str) -> Result<String, LookupError> {
        let key = Player::canonicalize(name);

        if key.is_empty() {
            return Err(LookupError::MalformedRequest(
                PLAYER_NAME_REQUIRED.to_string(),
            ));
        }

        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerLoader;
    use nba_core::Category;
    use rand::SeedableRng;

    fn store() -> PlayerStore {
        PlayerStore::new(PlayerLoader::load().unwrap()).unwrap()
    }

    fn resolver(store: &PlayerStore) -> PlayerResolver<'_, StdRng> {
        PlayerResolver::with_generator(store, PlayerGenerator::with_rng(StdRng::seed_from_u64(11)))
    }

    #[test]
    fn test_resolve_returns_stored_record() {
        let store = store();
        let mut resolver = resolver(&store);

        let players = resolver.resolve(&["michael jordan"]).unwrap();

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Michael Jordan");
        assert!(!players[0].generated);
        assert_eq!(&players[0], store.get("Michael Jordan").unwrap());
    }

    #[test]
    fn test_resolve_generates_missing_player() {
        let store = store();
        let mut resolver = resolver(&store);

        let players = resolver.resolve(&["Not A Real Person XYZ"]).unwrap();

        assert_eq!(players[0].name, "Not A");
        assert!(players[0].generated);
    }

    #[test]
    fn test_resolve_keeps_input_order() {
        let store = store();
        let mut resolver = resolver(&store);

        let players = resolver
            .resolve(&["larry bird", "dirk nowitzki", "  KOBE BRYANT "])
            .unwrap();

        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Larry Bird", "Dirk Nowitzki", "Kobe Bryant"]);
        assert_eq!(
            players.iter().map(|p| p.generated).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }

    #[test]
    fn test_blank_name_is_malformed() {
        let store = store();
        let mut resolver = resolver(&store);

        let malformed = LookupError::MalformedRequest(PLAYER_NAME_REQUIRED.to_string());

        assert_eq!(
            resolver.resolve(&["magic johnson", "   "]).unwrap_err(),
            malformed
        );
        assert_eq!(resolver.generate_or_lookup("").unwrap_err(), malformed);
        assert_eq!(resolver.get("  ").unwrap_err(), malformed);
    }

    #[test]
    fn test_get_does_not_generate() {
        let store = store();
        let resolver = resolver(&store);

        assert_eq!(resolver.get("lebron james").unwrap().name, "LeBron James");
        assert_eq!(
            resolver.get("Dirk Nowitzki"),
            Err(LookupError::NotFound("Dirk Nowitzki".to_string()))
        );
    }

    #[test]
    fn test_get_twice_yields_identical_records() {
        let store = store();
        let resolver = resolver(&store);

        assert_eq!(
            resolver.get("shaquille o'neal").unwrap(),
            resolver.get("SHAQUILLE O'NEAL").unwrap()
        );
    }

    #[test]
    fn test_compare_requires_two_names() {
        let store = store();
        let mut resolver = resolver(&store);

        assert_eq!(
            resolver.compare(&["michael jordan"]).unwrap_err(),
            LookupError::InsufficientInput { provided: 1 }
        );

        let empty: [&str; 0] = [];
        assert_eq!(
            resolver.compare(&empty).unwrap_err(),
            LookupError::InsufficientInput { provided: 0 }
        );
    }

    #[test]
    fn test_compare_seeded_tie_goes_to_first_name() {
        let store = store();
        let mut resolver = resolver(&store);

        let result = resolver.compare(&["michael jordan", "wilt chamberlain"]).unwrap();
        assert_eq!(result.winner_of(Category::Scoring), Some("Michael Jordan"));

        let reversed = resolver.compare(&["wilt chamberlain", "michael jordan"]).unwrap();
        assert_eq!(reversed.winner_of(Category::Scoring), Some("Wilt Chamberlain"));
    }

    #[test]
    fn test_compare_mixes_stored_and_generated_players() {
        let store = store();
        let mut resolver = resolver(&store);

        let result = resolver.compare(&["magic johnson", "john stockton"]).unwrap();

        assert!(!result.is_insufficient());
        assert_eq!(result.players.len(), 2);
        assert!(result.players[1].generated);
        assert_eq!(result.categories.len(), Category::ALL.len());
    }
}
