use crate::error::LoadError;
use nba_core::Player;
use std::collections::HashMap;

/// Immutable seed records keyed by canonical (lowercased) name.
pub struct PlayerStore {
    players: Vec<Player>,
    indexes: HashMap<String, usize>,
}

impl PlayerStore {
    pub fn new(players: Vec<Player>) -> Result<Self, LoadError> {
        let mut indexes = HashMap::with_capacity(players.len());

        for (idx, player) in players.iter().enumerate() {
            let key = player.canonical_key();

            if indexes.insert(key.clone(), idx).is_some() {
                return Err(LoadError::DuplicateKey(key));
            }
        }

        Ok(PlayerStore { players, indexes })
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.indexes
            .get(&Player::canonicalize(name))
            .map(|&idx| &self.players[idx])
    }

    /// Case-insensitive exact match. Returns a copy; the store never changes.
    pub fn lookup(&self, name: &str) -> Option<Player> {
        self.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indexes.contains_key(&Player::canonicalize(name))
    }

    pub fn all(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerLoader;

    fn store() -> PlayerStore {
        PlayerStore::new(PlayerLoader::load().unwrap()).unwrap()
    }

    #[test]
    fn test_lookup_is_case_insensitive_exact_match() {
        let store = store();

        assert_eq!(store.lookup("MICHAEL JORDAN").unwrap().name, "Michael Jordan");
        assert_eq!(store.lookup("  larry bird ").unwrap().name, "Larry Bird");
        assert_eq!(store.lookup("shaquille o'neal").unwrap().championships, 4);
    }

    #[test]
    fn test_lookup_has_no_partial_matching() {
        let store = store();

        assert!(store.lookup("jordan").is_none());
        assert!(store.lookup("michael").is_none());
        assert!(!store.contains("lebron"));
        assert!(store.contains("LeBron James"));
    }

    #[test]
    fn test_repeated_lookup_returns_identical_records() {
        let store = store();

        let first = store.lookup("kobe bryant").unwrap();
        let second = store.lookup("kobe bryant").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_all_keeps_seed_order() {
        let store = store();

        assert_eq!(store.len(), 10);
        assert_eq!(store.all()[1].name, "LeBron James");
        assert_eq!(store.all()[9].name, "Bill Russell");
    }

    #[test]
    fn test_duplicate_keys_are_rejected() {
        let mut players = PlayerLoader::load().unwrap();
        let mut duplicate = players[0].clone();
        duplicate.name = "MICHAEL JORDAN".to_string();
        players.push(duplicate);

        let result = PlayerStore::new(players);
        assert!(matches!(result, Err(LoadError::DuplicateKey(key)) if key == "michael jordan"));
    }
}
