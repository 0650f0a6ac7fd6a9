mod error;
mod generators;
mod loaders;
mod resolver;
mod store;

pub use error::*;
pub use generators::*;
pub use loaders::*;
pub use resolver::*;
pub use store::*;

pub struct DatabaseEntity {
    pub players: PlayerStore,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, LoadError> {
        let players = PlayerStore::new(PlayerLoader::load()?)?;

        Ok(DatabaseEntity { players })
    }
}
