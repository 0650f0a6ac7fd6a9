use thiserror::Error;

pub const PLAYER_NAME_REQUIRED: &str = "Player name is required";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid player data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate player key: {0}")]
    DuplicateKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Player not found: {0}")]
    NotFound(String),

    #[error("Please provide at least 2 players to compare (got {provided})")]
    InsufficientInput { provided: usize },

    #[error("{0}")]
    MalformedRequest(String),
}
