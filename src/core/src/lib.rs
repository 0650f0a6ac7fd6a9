pub mod chat;
pub mod comparison;
pub mod player;
pub mod utils;

pub use chat::{ChatTurn, ResponseSelector};
pub use comparison::{Category, CategoryComparator, CategoryResult, ComparisonResult};
pub use player::{CareerStats, Player};
pub use utils::*;
