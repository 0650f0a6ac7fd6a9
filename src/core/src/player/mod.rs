mod player;
mod stats;

pub use player::*;
pub use stats::*;
