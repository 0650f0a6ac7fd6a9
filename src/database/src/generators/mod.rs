mod archetype;
mod player;

pub use archetype::*;
pub use player::*;
