mod float;
mod string;
mod time;

pub use float::*;
pub use string::*;
pub use time::*;
