mod category;
mod comparator;
mod result;

pub use category::*;
pub use comparator::*;
pub use result::*;
