pub mod costs;
pub mod lumber;
pub mod primitive;
pub mod section;
pub mod spec;
pub mod tally;

pub use costs::*;
pub use primitive::*;
pub use section::*;
pub use spec::*;
pub use tally::*;
