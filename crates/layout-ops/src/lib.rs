//! Pure layout planners for the deck engine.
//!
//! Each planner takes a footprint section plus its parameters and returns
//! a [`LayoutResult`]: the primitives to draw and the material tally delta
//! they represent. Planners never touch shared state; the rebuild pass
//! folds the deltas.

pub mod boards;
pub mod frame;
pub mod furniture;
pub mod labels;
pub mod railings;
pub mod stairs;
pub mod substructure;
pub mod types;

pub use boards::layout_boards;
pub use frame::layout_picture_frame;
pub use furniture::layout_furniture;
pub use labels::layout_labels;
pub use railings::layout_railings;
pub use stairs::layout_stairs;
pub use substructure::layout_substructure;
pub use types::{LayoutError, LayoutResult};
