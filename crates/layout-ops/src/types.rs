use deck_types::{MaterialTally, Primitive};

/// Output of one planner call: primitives plus the tally delta they add.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    pub primitives: Vec<Primitive>,
    pub tally: MaterialTally,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Fold another result into this one.
    pub fn absorb(&mut self, other: LayoutResult) {
        self.primitives.extend(other.primitives);
        self.tally.absorb(&other.tally);
    }
}

/// Errors from layout planners.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LayoutError {
    #[error("{field} must be positive, got {value}")]
    NonPositiveDimension { field: &'static str, value: f64 },

    #[error("step height {step_height} from height {height} over {steps} steps is not positive and finite")]
    BadStepHeight {
        height: f64,
        steps: u32,
        step_height: f64,
    },

    #[error("no stock lengths available for board segmentation")]
    NoStockLengths,
}
