use serde::{Deserialize, Serialize};

/// A rectangular plan-view area of decking at a given elevation.
///
/// Produced fresh by the topology composer on every rebuild, one or more
/// per deck shape, and discarded once the section's planners have run.
/// Offsets position the section's center relative to the deck origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintSection {
    pub width: f64,
    pub length: f64,
    pub offset_x: f64,
    pub offset_z: f64,
    /// Elevation of this section's deck surface above grade.
    pub level_height: f64,
}

impl FootprintSection {
    pub fn new(width: f64, length: f64, offset_x: f64, offset_z: f64, level_height: f64) -> Self {
        Self {
            width,
            length,
            offset_x,
            offset_z,
            level_height,
        }
    }

    /// Plan-view area in square feet.
    pub fn area(&self) -> f64 {
        self.width * self.length
    }
}
