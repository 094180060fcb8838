use serde::{Deserialize, Serialize};

/// Running material totals for one build pass.
///
/// Planners return their own tally delta; the rebuild pass folds deltas
/// with [`MaterialTally::absorb`] instead of threading a shared mutable
/// accumulator through the generators. Recreated at zero on every rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialTally {
    /// Decking board linear feet (picture frame included).
    pub board_feet: f64,
    /// Joist linear feet; rim joists and support posts count here too.
    pub joist_feet: f64,
    /// Rail linear feet across both tiers.
    pub rail_feet: f64,
    /// Railing posts placed (corners double-counted per side).
    pub railing_posts: u32,
    /// Stair tread linear feet (straight) or helical arc feet (spiral).
    pub stair_feet: f64,
    /// Furniture items placed.
    pub furniture_count: u32,
}

impl MaterialTally {
    /// Fold another tally into this one.
    pub fn absorb(&mut self, other: &MaterialTally) {
        self.board_feet += other.board_feet;
        self.joist_feet += other.joist_feet;
        self.rail_feet += other.rail_feet;
        self.railing_posts += other.railing_posts;
        self.stair_feet += other.stair_feet;
        self.furniture_count += other.furniture_count;
    }
}
