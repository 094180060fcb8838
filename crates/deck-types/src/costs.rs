use serde::{Deserialize, Serialize};

use crate::tally::MaterialTally;

/// Configurable unit costs for the material estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostTable {
    pub board_cost_per_foot: f64,
    pub joist_cost_per_foot: f64,
    pub rail_cost_per_foot: f64,
    pub railing_post_cost: f64,
    pub stair_cost_per_step: f64,
    pub furniture_cost_per_item: f64,
    /// Waste multiplier applied to the whole estimate.
    pub waste_factor: f64,
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            board_cost_per_foot: 4.0,
            joist_cost_per_foot: 2.0,
            rail_cost_per_foot: 3.0,
            railing_post_cost: 50.0,
            stair_cost_per_step: 50.0,
            furniture_cost_per_item: 100.0,
            waste_factor: 1.05,
        }
    }
}

impl CostTable {
    /// Total cost for a build's tally. Stairs are costed per step, so the
    /// step count comes from the spec rather than the tally.
    pub fn estimate(&self, tally: &MaterialTally, stair_steps: u32) -> f64 {
        let raw = tally.board_feet * self.board_cost_per_foot
            + tally.joist_feet * self.joist_cost_per_foot
            + tally.rail_feet * self.rail_cost_per_foot
            + tally.railing_posts as f64 * self.railing_post_cost
            + stair_steps as f64 * self.stair_cost_per_step
            + tally.furniture_count as f64 * self.furniture_cost_per_item;
        raw * self.waste_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_applies_unit_costs_and_waste() {
        let costs = CostTable::default();
        let tally = MaterialTally {
            board_feet: 100.0,
            joist_feet: 50.0,
            rail_feet: 10.0,
            railing_posts: 2,
            stair_feet: 12.0,
            furniture_count: 1,
        };
        // 400 + 100 + 30 + 100 + 3*50 + 100 = 880, times 1.05
        let total = costs.estimate(&tally, 3);
        assert!((total - 880.0 * 1.05).abs() < 1e-9);
    }

    #[test]
    fn empty_tally_costs_nothing() {
        let costs = CostTable::default();
        assert_eq!(costs.estimate(&MaterialTally::default(), 0), 0.0);
    }
}
