use std::f64::consts::FRAC_PI_4;

use deck_types::lumber::{
    BOARD_THICKNESS, SPIRAL_TREAD_RADIUS, STEP_DEPTH, STRINGER_DEPTH, STRINGER_WIDTH,
};
use deck_types::{FootprintSection, MaterialKind, Primitive, PrimitiveKind, RailingStyle, StairType};
use tracing::debug;

use crate::railings::layout_railings;
use crate::types::{LayoutError, LayoutResult};

/// Stairs descending from the far (+Z) edge of a section to grade.
///
/// Straight stairs emit one tread per step, climbing toward the deck so
/// the top tread sits flush with the surface, plus a pair of stringers.
/// Spiral stairs emit a single helical tube through the tread centers.
///
/// `railing_style` adds a guard rail around the stair footprint when the
/// deck itself is railed.
pub fn layout_stairs(
    section: &FootprintSection,
    steps: u32,
    stair_width: f64,
    stair_type: StairType,
    railing_style: Option<RailingStyle>,
) -> Result<LayoutResult, LayoutError> {
    if stair_width <= 0.0 {
        return Err(LayoutError::NonPositiveDimension {
            field: "stairWidth",
            value: stair_width,
        });
    }
    let step_height = section.level_height / steps.max(1) as f64;
    if steps == 0 || !step_height.is_finite() || step_height <= 0.0 {
        return Err(LayoutError::BadStepHeight {
            height: section.level_height,
            steps,
            step_height,
        });
    }

    let front = section.offset_z + section.length / 2.0;
    let mut result = match stair_type {
        StairType::Straight => straight(section, steps, stair_width, step_height, front),
        StairType::Spiral => spiral(section, steps, stair_width, step_height, front),
    };

    if let Some(style) = railing_style {
        let footprint = match stair_type {
            StairType::Straight => FootprintSection::new(
                stair_width,
                steps as f64 * STEP_DEPTH,
                section.offset_x,
                front + steps as f64 * STEP_DEPTH / 2.0,
                section.level_height,
            ),
            StairType::Spiral => FootprintSection::new(
                stair_width,
                stair_width,
                section.offset_x,
                front + stair_width / 2.0,
                section.level_height,
            ),
        };
        result.absorb(layout_railings(&footprint, style));
    }

    debug!(steps, feet = result.tally.stair_feet, "stairs laid");
    Ok(result)
}

fn straight(
    section: &FootprintSection,
    steps: u32,
    stair_width: f64,
    step_height: f64,
    front: f64,
) -> LayoutResult {
    let mut result = LayoutResult::new();

    for i in 1..=steps {
        let top = i as f64 * step_height;
        // Step 1 is the farthest from the deck; the last step sits
        // against the deck edge, flush with the surface.
        let z = front + (steps - i) as f64 * STEP_DEPTH + STEP_DEPTH / 2.0;
        result.push(Primitive::boxed(
            [stair_width, BOARD_THICKNESS, STEP_DEPTH],
            [section.offset_x, top - BOARD_THICKNESS / 2.0, z],
            MaterialKind::Stair,
        ));
        result.tally.stair_feet += stair_width;

        // Stringers carry each tread down to grade.
        let stringer_height = top - BOARD_THICKNESS;
        if stringer_height > 0.0 {
            for side in [-1.0, 1.0] {
                result.push(Primitive::boxed(
                    [STRINGER_WIDTH, stringer_height, STRINGER_DEPTH],
                    [
                        section.offset_x + side * (stair_width / 2.0 - STRINGER_WIDTH / 2.0),
                        stringer_height / 2.0,
                        z,
                    ],
                    MaterialKind::Stair,
                ));
            }
        }
    }

    result
}

fn spiral(
    section: &FootprintSection,
    steps: u32,
    stair_width: f64,
    step_height: f64,
    front: f64,
) -> LayoutResult {
    let mut result = LayoutResult::new();

    let radius = stair_width / 2.0;
    let cx = section.offset_x;
    let cz = front + radius;

    // Helix through the tread centers, one eighth-turn per step,
    // climbing from grade to the deck surface.
    let mut path = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        let angle = i as f64 * FRAC_PI_4;
        path.push([
            cx + radius * angle.cos(),
            i as f64 * step_height,
            cz + radius * angle.sin(),
        ]);
    }
    for pair in path.windows(2) {
        let [ax, ay, az] = pair[0];
        let [bx, by, bz] = pair[1];
        let chord = ((bx - ax).powi(2) + (by - ay).powi(2) + (bz - az).powi(2)).sqrt();
        result.tally.stair_feet += chord;
    }
    result.push(Primitive {
        kind: PrimitiveKind::Tube {
            path,
            radius: SPIRAL_TREAD_RADIUS,
        },
        position: [0.0; 3],
        rotation: [0.0; 3],
        material: MaterialKind::Stair,
    });

    result
}
