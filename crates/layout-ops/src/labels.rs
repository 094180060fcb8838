use deck_types::{FootprintSection, MaterialKind, Primitive, PrimitiveKind};

use crate::types::LayoutResult;

const LABEL_SCALE: f64 = 2.0;
const LABEL_CLEARANCE: f64 = 1.0;

/// Dimension annotations floating above two edges of the section.
///
/// Labels are display-only sprites and never touch the tally.
pub fn layout_labels(section: &FootprintSection) -> LayoutResult {
    let mut result = LayoutResult::new();
    if section.width <= 0.0 || section.length <= 0.0 {
        return result;
    }

    let y = section.level_height + LABEL_CLEARANCE;
    // Width label above the near edge, length label beside the left edge.
    result.push(sprite(
        format_feet(section.width),
        [
            section.offset_x,
            y,
            section.offset_z - section.length / 2.0 - LABEL_CLEARANCE,
        ],
    ));
    result.push(sprite(
        format_feet(section.length),
        [
            section.offset_x - section.width / 2.0 - LABEL_CLEARANCE,
            y,
            section.offset_z,
        ],
    ));

    result
}

fn sprite(text: String, position: [f64; 3]) -> Primitive {
    Primitive {
        kind: PrimitiveKind::Sprite {
            text,
            scale: LABEL_SCALE,
        },
        position,
        rotation: [0.0; 3],
        material: MaterialKind::Label,
    }
}

fn format_feet(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{} ft", value.round() as i64)
    } else {
        format!("{value:.1} ft")
    }
}
