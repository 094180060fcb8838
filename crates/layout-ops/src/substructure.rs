use deck_types::lumber::{
    BOARD_THICKNESS, JOIST_DEPTH, JOIST_SPACING, JOIST_THICKNESS, POST_GRID_SPACING, POST_RADIUS,
};
use deck_types::{BoardDirection, FootprintSection, MaterialKind, Primitive};
use tracing::debug;

use crate::types::{LayoutError, LayoutResult};

const EPS: f64 = 1e-9;

/// Joists and support posts under one footprint section.
///
/// Joists run perpendicular to the decking boards so every board crosses
/// them. Two rim joists sit at the section edges regardless of size;
/// interior joists are spread evenly at roughly 16-inch centers.
///
/// Posts form a grid at [`POST_GRID_SPACING`] centers and are skipped
/// entirely when the section sits at grade (no room under the framing).
pub fn layout_substructure(
    section: &FootprintSection,
    direction: BoardDirection,
) -> Result<LayoutResult, LayoutError> {
    if section.width <= 0.0 {
        return Err(LayoutError::NonPositiveDimension {
            field: "width",
            value: section.width,
        });
    }
    if section.length <= 0.0 {
        return Err(LayoutError::NonPositiveDimension {
            field: "length",
            value: section.length,
        });
    }

    let mut result = LayoutResult::new();

    // Boards run along X for horizontal decking, so joists run along Z
    // and are spaced across X; vertical decking swaps that.
    let (span, spacing_dim) = match direction {
        BoardDirection::Horizontal => (section.length, section.width),
        BoardDirection::Vertical => (section.width, section.length),
    };

    let joist_y = section.level_height - BOARD_THICKNESS - JOIST_DEPTH / 2.0;
    let joist_size = match direction {
        BoardDirection::Horizontal => [JOIST_THICKNESS, JOIST_DEPTH, span],
        BoardDirection::Vertical => [span, JOIST_DEPTH, JOIST_THICKNESS],
    };
    let place_joist = |result: &mut LayoutResult, along: f64| {
        let (x, z) = match direction {
            BoardDirection::Horizontal => (along, 0.0),
            BoardDirection::Vertical => (0.0, along),
        };
        result.push(Primitive::boxed(
            joist_size,
            [x + section.offset_x, joist_y, z + section.offset_z],
            MaterialKind::Joist,
        ));
        result.tally.joist_feet += span;
    };

    let interior = interior_joist_count(spacing_dim);
    for i in 0..interior {
        let along = -spacing_dim / 2.0 + spacing_dim * (i + 1) as f64 / (interior + 1) as f64;
        place_joist(&mut result, along);
    }
    // Rim joists at both edges, inset by half a joist thickness.
    let rim = spacing_dim / 2.0 - JOIST_THICKNESS / 2.0;
    place_joist(&mut result, -rim);
    place_joist(&mut result, rim);

    // Support posts down to grade, skipped for a deck at grade.
    let post_height = section.level_height - BOARD_THICKNESS - JOIST_DEPTH;
    if post_height > 0.0 {
        let posts_x = (section.width / POST_GRID_SPACING).floor() as u32 + 1;
        let posts_z = (section.length / POST_GRID_SPACING).floor() as u32 + 1;
        for ix in 0..posts_x {
            for iz in 0..posts_z {
                let x = grid_coordinate(section.width, posts_x, ix);
                let z = grid_coordinate(section.length, posts_z, iz);
                result.push(Primitive::cylinder(
                    POST_RADIUS,
                    post_height,
                    [
                        x + section.offset_x,
                        post_height / 2.0,
                        z + section.offset_z,
                    ],
                    MaterialKind::Post,
                ));
                result.tally.joist_feet += post_height;
            }
        }
    }

    debug!(
        joists = interior + 2,
        feet = result.tally.joist_feet,
        "substructure laid"
    );
    Ok(result)
}

/// Grid coordinate for post `index` of `count` along a dimension, with
/// posts at both edges when more than one fits.
fn grid_coordinate(dim: f64, count: u32, index: u32) -> f64 {
    if count <= 1 {
        0.0
    } else {
        -dim / 2.0 + dim * index as f64 / (count - 1) as f64
    }
}

/// Interior joist count for 16-inch nominal centers across `spacing_dim`.
///
/// The division is done against the remainder so an exact multiple (like
/// 12 ft over 16 in) counts as zero leftover despite rounding noise, and
/// a leftover shorter than half a spacing drops one joist rather than
/// crowding the rim.
fn interior_joist_count(spacing_dim: f64) -> u32 {
    let mut rem = spacing_dim % JOIST_SPACING;
    if rem < EPS || rem > JOIST_SPACING - EPS {
        rem = 0.0;
    }
    let whole = ((spacing_dim - rem) / JOIST_SPACING).round() as u32;
    let mut count = whole + u32::from(rem > 0.0);
    if rem < JOIST_SPACING / 2.0 {
        count = count.saturating_sub(1);
    }
    count
}
