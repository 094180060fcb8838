use std::f64::consts::FRAC_PI_2;

use deck_types::lumber::{
    RAIL_LOWER_OFFSET, RAIL_POST_HEIGHT, RAIL_POST_SIDE, RAIL_POST_SPACING, RAIL_RADIUS_CABLE,
    RAIL_RADIUS_STANDARD, RAIL_UPPER_OFFSET,
};
use deck_types::{FootprintSection, MaterialKind, Primitive, RailingStyle};
use tracing::debug;

use crate::types::LayoutResult;

const EPS: f64 = 1e-9;

/// Railing posts and rails around all four edges of a section.
///
/// Posts are spaced at [`RAIL_POST_SPACING`] with one forced at each end
/// of every edge; each pair of adjacent posts carries an upper and a
/// lower rail. Cable style only changes the rail radius, never the
/// layout. Corner posts belong to both adjoining edges and are counted
/// once per edge, which errs on the generous side for the estimate.
pub fn layout_railings(section: &FootprintSection, style: RailingStyle) -> LayoutResult {
    let mut result = LayoutResult::new();
    if section.width <= 0.0 || section.length <= 0.0 {
        return result;
    }

    let radius = match style {
        RailingStyle::Standard => RAIL_RADIUS_STANDARD,
        RailingStyle::Cable => RAIL_RADIUS_CABLE,
    };

    let hw = section.width / 2.0;
    let hl = section.length / 2.0;
    // Each edge as (start, end) in section-local coordinates.
    let edges = [
        ([-hw, -hl], [hw, -hl]),
        ([-hw, hl], [hw, hl]),
        ([-hw, -hl], [-hw, hl]),
        ([hw, -hl], [hw, hl]),
    ];

    for (start, end) in edges {
        lay_edge(&mut result, section, start, end, radius);
    }

    debug!(
        posts = result.tally.railing_posts,
        rail_feet = result.tally.rail_feet,
        "railings laid"
    );
    result
}

fn lay_edge(
    result: &mut LayoutResult,
    section: &FootprintSection,
    start: [f64; 2],
    end: [f64; 2],
    radius: f64,
) {
    let dx = end[0] - start[0];
    let dz = end[1] - start[1];
    let edge_len = (dx * dx + dz * dz).sqrt();
    if edge_len <= EPS {
        return;
    }
    let (ux, uz) = (dx / edge_len, dz / edge_len);
    let along_x = ux.abs() > uz.abs();

    // Post parameters: multiples of the spacing, then the far end.
    let mut stations = Vec::new();
    let mut t = 0.0;
    while t < edge_len - EPS {
        stations.push(t);
        t += RAIL_POST_SPACING;
    }
    stations.push(edge_len);

    let post_y = section.level_height + RAIL_POST_HEIGHT / 2.0;
    for &t in &stations {
        result.push(Primitive::boxed(
            [RAIL_POST_SIDE, RAIL_POST_HEIGHT, RAIL_POST_SIDE],
            [
                start[0] + ux * t + section.offset_x,
                post_y,
                start[1] + uz * t + section.offset_z,
            ],
            MaterialKind::RailingPost,
        ));
        result.tally.railing_posts += 1;
    }

    // Rails lie flat between adjacent posts, so rotate the cylinder
    // axis from Y onto the edge direction.
    let rotation = if along_x {
        [0.0, 0.0, FRAC_PI_2]
    } else {
        [FRAC_PI_2, 0.0, 0.0]
    };
    for pair in stations.windows(2) {
        let span = pair[1] - pair[0];
        let mid = (pair[0] + pair[1]) / 2.0;
        for tier in [RAIL_UPPER_OFFSET, RAIL_LOWER_OFFSET] {
            result.push(
                Primitive::cylinder(
                    radius,
                    span,
                    [
                        start[0] + ux * mid + section.offset_x,
                        section.level_height + tier,
                        start[1] + uz * mid + section.offset_z,
                    ],
                    MaterialKind::Rail,
                )
                .with_rotation(rotation),
            );
            result.tally.rail_feet += span;
        }
    }
}
