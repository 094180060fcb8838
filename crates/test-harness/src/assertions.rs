//! Result-returning assertions with expected-vs-actual diagnostics.

use deck_types::{MaterialKind, MaterialTally, Primitive};

use crate::helpers::{center_bounds, count_kind, HarnessError};

/// Assert the count of primitives with the given material tag.
pub fn assert_kind_count(
    primitives: &[Primitive],
    kind: MaterialKind,
    expected: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual = count_kind(primitives, kind);
    if actual == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {} {:?} primitives, got {}",
                ctx, expected, kind, actual,
            ),
        })
    }
}

/// Assert two tallies match field-for-field within a tolerance on the
/// linear-feet fields.
pub fn assert_tally_close(
    actual: &MaterialTally,
    expected: &MaterialTally,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let fields = [
        ("boardFeet", actual.board_feet, expected.board_feet),
        ("joistFeet", actual.joist_feet, expected.joist_feet),
        ("railFeet", actual.rail_feet, expected.rail_feet),
        ("stairFeet", actual.stair_feet, expected.stair_feet),
    ];
    for (name, a, e) in fields {
        if (a - e).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!("[{}] {}: expected {:.3}, got {:.3} (tol={})", ctx, name, e, a, tol),
            });
        }
    }
    if actual.railing_posts != expected.railing_posts {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] railingPosts: expected {}, got {}",
                ctx, expected.railing_posts, actual.railing_posts,
            ),
        });
    }
    if actual.furniture_count != expected.furniture_count {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] furnitureCount: expected {}, got {}",
                ctx, expected.furniture_count, actual.furniture_count,
            ),
        });
    }
    Ok(())
}

/// Assert every primitive center lies inside the given bounds.
pub fn assert_centers_within(
    primitives: &[Primitive],
    min: [f64; 3],
    max: [f64; 3],
    ctx: &str,
) -> Result<(), HarnessError> {
    let Some((lo, hi)) = center_bounds(primitives) else {
        return Ok(());
    };
    for axis in 0..3 {
        if lo[axis] < min[axis] || hi[axis] > max[axis] {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] axis {}: centers span [{:.3}, {:.3}], outside [{:.3}, {:.3}]",
                    ctx, axis, lo[axis], hi[axis], min[axis], max[axis],
                ),
            });
        }
    }
    Ok(())
}
