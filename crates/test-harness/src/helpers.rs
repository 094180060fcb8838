//! Helper functions: error type, spec builders, primitive measurement.

use deck_types::{
    BoardDirection, DeckShape, DeckSpec, MaterialKind, Primitive, PrimitiveKind, RailingStyle,
    StairType,
};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("engine error: {0}")]
    Engine(String),
}

// ── Spec Builders ───────────────────────────────────────────────────────────

/// A bare 12x12 rectangular deck one foot off the ground, every feature
/// toggle off. The baseline most scenarios start from.
pub fn bare_deck() -> DeckSpec {
    DeckSpec {
        shape: DeckShape::Rectangular,
        width: 12.0,
        length: 12.0,
        height: 1.0,
        board_direction: BoardDirection::Horizontal,
        picture_frame: false,
        railings: false,
        stairs: false,
        show_dimensions: false,
        furniture: Vec::new(),
        ..DeckSpec::default()
    }
}

/// The bare deck with railings in the given style.
pub fn railed_deck(style: RailingStyle) -> DeckSpec {
    DeckSpec {
        railings: true,
        railing_style: style,
        ..bare_deck()
    }
}

/// The bare deck with straight stairs.
pub fn stair_deck(steps: u32) -> DeckSpec {
    DeckSpec {
        stairs: true,
        stair_steps: steps,
        stair_width: 4.0,
        stair_type: StairType::Straight,
        ..bare_deck()
    }
}

// ── Primitive Measurement ───────────────────────────────────────────────────

/// Count primitives carrying the given material tag.
pub fn count_kind(primitives: &[Primitive], kind: MaterialKind) -> usize {
    primitives.iter().filter(|p| p.material == kind).count()
}

/// Axis-aligned bounding box over primitive centers (rotation ignored).
/// Good enough for checking placement extents; `None` for an empty list.
pub fn center_bounds(primitives: &[Primitive]) -> Option<([f64; 3], [f64; 3])> {
    let mut iter = primitives.iter();
    let first = iter.next()?;
    let mut min = first.position;
    let mut max = first.position;
    for p in iter {
        for axis in 0..3 {
            min[axis] = min[axis].min(p.position[axis]);
            max[axis] = max[axis].max(p.position[axis]);
        }
    }
    Some((min, max))
}

/// Sum of box extents along one axis for primitives of one material, a
/// proxy for drawn board length.
pub fn total_box_extent(primitives: &[Primitive], kind: MaterialKind, axis: usize) -> f64 {
    primitives
        .iter()
        .filter(|p| p.material == kind)
        .filter_map(|p| match p.kind {
            PrimitiveKind::Box { size } => Some(size[axis]),
            _ => None,
        })
        .sum()
}
