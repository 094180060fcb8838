use deck_types::{FootprintSection, FurnitureKind, MaterialKind, Primitive};

use crate::types::LayoutResult;

const ITEM_SPACING: f64 = 4.0;

/// Decorative furniture placed in a row across the section.
///
/// Geometry is purely cosmetic; only the item count reaches the tally.
pub fn layout_furniture(section: &FootprintSection, items: &[FurnitureKind]) -> LayoutResult {
    let mut result = LayoutResult::new();
    if items.is_empty() {
        return result;
    }

    let surface = section.level_height;
    let start = -(items.len() as f64 - 1.0) * ITEM_SPACING / 2.0;
    for (i, kind) in items.iter().enumerate() {
        let x = section.offset_x + start + i as f64 * ITEM_SPACING;
        let z = section.offset_z;
        match kind {
            FurnitureKind::Chair => chair(&mut result, x, z, surface),
            FurnitureKind::Table => table(&mut result, x, z, surface),
        }
        result.tally.furniture_count += 1;
    }

    result
}

fn chair(result: &mut LayoutResult, x: f64, z: f64, surface: f64) {
    // Seat, backrest, four legs.
    result.push(Primitive::boxed(
        [1.5, 0.15, 1.5],
        [x, surface + 1.2, z],
        MaterialKind::Furniture,
    ));
    result.push(Primitive::boxed(
        [1.5, 1.5, 0.15],
        [x, surface + 2.0, z - 0.7],
        MaterialKind::Furniture,
    ));
    legs(result, x, z, surface, 0.6, 1.2);
}

fn table(result: &mut LayoutResult, x: f64, z: f64, surface: f64) {
    result.push(Primitive::boxed(
        [3.0, 0.15, 3.0],
        [x, surface + 2.4, z],
        MaterialKind::Furniture,
    ));
    legs(result, x, z, surface, 1.3, 2.4);
}

fn legs(result: &mut LayoutResult, x: f64, z: f64, surface: f64, inset: f64, height: f64) {
    for dx in [-1.0, 1.0] {
        for dz in [-1.0, 1.0] {
            result.push(Primitive::cylinder(
                0.05,
                height,
                [x + dx * inset, surface + height / 2.0, z + dz * inset],
                MaterialKind::Furniture,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> FootprintSection {
        FootprintSection::new(12.0, 12.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn chair_and_table_each_count_once() {
        let result = layout_furniture(&section(), &[FurnitureKind::Chair, FurnitureKind::Table]);
        assert_eq!(result.tally.furniture_count, 2);
        // Chair: seat + backrest + 4 legs. Table: top + 4 legs.
        assert_eq!(result.primitives.len(), 6 + 5);
        assert!(result
            .primitives
            .iter()
            .all(|p| p.material == MaterialKind::Furniture));
    }

    #[test]
    fn furniture_contributes_no_lumber() {
        let result = layout_furniture(&section(), &[FurnitureKind::Table]);
        assert_eq!(result.tally.board_feet, 0.0);
        assert_eq!(result.tally.joist_feet, 0.0);
        assert_eq!(result.tally.rail_feet, 0.0);
    }

    #[test]
    fn items_are_spread_in_a_row() {
        let result = layout_furniture(
            &section(),
            &[FurnitureKind::Chair, FurnitureKind::Chair, FurnitureKind::Chair],
        );
        // Seat centers at -4, 0, 4.
        let mut seats: Vec<f64> = result
            .primitives
            .iter()
            .filter(|p| matches!(p.kind, deck_types::PrimitiveKind::Box { size } if size[1] == 0.15 && size[0] == 1.5 && size[2] == 1.5))
            .map(|p| p.position[0])
            .collect();
        seats.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(seats, vec![-4.0, 0.0, 4.0]);
    }

    #[test]
    fn no_items_no_geometry() {
        let result = layout_furniture(&section(), &[]);
        assert!(result.primitives.is_empty());
        assert_eq!(result.tally.furniture_count, 0);
    }

    #[test]
    fn furniture_sits_on_the_surface() {
        let result = layout_furniture(&section(), &[FurnitureKind::Chair]);
        for p in &result.primitives {
            assert!(p.position[1] >= 1.0);
        }
    }
}
