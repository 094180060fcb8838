use deck_types::{DeckShape, DeckSpec, FootprintSection};

/// A footprint section with its composer label, used for error
/// attribution in build reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposedSection {
    pub label: &'static str,
    pub section: FootprintSection,
}

/// Expand the spec's shape into footprint sections.
///
/// One case per shape tag, each returning a fixed-size list, so adding a
/// shape is a localized change here. Conventions:
/// - L-shaped: the wing hangs off the +X edge, flush with the near (-Z)
///   corner, so its outer edge lines up with the primary corner.
/// - T-shaped: the wing is centered on the -Z edge (the +Z edge is where
///   stairs attach).
/// - Multi-level: the second platform sits past the -Z edge at
///   `height + secondHeightOffset`, adjacent rather than overlapping.
pub fn compose_sections(spec: &DeckSpec) -> Vec<ComposedSection> {
    let primary = ComposedSection {
        label: "primary",
        section: FootprintSection::new(spec.width, spec.length, 0.0, 0.0, spec.height),
    };

    match spec.shape {
        DeckShape::Rectangular => vec![primary],
        DeckShape::LShaped => vec![
            primary,
            ComposedSection {
                label: "wing",
                section: FootprintSection::new(
                    spec.wing_width,
                    spec.wing_length,
                    spec.width / 2.0 + spec.wing_width / 2.0,
                    -spec.length / 2.0 + spec.wing_length / 2.0,
                    spec.height,
                ),
            },
        ],
        DeckShape::TShaped => vec![
            primary,
            ComposedSection {
                label: "wing",
                section: FootprintSection::new(
                    spec.wing_width,
                    spec.wing_length,
                    0.0,
                    -(spec.length / 2.0 + spec.wing_length / 2.0),
                    spec.height,
                ),
            },
        ],
        DeckShape::MultiLevel => vec![
            primary,
            ComposedSection {
                label: "second level",
                section: FootprintSection::new(
                    spec.second_width,
                    spec.second_length,
                    0.0,
                    -(spec.length / 2.0 + spec.second_length / 2.0),
                    spec.height + spec.second_height_offset,
                ),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangular_is_a_single_section() {
        let sections = compose_sections(&DeckSpec::default());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, "primary");
        assert_eq!(sections[0].section.offset_x, 0.0);
        assert_eq!(sections[0].section.level_height, 1.0);
    }

    #[test]
    fn l_shape_wing_does_not_overlap_the_primary() {
        // Wing smaller than the primary.
        let spec = DeckSpec {
            shape: DeckShape::LShaped,
            ..DeckSpec::default()
        };
        let sections = compose_sections(&spec);
        assert_eq!(sections.len(), 2);

        let primary = sections[0].section;
        let wing = sections[1].section;
        // Wing's inner edge meets the primary's +X edge exactly.
        assert!((wing.offset_x - wing.width / 2.0 - primary.width / 2.0).abs() < 1e-9);
        // Outer corners line up on the near edge.
        assert!(
            ((wing.offset_z - wing.length / 2.0) - (-primary.length / 2.0)).abs() < 1e-9
        );
    }

    #[test]
    fn t_shape_wing_is_centered_on_the_edge() {
        let spec = DeckSpec {
            shape: DeckShape::TShaped,
            ..DeckSpec::default()
        };
        let sections = compose_sections(&spec);
        let wing = sections[1].section;
        assert_eq!(wing.offset_x, 0.0);
        assert!((wing.offset_z + 6.0 + 3.0).abs() < 1e-9);
    }

    #[test]
    fn second_level_is_raised_and_adjacent() {
        let spec = DeckSpec {
            shape: DeckShape::MultiLevel,
            ..DeckSpec::default()
        };
        let sections = compose_sections(&spec);
        let second = sections[1].section;
        assert!((second.level_height - 2.0).abs() < 1e-9);
        // Adjacent along Z: the second level's far edge meets the
        // primary's near edge.
        assert!((second.offset_z + second.length / 2.0 + 6.0).abs() < 1e-9);
    }
}
