use deck_types::{CostTable, DeckSpec, MaterialTally, Primitive};
use layout_ops::{
    layout_boards, layout_furniture, layout_labels, layout_picture_frame, layout_railings,
    layout_stairs, layout_substructure, LayoutError, LayoutResult,
};
use tracing::{info, warn};

use crate::sections::compose_sections;

/// Everything one rebuild produces. Fully replaces the previous build's
/// output; nothing is carried across rebuilds.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub primitives: Vec<Primitive>,
    pub tally: MaterialTally,
    /// Sum of section plan areas, square feet.
    pub square_footage: f64,
    pub total_cost: f64,
    /// Sections whose planners failed, with messages. Geometry from the
    /// sections that succeeded is kept.
    pub errors: Vec<(String, String)>,
}

/// One full build pass over the spec.
///
/// Best-effort: a planner failing on one section records an error and
/// the pass continues; primitives already emitted stay in the output.
pub fn rebuild(spec: &DeckSpec, costs: &CostTable) -> BuildOutput {
    let mut acc = LayoutResult::new();
    let mut errors: Vec<(String, String)> = Vec::new();
    let mut square_footage = 0.0;

    let sections = compose_sections(spec);
    for (index, composed) in sections.iter().enumerate() {
        let section = &composed.section;
        square_footage += section.area();

        fold(
            &mut acc,
            &mut errors,
            composed.label,
            layout_substructure(section, spec.board_direction),
        );
        fold(
            &mut acc,
            &mut errors,
            composed.label,
            layout_boards(
                section,
                spec.board_direction,
                spec.board_pattern,
                spec.board_length,
                &deck_types::lumber::STOCK_LENGTHS,
            ),
        );
        if spec.picture_frame {
            fold(
                &mut acc,
                &mut errors,
                composed.label,
                layout_picture_frame(section, spec.board_length),
            );
        }
        if spec.railings {
            acc.absorb(layout_railings(section, spec.railing_style));
        }
        if spec.show_dimensions {
            acc.absorb(layout_labels(section));
        }

        // Stairs and furniture belong to the primary section only.
        if index == 0 {
            if spec.stairs {
                fold(
                    &mut acc,
                    &mut errors,
                    composed.label,
                    layout_stairs(
                        section,
                        spec.stair_steps,
                        spec.stair_width,
                        spec.stair_type,
                        spec.railings.then_some(spec.railing_style),
                    ),
                );
            }
            acc.absorb(layout_furniture(section, &spec.furniture));
        }
    }

    let stair_steps = if spec.stairs { spec.stair_steps } else { 0 };
    let total_cost = costs.estimate(&acc.tally, stair_steps);

    info!(
        primitives = acc.primitives.len(),
        square_footage,
        total_cost,
        errors = errors.len(),
        "rebuild complete"
    );

    BuildOutput {
        primitives: acc.primitives,
        tally: acc.tally,
        square_footage,
        total_cost,
        errors,
    }
}

fn fold(
    acc: &mut LayoutResult,
    errors: &mut Vec<(String, String)>,
    label: &str,
    outcome: Result<LayoutResult, LayoutError>,
) {
    match outcome {
        Ok(part) => acc.absorb(part),
        Err(e) => {
            warn!(section = label, error = %e, "planner failed");
            errors.push((label.to_string(), e.to_string()));
        }
    }
}
