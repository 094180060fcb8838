use deck_types::lumber::{BOARD_WIDTH, STOCK_LENGTHS};
use deck_types::{BoardDirection, BoardLength, BoardPattern, FootprintSection};

use crate::boards::layout_boards;
use crate::types::{LayoutError, LayoutResult};

/// Picture-frame border: one board-width strip along each edge of the
/// section, mitered in effect by letting the long strips run the full
/// width plus both corners.
///
/// Each strip is a one-row decking layout over a thin border section, so
/// segmentation and tally behave exactly like the field boards.
pub fn layout_picture_frame(
    section: &FootprintSection,
    board_length: BoardLength,
) -> Result<LayoutResult, LayoutError> {
    let mut result = LayoutResult::new();
    if section.width <= 0.0 || section.length <= 0.0 {
        return Ok(result);
    }

    let outer_width = section.width + 2.0 * BOARD_WIDTH;
    let outer_length = section.length + 2.0 * BOARD_WIDTH;

    // Near and far strips run along X across the full outer width.
    for dz in [-1.0, 1.0] {
        let strip = FootprintSection::new(
            outer_width,
            BOARD_WIDTH,
            section.offset_x,
            section.offset_z + dz * (section.length / 2.0 + BOARD_WIDTH / 2.0),
            section.level_height,
        );
        result.absorb(layout_boards(
            &strip,
            BoardDirection::Horizontal,
            BoardPattern::Standard,
            board_length,
            &STOCK_LENGTHS,
        )?);
    }
    // Side strips run along Z between the corners' inner edges.
    for dx in [-1.0, 1.0] {
        let strip = FootprintSection::new(
            BOARD_WIDTH,
            section.length,
            section.offset_x + dx * (section.width / 2.0 + BOARD_WIDTH / 2.0),
            section.offset_z,
            section.level_height,
        );
        result.absorb(layout_boards(
            &strip,
            BoardDirection::Vertical,
            BoardPattern::Standard,
            board_length,
            &STOCK_LENGTHS,
        )?);
    }

    Ok(result)
}
