use deck_types::lumber::{BOARD_GAP, BOARD_THICKNESS, BOARD_WIDTH};
use deck_types::{
    BoardDirection, BoardLength, BoardPattern, FootprintSection, MaterialKind, Primitive,
};
use tracing::debug;

use crate::types::{LayoutError, LayoutResult};

const EPS: f64 = 1e-9;

/// Lay decking boards over a footprint section.
///
/// Rows are placed across the board-perpendicular axis at
/// `BOARD_WIDTH + BOARD_GAP` centers; each row is segmented along the run
/// axis from the stock list.
///
/// Tally policy: the tally accumulates the pre-clip stock length of every
/// segment (the material purchased), while the emitted primitive uses the
/// clipped length (the geometry drawn). `remaining` decrements by the
/// pre-clip value, so segmentation always terminates; in auto mode the
/// final segment may overshoot the footprint instead of being clipped.
///
/// A non-positive span produces zero rows and an empty result, not an
/// error. A non-positive board or stock length is rejected up front so
/// segmentation cannot stall.
pub fn layout_boards(
    section: &FootprintSection,
    direction: BoardDirection,
    pattern: BoardPattern,
    board_length: BoardLength,
    stock_lengths: &[f64],
) -> Result<LayoutResult, LayoutError> {
    let mut result = LayoutResult::new();

    let (run, across) = match direction {
        BoardDirection::Horizontal => (section.width, section.length),
        BoardDirection::Vertical => (section.length, section.width),
    };
    if run <= 0.0 || across <= 0.0 {
        return Ok(result);
    }
    // Every segment must consume positive length or the row loop below
    // would never advance.
    match board_length {
        BoardLength::Fixed(len) if len <= 0.0 => {
            return Err(LayoutError::NonPositiveDimension {
                field: "boardLength",
                value: len,
            });
        }
        BoardLength::Auto => {
            if stock_lengths.is_empty() {
                return Err(LayoutError::NoStockLengths);
            }
            if let Some(&bad) = stock_lengths.iter().find(|&&len| len <= 0.0) {
                return Err(LayoutError::NonPositiveDimension {
                    field: "stockLength",
                    value: bad,
                });
            }
        }
        BoardLength::Fixed(_) => {}
    }

    let effective_width = BOARD_WIDTH + BOARD_GAP;
    let row_count = (across / effective_width).ceil() as usize;
    let board_y = section.level_height - BOARD_THICKNESS / 2.0;

    // Diagonal pattern rotates boards in place and scales their footprint
    // by √2 to keep coverage; row and segment positions are unchanged.
    let (scale, rotation) = match pattern {
        BoardPattern::Standard => (1.0, [0.0; 3]),
        BoardPattern::Diagonal => (std::f64::consts::SQRT_2, [0.0, std::f64::consts::FRAC_PI_4, 0.0]),
    };

    for row in 0..row_count {
        let across_pos = -across / 2.0 + effective_width * (row as f64 + 0.5);

        let mut remaining = run;
        let mut cursor = -run / 2.0;
        while remaining > EPS {
            let consumed = match board_length {
                BoardLength::Auto => pick_stock(stock_lengths, remaining),
                BoardLength::Fixed(len) => len,
            };
            // Fixed mode clips the final segment to the footprint; auto
            // mode accepts the overshoot.
            let placed = match board_length {
                BoardLength::Fixed(_) => consumed.min(remaining),
                BoardLength::Auto => consumed,
            };

            let along_center = cursor + placed / 2.0;
            let (x, z, size) = match direction {
                BoardDirection::Horizontal => (
                    along_center,
                    across_pos,
                    [placed * scale, BOARD_THICKNESS, BOARD_WIDTH * scale],
                ),
                BoardDirection::Vertical => (
                    across_pos,
                    along_center,
                    [BOARD_WIDTH * scale, BOARD_THICKNESS, placed * scale],
                ),
            };
            result.push(
                Primitive::boxed(
                    size,
                    [x + section.offset_x, board_y, z + section.offset_z],
                    MaterialKind::Board,
                )
                .with_rotation(rotation),
            );

            result.tally.board_feet += consumed;
            remaining -= consumed;
            cursor += placed;
        }
    }

    debug!(rows = row_count, feet = result.tally.board_feet, "boards laid");
    Ok(result)
}

/// Largest stock length that fits the remaining run, or the smallest
/// stock length when nothing fits (the overshoot case).
fn pick_stock(stock_lengths: &[f64], remaining: f64) -> f64 {
    let mut best_fit: Option<f64> = None;
    let mut smallest = f64::INFINITY;
    for &len in stock_lengths {
        smallest = smallest.min(len);
        if len <= remaining + EPS && best_fit.map_or(true, |b| len > b) {
            best_fit = Some(len);
        }
    }
    best_fit.unwrap_or(smallest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_types::lumber::STOCK_LENGTHS;

    fn section(width: f64, length: f64) -> FootprintSection {
        FootprintSection::new(width, length, 0.0, 0.0, 1.0)
    }

    #[test]
    fn rows_cover_the_across_span() {
        let result = layout_boards(
            &section(12.0, 12.0),
            BoardDirection::Horizontal,
            BoardPattern::Standard,
            BoardLength::Auto,
            &STOCK_LENGTHS,
        )
        .unwrap();

        let effective = BOARD_WIDTH + BOARD_GAP;
        let rows = (12.0f64 / effective).ceil();
        assert_eq!(rows as usize, 24);
        assert!(rows * effective >= 12.0);
        assert_eq!(result.primitives.len(), 24);
    }

    #[test]
    fn auto_mode_exact_fit_uses_single_segment() {
        // Run of 12 with stock [12, 16, 20] → one 12 ft board
        // per row, zero leftover.
        let result = layout_boards(
            &section(12.0, 12.0),
            BoardDirection::Horizontal,
            BoardPattern::Standard,
            BoardLength::Auto,
            &STOCK_LENGTHS,
        )
        .unwrap();

        assert_eq!(result.primitives.len(), 24);
        assert!((result.tally.board_feet - 24.0 * 12.0).abs() < 1e-6);
    }

    #[test]
    fn auto_mode_overshoots_with_smallest_stock() {
        // Run of 30: one 20 ft board, then nothing fits the 10 ft
        // remainder, so the smallest stock (12 ft) overshoots.
        let result = layout_boards(
            &section(30.0, 1.0),
            BoardDirection::Horizontal,
            BoardPattern::Standard,
            BoardLength::Auto,
            &STOCK_LENGTHS,
        )
        .unwrap();

        assert_eq!(result.primitives.len(), 2 * 2); // 2 rows × 2 segments
        // Per row: 20 + 12 purchased.
        assert!((result.tally.board_feet - 2.0 * 32.0).abs() < 1e-6);
    }

    #[test]
    fn fixed_mode_clips_final_segment_but_tallies_full_stock() {
        // Run of 14 with fixed 12 ft boards: 12 + clipped 2, tally 24.
        let result = layout_boards(
            &section(14.0, 0.4),
            BoardDirection::Horizontal,
            BoardPattern::Standard,
            BoardLength::Fixed(12.0),
            &STOCK_LENGTHS,
        )
        .unwrap();

        assert_eq!(result.primitives.len(), 2);
        let sizes: Vec<f64> = result
            .primitives
            .iter()
            .map(|p| match p.kind {
                deck_types::PrimitiveKind::Box { size } => size[0],
                _ => panic!("boards are boxes"),
            })
            .collect();
        assert!((sizes[0] - 12.0).abs() < 1e-9);
        assert!((sizes[1] - 2.0).abs() < 1e-9);
        assert!((result.tally.board_feet - 24.0).abs() < 1e-9);
    }

    #[test]
    fn non_positive_span_yields_empty_result() {
        let result = layout_boards(
            &section(0.0, 12.0),
            BoardDirection::Horizontal,
            BoardPattern::Standard,
            BoardLength::Auto,
            &STOCK_LENGTHS,
        )
        .unwrap();
        assert!(result.primitives.is_empty());
        assert_eq!(result.tally.board_feet, 0.0);
    }

    #[test]
    fn diagonal_pattern_rotates_and_scales_in_place() {
        let standard = layout_boards(
            &section(12.0, 12.0),
            BoardDirection::Horizontal,
            BoardPattern::Standard,
            BoardLength::Auto,
            &STOCK_LENGTHS,
        )
        .unwrap();
        let diagonal = layout_boards(
            &section(12.0, 12.0),
            BoardDirection::Horizontal,
            BoardPattern::Diagonal,
            BoardLength::Auto,
            &STOCK_LENGTHS,
        )
        .unwrap();

        // Same segmentation, rotated and scaled in place.
        assert_eq!(standard.primitives.len(), diagonal.primitives.len());
        assert_eq!(standard.tally.board_feet, diagonal.tally.board_feet);
        for (s, d) in standard.primitives.iter().zip(&diagonal.primitives) {
            assert_eq!(s.position, d.position);
            assert!((d.rotation[1] - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
            if let (
                deck_types::PrimitiveKind::Box { size: ss },
                deck_types::PrimitiveKind::Box { size: ds },
            ) = (&s.kind, &d.kind)
            {
                assert!((ds[0] - ss[0] * std::f64::consts::SQRT_2).abs() < 1e-9);
                assert!((ds[2] - ss[2] * std::f64::consts::SQRT_2).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn vertical_direction_swaps_axes() {
        let result = layout_boards(
            &section(6.0, 12.0),
            BoardDirection::Vertical,
            BoardPattern::Standard,
            BoardLength::Auto,
            &STOCK_LENGTHS,
        )
        .unwrap();

        // Boards run along Z (12 ft), rows across X (6 ft).
        let effective = BOARD_WIDTH + BOARD_GAP;
        let rows = (6.0f64 / effective).ceil() as usize;
        assert_eq!(result.primitives.len(), rows);
        if let deck_types::PrimitiveKind::Box { size } = result.primitives[0].kind {
            assert!((size[2] - 12.0).abs() < 1e-9);
        }
    }

    #[test]
    fn fixed_non_positive_board_length_is_rejected() {
        // A zero-length board would never shorten the remaining run,
        // so it must error instead of looping.
        for len in [0.0, -3.0] {
            let err = layout_boards(
                &section(12.0, 12.0),
                BoardDirection::Horizontal,
                BoardPattern::Standard,
                BoardLength::Fixed(len),
                &STOCK_LENGTHS,
            );
            assert!(matches!(
                err,
                Err(LayoutError::NonPositiveDimension {
                    field: "boardLength",
                    ..
                })
            ));
        }
    }

    #[test]
    fn auto_mode_rejects_non_positive_stock_lengths() {
        let err = layout_boards(
            &section(12.0, 12.0),
            BoardDirection::Horizontal,
            BoardPattern::Standard,
            BoardLength::Auto,
            &[12.0, 0.0],
        );
        assert!(matches!(
            err,
            Err(LayoutError::NonPositiveDimension {
                field: "stockLength",
                ..
            })
        ));
    }

    #[test]
    fn empty_stock_list_is_an_error_in_auto_mode() {
        let err = layout_boards(
            &section(12.0, 12.0),
            BoardDirection::Horizontal,
            BoardPattern::Standard,
            BoardLength::Auto,
            &[],
        );
        assert!(matches!(err, Err(LayoutError::NoStockLengths)));
    }
}
