//! Dimensional lumber constants, in feet.
//!
//! These mirror common US decking stock: 5/4" deck boards on 2x8 joists
//! at 16" centers, with 12/16/20 ft stock lengths.

/// Deck board thickness.
pub const BOARD_THICKNESS: f64 = 1.0 / 12.0;
/// Deck board face width (5.5 inches).
pub const BOARD_WIDTH: f64 = 5.5 / 12.0;
/// Drainage gap left between adjacent board rows.
pub const BOARD_GAP: f64 = 0.05;
/// Manufactured board lengths available for segmentation, ascending.
pub const STOCK_LENGTHS: [f64; 3] = [12.0, 16.0, 20.0];

/// Joist centers (16 inches).
pub const JOIST_SPACING: f64 = 16.0 / 12.0;
/// Joist depth (2x8 nominal, 7.25 inches actual).
pub const JOIST_DEPTH: f64 = 7.25 / 12.0;
/// Joist thickness (1.5 inches actual).
pub const JOIST_THICKNESS: f64 = 1.5 / 12.0;

/// Support post grid spacing.
pub const POST_GRID_SPACING: f64 = 8.0;
/// Support post radius.
pub const POST_RADIUS: f64 = 0.25;

/// Railing post spacing along each side.
pub const RAIL_POST_SPACING: f64 = 6.0;
/// Railing post height above the deck surface.
pub const RAIL_POST_HEIGHT: f64 = 3.0;
/// Railing post cross-section.
pub const RAIL_POST_SIDE: f64 = 4.0 / 12.0;
/// Upper rail tier height above the deck surface.
pub const RAIL_UPPER_OFFSET: f64 = 2.5;
/// Lower rail tier height above the deck surface.
pub const RAIL_LOWER_OFFSET: f64 = 1.0;
/// Rail radius for the standard (wood) railing style.
pub const RAIL_RADIUS_STANDARD: f64 = 0.09;
/// Rail radius for the cable railing style.
pub const RAIL_RADIUS_CABLE: f64 = 0.02;

/// Horizontal run per stair step.
pub const STEP_DEPTH: f64 = 1.0;
/// Stringer cross-section width.
pub const STRINGER_WIDTH: f64 = 1.5 / 12.0;
/// Stringer cross-section depth.
pub const STRINGER_DEPTH: f64 = 0.3;
/// Tube radius used to sweep spiral stair treads.
pub const SPIRAL_TREAD_RADIUS: f64 = 0.25;
