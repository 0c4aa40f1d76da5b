//! Sizing, color, and styling constants for the selectors.

/// Thickness of one bar under the primary area
pub const BAR_THICKNESS: i32 = 8;

/// Inset between the widget bounds and the pickable content
pub const BORDER: i32 = 3;

/// Indicator ring radius on the primary area
pub const MARKER_RADIUS: f64 = 4.0;

/// Half-height of the line indicator on bars
pub const LINE_MARKER_HALF: f64 = 4.0;

/// Extra pick radius around the wheel edge
pub const WHEEL_PICK_TOLERANCE: f64 = 2.0;

/// Space reserved above and below the wheel for harmony swatches
pub const WHEEL_VERTICAL_MARGIN: i32 = 12;

/// Height of a harmony swatch
pub const SWATCH_HEIGHT: i32 = 8;

/// Minimum harmony swatch width
pub const SWATCH_MIN_WIDTH: i32 = 8;

/// Gap between picker elements
pub const GAP: f32 = 4.0;

/// Options strip icon font size
pub const ICON_FONT: f32 = 13.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Checkerboard cell size (for alpha backgrounds)
#[cfg(feature = "alpha")]
pub const CHECKER_CELL: f64 = 4.0;
