//! Sizing, color, and interaction constants for the picker.

use floem::peniko::Color;

/// Inset between a row's band and its label, on every side
pub const LABEL_INSET: i32 = 2;

/// Pointer travel (px) a move must exceed before the strip follows it
pub const MIN_MOVE_AMOUNT: i32 = 2;

/// Target line thickness
pub const TARGET_LINE_WIDTH: f64 = 1.0;

/// Default row font size
pub const VALUE_FONT: f32 = 14.0;

/// Default selected-row font size
pub const TARGET_VALUE_FONT: f32 = 16.0;

/// Default frame background
pub const BACKGROUND: Color = Color::rgb8(242, 242, 242);

/// Default row text color
pub const VALUE_COLOR: Color = Color::rgb8(140, 140, 140);

/// Default selected-row text color
pub const TARGET_VALUE_COLOR: Color = Color::rgb8(20, 20, 20);

/// Default target line color
pub const TARGET_LINE_COLOR: Color = Color::rgb8(180, 180, 180);

/// Default frame width
pub const DEFAULT_WIDTH: i32 = 160;

/// Rows visible in a default-sized frame
pub const DEFAULT_VISIBLE_ROWS: i32 = 5;
