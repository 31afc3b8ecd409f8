//! Visual styles for the picker's background, rows, and target lines.

use floem::peniko::Color;
use floem::text::Weight;

use crate::constants;

/// Visual state a row can be painted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// Ordinary row.
    Value,
    /// Row sitting in the target band as the current selection.
    Target,
}

/// Text appearance of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowStyle {
    pub font_size: f32,
    pub color: Color,
    pub weight: Weight,
    /// Fill behind the label, inside its inset.
    pub background: Option<Color>,
}

/// Appearance of the two horizontal lines bounding the target band.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
}

/// The full style set of a picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerStyles {
    /// Frame fill, used when no background image is configured.
    pub background: Color,
    pub value: RowStyle,
    pub target_line: LineStyle,
    pub target_value: RowStyle,
}

impl PickerStyles {
    /// Style to paint a row in `state` with.
    pub fn row(&self, state: RowState) -> &RowStyle {
        match state {
            RowState::Value => &self.value,
            RowState::Target => &self.target_value,
        }
    }
}

impl Default for PickerStyles {
    fn default() -> Self {
        Self {
            background: constants::BACKGROUND,
            value: RowStyle {
                font_size: constants::VALUE_FONT,
                color: constants::VALUE_COLOR,
                weight: Weight::NORMAL,
                background: None,
            },
            target_line: LineStyle {
                color: constants::TARGET_LINE_COLOR,
                width: constants::TARGET_LINE_WIDTH,
            },
            target_value: RowStyle {
                font_size: constants::TARGET_VALUE_FONT,
                color: constants::TARGET_VALUE_COLOR,
                weight: Weight::SEMIBOLD,
                background: None,
            },
        }
    }
}
