//! Toolkit-independent picker model: rows, strip offset, selection, and the
//! press/move/release state machine that scrolls and snaps the strip.

use crate::config::{PickerConfig, PickerId};
use crate::constants;
use crate::error::PickerError;
use crate::math;
use crate::style::RowState;

/// Notification emitted when a drag settles on a different row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moved {
    pub id: PickerId,
    pub index: usize,
}

/// One selectable entry of the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    text: String,
    state: RowState,
}

impl Row {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> RowState {
        self.state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drag {
    Idle,
    Dragging {
        last_y: i32,
        target_y: i32,
        moved: bool,
    },
}

/// Selection and scroll state of a picker.
#[derive(Debug, Clone)]
pub struct PickerState {
    id: PickerId,
    item_height: i32,
    frame_width: i32,
    frame_height: i32,
    rows: Box<[Row]>,
    index: usize,
    strip_y: i32,
    y_min: i32,
    y_max: i32,
    drag: Drag,
}

impl PickerState {
    /// Build the strip with row 0 selected.
    pub fn new(config: &PickerConfig) -> Result<Self, PickerError> {
        config.validate()?;
        let (y_min, y_max) = config.scroll_bounds()?;

        let rows: Box<[Row]> = config
            .values
            .iter()
            .map(|text| Row {
                text: text.clone(),
                state: RowState::Value,
            })
            .collect();

        let mut state = Self {
            id: config.id,
            item_height: config.item_height,
            frame_width: config.frame.width,
            frame_height: config.frame.height,
            rows,
            index: 0,
            strip_y: y_max,
            y_min,
            y_max,
            drag: Drag::Idle,
        };
        state.set_row_state(0, RowState::Target);
        Ok(state)
    }

    pub fn id(&self) -> PickerId {
        self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Text of the selected row, `None` for a picker without values.
    pub fn current_value(&self) -> Option<&str> {
        self.rows.get(self.index).map(Row::text)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Height of one row band, in pixels.
    pub fn item_height(&self) -> i32 {
        self.item_height
    }

    /// Current vertical offset of the strip inside the frame.
    pub fn strip_y(&self) -> i32 {
        self.strip_y
    }

    /// Strip offset bounds `(y_min, y_max)` a drag settles within.
    pub fn scroll_bounds(&self) -> (i32, i32) {
        (self.y_min, self.y_max)
    }

    /// Top and bottom y of the target lines.
    pub fn target_lines(&self) -> (i32, i32) {
        let top = math::target_top(self.frame_height, self.item_height);
        // Exactly one row apart, so the band matches a snapped row for odd heights too
        (top, top + self.item_height)
    }

    /// Frame `(width, height)` the picker paints into.
    pub fn frame_size(&self) -> (i32, i32) {
        (self.frame_width, self.frame_height)
    }

    /// Whether a press is being tracked and has not been released yet.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, Drag::Dragging { .. })
    }

    /// Label rectangle `(x, y, width, height)` of row `index`, in frame
    /// coordinates at the current strip offset.
    pub fn row_rect(&self, index: usize) -> (i32, i32, i32, i32) {
        let inset = constants::LABEL_INSET;
        (
            inset,
            self.strip_y
                .saturating_add((index as i32).saturating_mul(self.item_height))
                .saturating_add(inset),
            self.frame_width - inset * 2,
            self.item_height - inset * 2,
        )
    }

    /// Select row `index`, clamped to the valid range, without notifying.
    ///
    /// Abandons a drag in progress.
    pub fn set_index(&mut self, index: usize) {
        if index == self.index || self.rows.is_empty() {
            return;
        }

        let last = self.rows.len() - 1;
        if index > last {
            log::warn!("picker {}: index {index} out of range, clamping to {last}", self.id);
        }

        self.drag = Drag::Idle;
        self.set_row_state(self.index, RowState::Value);
        self.index = index.min(last);
        self.strip_y = math::offset_for_index(self.y_max, self.item_height, self.index);
        self.set_row_state(self.index, RowState::Target);
    }

    /// Pointer pressed at `y`: start a drag and drop the highlight.
    pub fn press(&mut self, y: i32) {
        if self.rows.is_empty() {
            return;
        }
        log::trace!("picker {}: press at {y}", self.id);
        self.drag = Drag::Dragging {
            last_y: y,
            target_y: self.strip_y,
            moved: false,
        };
        self.set_row_state(self.index, RowState::Value);
    }

    /// Pointer moved to `y`. Returns `true` when the strip moved.
    pub fn drag_to(&mut self, y: i32) -> bool {
        let Drag::Dragging {
            last_y,
            target_y,
            moved,
        } = &mut self.drag
        else {
            return false;
        };

        let delta = y.saturating_sub(*last_y);
        if delta.unsigned_abs() <= constants::MIN_MOVE_AMOUNT.unsigned_abs() {
            return false;
        }

        *target_y = target_y.saturating_add(delta);
        *last_y = y;
        *moved = true;
        self.strip_y = *target_y;
        log::trace!("picker {}: strip at {}", self.id, self.strip_y);
        true
    }

    /// Pointer released: settle the strip and report a selection change.
    pub fn release(&mut self) -> Option<Moved> {
        let Drag::Dragging { moved, .. } = std::mem::replace(&mut self.drag, Drag::Idle) else {
            return None;
        };

        if !moved {
            log::trace!("picker {}: tap, keeping row {}", self.id, self.index);
            self.set_row_state(self.index, RowState::Target);
            return None;
        }

        self.strip_y = math::settle_offset(self.strip_y, self.y_min, self.y_max, self.item_height);
        let new_index = math::index_for_offset(self.strip_y, self.y_max, self.item_height)
            .min(self.rows.len() - 1);

        self.set_row_state(new_index, RowState::Target);
        if new_index == self.index {
            return None;
        }

        log::debug!("picker {}: moved to row {new_index}", self.id);
        self.index = new_index;
        Some(Moved {
            id: self.id,
            index: new_index,
        })
    }

    fn set_row_state(&mut self, index: usize, state: RowState) {
        if let Some(row) = self.rows.get_mut(index) {
            row.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Frame;

    fn picker(values: &[&str]) -> PickerState {
        let config = PickerConfig::new(3, 40, values.iter().copied()).frame(Frame::sized(100, 200));
        PickerState::new(&config).unwrap()
    }

    fn selected_rows(state: &PickerState) -> Vec<usize> {
        state
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.state() == RowState::Target)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn starts_on_first_row() {
        let state = picker(&["a", "b", "c"]);
        assert_eq!(state.index(), 0);
        assert_eq!(state.current_value(), Some("a"));
        assert_eq!(state.strip_y(), 80);
        assert_eq!(selected_rows(&state), vec![0]);
    }

    #[test]
    fn target_lines_bound_one_row() {
        let state = picker(&["a", "b"]);
        assert_eq!(state.target_lines(), (80, 120));
    }

    #[test]
    fn row_rect_is_inset() {
        let state = picker(&["a", "b"]);
        assert_eq!(state.row_rect(1), (2, 122, 96, 36));
    }

    #[test]
    fn empty_picker_ignores_interaction() {
        let mut state = picker(&[]);
        assert!(state.is_empty());
        assert_eq!(state.current_value(), None);
        state.press(10);
        assert!(!state.is_dragging());
        assert!(!state.drag_to(100));
        assert_eq!(state.release(), None);
        state.set_index(3);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn press_clears_highlight_until_release() {
        let mut state = picker(&["a", "b", "c"]);
        state.press(100);
        assert!(selected_rows(&state).is_empty());
        assert_eq!(state.release(), None);
        assert_eq!(selected_rows(&state), vec![0]);
    }

    #[test]
    fn small_steps_do_not_accumulate_past_last_handled_y() {
        let mut state = picker(&["a", "b", "c"]);
        state.press(100);
        assert!(!state.drag_to(98));
        assert!(!state.drag_to(99));
        // 3 px from the press point crosses the threshold
        assert!(state.drag_to(97));
        assert_eq!(state.strip_y(), 77);
    }

    #[test]
    fn drag_overscrolls_until_release() {
        let mut state = picker(&["a", "b", "c"]);
        state.press(100);
        assert!(state.drag_to(300));
        assert_eq!(state.strip_y(), 280);
        assert_eq!(state.release(), None);
        assert_eq!(state.strip_y(), 80);
        assert_eq!(selected_rows(&state), vec![0]);
    }

    #[test]
    fn set_index_abandons_drag() {
        let mut state = picker(&["a", "b", "c"]);
        state.press(100);
        state.drag_to(50);
        state.set_index(2);
        assert!(!state.is_dragging());
        assert_eq!(state.release(), None);
        assert_eq!(state.index(), 2);
        assert_eq!(selected_rows(&state), vec![2]);
    }

    #[test]
    fn extreme_pointer_travel_saturates() {
        let mut state = picker(&["a", "b", "c"]);
        state.press(i32::MIN);
        assert!(state.drag_to(i32::MAX));
        assert_eq!(state.strip_y(), i32::MAX);
        assert_eq!(state.row_rect(2).1, i32::MAX);
        assert_eq!(state.release(), None);
        assert_eq!(state.strip_y(), 80);

        state.press(0);
        assert!(state.drag_to(i32::MIN));
        assert_eq!(state.release(), Some(Moved { id: 3, index: 2 }));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = picker(&["a", "b"]);
        assert_eq!(state.release(), None);
        assert_eq!(selected_rows(&state), vec![0]);
    }
}
