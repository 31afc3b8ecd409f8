//! Strip geometry: target band placement, scroll bounds, and snapping.
//! All values are whole pixels in the picker's local coordinate space.

/// Top edge of the target band for a frame `frame_height` tall.
pub(crate) fn target_top(frame_height: i32, item_height: i32) -> i32 {
    frame_height / 2 - item_height / 2
}

/// Strip offset bounds `(y_min, y_max)` for `count` rows.
///
/// `y_max` puts the first row in the target band, `y_min` the last one.
/// `None` when the strip is too tall to address in `i32` pixels.
pub(crate) fn scroll_bounds(frame_height: i32, item_height: i32, count: usize) -> Option<(i32, i32)> {
    let y_max = target_top(frame_height, item_height);
    let span = i32::try_from(count.saturating_sub(1))
        .ok()?
        .checked_mul(item_height)?;
    // Snapping adds up to one more row on top of the span
    span.checked_add(item_height)?;
    let y_min = y_max.checked_sub(span)?;
    Some((y_min, y_max))
}

/// Strip offset that places row `index` in the target band.
pub(crate) fn offset_for_index(y_max: i32, item_height: i32, index: usize) -> i32 {
    y_max - index as i32 * item_height
}

/// Row sitting in the target band when the strip rests at `y`.
pub(crate) fn index_for_offset(y: i32, y_max: i32, item_height: i32) -> usize {
    ((y_max - y) / item_height).max(0) as usize
}

/// Clamp a released strip offset to the bounds, snapping in-bounds offsets
/// to the nearest row (halves round toward `y_max`).
pub(crate) fn settle_offset(y: i32, y_min: i32, y_max: i32, item_height: i32) -> i32 {
    if y < y_min {
        y_min
    } else if y > y_max {
        y_max
    } else {
        (y - y_min + item_height / 2) / item_height * item_height + y_min
    }
}
