//! Picker construction parameters.

use crate::constants;
use crate::error::PickerError;
use crate::image::PickerImage;
use crate::math;
use crate::style::PickerStyles;

/// Identifier reported back in every [`Moved`](crate::Moved) notification.
pub type PickerId = u32;

/// Frame rectangle of the picker, in whole pixels.
///
/// A non-zero origin positions the picker absolutely inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A frame at the origin.
    pub fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub(crate) fn has_origin(&self) -> bool {
        self.x != 0 || self.y != 0
    }
}

/// Everything needed to build a picker.
///
/// ```rust
/// use floem_wheel::{Frame, PickerConfig};
///
/// let config = PickerConfig::new(7, 40, ["S", "M", "L", "XL"]).frame(Frame::sized(120, 200));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PickerConfig {
    pub(crate) id: PickerId,
    pub(crate) item_height: i32,
    pub(crate) values: Vec<String>,
    pub(crate) frame: Frame,
    pub(crate) styles: PickerStyles,
    pub(crate) background_image: Option<PickerImage>,
    pub(crate) overlay_image: Option<PickerImage>,
}

impl PickerConfig {
    /// Create a config with a default frame five rows tall.
    pub fn new<I, S>(id: PickerId, item_height: i32, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            item_height,
            values: values.into_iter().map(Into::into).collect(),
            frame: Frame::sized(
                constants::DEFAULT_WIDTH,
                item_height.saturating_mul(constants::DEFAULT_VISIBLE_ROWS),
            ),
            styles: PickerStyles::default(),
            background_image: None,
            overlay_image: None,
        }
    }

    pub fn frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    pub fn styles(mut self, styles: PickerStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Paint `image` scaled over the frame instead of the background color.
    pub fn background_image(mut self, image: PickerImage) -> Self {
        self.background_image = Some(image);
        self
    }

    /// Paint `image` scaled over the frame above everything else.
    pub fn overlay_image(mut self, image: PickerImage) -> Self {
        self.overlay_image = Some(image);
        self
    }

    pub fn id(&self) -> PickerId {
        self.id
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        if self.item_height <= 0 {
            return Err(PickerError::ItemHeight(self.item_height));
        }
        if self.frame.width <= 0 || self.frame.height <= 0 {
            return Err(PickerError::FrameSize {
                width: self.frame.width,
                height: self.frame.height,
            });
        }
        self.scroll_bounds()?;
        Ok(())
    }

    /// Strip offset bounds `(y_min, y_max)` for this frame and row count.
    pub(crate) fn scroll_bounds(&self) -> Result<(i32, i32), PickerError> {
        math::scroll_bounds(self.frame.height, self.item_height, self.values.len()).ok_or(
            PickerError::StripTooTall {
                rows: self.values.len(),
                item_height: self.item_height,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_shows_five_rows() {
        let config = PickerConfig::new(1, 30, ["a", "b"]);
        assert_eq!(config.frame, Frame::sized(constants::DEFAULT_WIDTH, 150));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_item_height() {
        let config = PickerConfig::new(1, 0, ["a"]);
        assert_eq!(config.validate(), Err(PickerError::ItemHeight(0)));
    }

    #[test]
    fn rejects_negative_frame() {
        let config = PickerConfig::new(1, 40, ["a"]).frame(Frame::sized(-10, 200));
        assert_eq!(
            config.validate(),
            Err(PickerError::FrameSize {
                width: -10,
                height: 200
            })
        );
    }

    #[test]
    fn rejects_strip_taller_than_scroll_range() {
        let values = (0..60_000).map(|i| i.to_string());
        let config = PickerConfig::new(1, 40_000, values).frame(Frame::sized(100, 200));
        assert_eq!(
            config.validate(),
            Err(PickerError::StripTooTall {
                rows: 60_000,
                item_height: 40_000
            })
        );
    }
}
