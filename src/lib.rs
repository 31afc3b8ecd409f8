//! # floem-wheel
//!
//! A scrolling value-wheel picker widget for [Floem](https://github.com/lapce/floem).
//!
//! Shows a fixed list of text values on a vertical strip. Dragging scrolls the
//! strip; on release it snaps to the nearest row, which becomes the selection
//! and is highlighted between two target lines.
//!
//! The selection logic lives in [`PickerState`], which has no toolkit
//! dependency and can drive other front ends; [`value_picker`] wraps it in a
//! Floem view.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_wheel::{value_picker, PickerConfig};
//!
//! let index = RwSignal::new(0_usize);
//! let config = PickerConfig::new(1, 40, ["Small", "Medium", "Large"]);
//! let picker = value_picker(config, index).unwrap();
//! // Use `picker` in your Floem view tree; `index` follows the selection.
//! ```

mod config;
mod constants;
mod error;
mod image;
mod math;
mod picker;
mod state;
mod style;

pub use config::{Frame, PickerConfig, PickerId};
pub use error::PickerError;
pub use image::PickerImage;
pub use picker::{value_picker, ValuePicker};
pub use state::{Moved, PickerState, Row};
pub use style::{LineStyle, PickerStyles, RowState, RowStyle};
