//! The picker view.
//!
//! Paints a [`PickerState`] inside its frame (background, rows, target
//! lines, overlay) and feeds Floem pointer events into its drag state
//! machine. The selected index is mirrored to an `RwSignal<usize>`: external
//! writes select a row, and settled drags write the new row back.

use floem::kurbo::{Point, Rect};
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::text::{Attrs, AttrsList, TextLayout};
use floem::views::Decorators;
use floem::{
    context::{EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::image::PickerImage;
use crate::state::{Moved, PickerState};
use crate::style::{PickerStyles, RowState, RowStyle};

enum PickerUpdate {
    Index(usize),
}

pub struct ValuePicker {
    id: ViewId,
    state: PickerState,
    styles: PickerStyles,
    background_image: Option<PickerImage>,
    overlay_image: Option<PickerImage>,
    on_change: Option<Box<dyn Fn(usize)>>,
    on_moved: Option<Box<dyn Fn(Moved)>>,
    /// Row text laid out for the state it was last painted in.
    text_layouts: Vec<Option<(RowState, TextLayout)>>,
}

/// Creates a value picker from `config`, bound to `index`.
///
/// The picker starts on `index` (clamped to the available rows). Writing the
/// signal selects a row without notifying; a drag that settles on a new row
/// writes the signal and calls the [`on_moved`](ValuePicker::on_moved)
/// callback.
pub fn value_picker(config: PickerConfig, index: RwSignal<usize>) -> Result<ValuePicker, PickerError> {
    let id = ViewId::new();
    let mut state = PickerState::new(&config)?;
    let requested = index.get_untracked();
    state.set_index(requested);
    if state.index() != requested {
        index.set(state.index());
    }

    create_effect(move |_| {
        let i = index.get();
        id.update_state(PickerUpdate::Index(i));
    });

    let frame = config.frame;
    let rows = state.len();
    Ok(ValuePicker {
        id,
        state,
        styles: config.styles,
        background_image: config.background_image,
        overlay_image: config.overlay_image,
        on_change: Some(Box::new(move |i| {
            index.set(i);
        })),
        on_moved: None,
        text_layouts: (0..rows).map(|_| None).collect(),
    }
    .style(move |s| {
        let s = s
            .width(frame.width as f64)
            .height(frame.height as f64)
            .cursor(floem::style::CursorStyle::Pointer);
        if frame.has_origin() {
            s.absolute()
                .inset_left(frame.x as f64)
                .inset_top(frame.y as f64)
        } else {
            s
        }
    }))
}

impl ValuePicker {
    /// Called with `(id, index)` whenever a drag settles on a different row.
    pub fn on_moved(mut self, on_moved: impl Fn(Moved) + 'static) -> Self {
        self.on_moved = Some(Box::new(on_moved));
        self
    }

    pub fn index(&self) -> usize {
        self.state.index()
    }

    pub fn current_value(&self) -> Option<&str> {
        self.state.current_value()
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// Select `requested`, writing the clamped row back when it differs.
    fn select(&mut self, requested: usize) {
        self.state.set_index(requested);
        if self.state.index() != requested {
            if let Some(cb) = &self.on_change {
                cb(self.state.index());
            }
        }
        self.id.request_paint();
    }

    fn pointer_down(&mut self, y: f64) -> EventPropagation {
        if self.state.is_empty() {
            return EventPropagation::Continue;
        }
        self.state.press(y.round() as i32);
        self.id.request_paint();
        EventPropagation::Stop
    }

    fn pointer_move(&mut self, y: f64) -> EventPropagation {
        if !self.state.is_dragging() {
            return EventPropagation::Continue;
        }
        if self.state.drag_to(y.round() as i32) {
            self.id.request_paint();
        }
        EventPropagation::Stop
    }

    /// Pointer released or capture lost: settle any drag in progress.
    fn pointer_up(&mut self) -> EventPropagation {
        if self.state.is_dragging() {
            self.settle();
        }
        EventPropagation::Continue
    }

    fn settle(&mut self) {
        if let Some(moved) = self.state.release() {
            if let Some(cb) = &self.on_change {
                cb(moved.index);
            }
            if let Some(cb) = &self.on_moved {
                cb(moved);
            }
        }
        self.id.request_paint();
    }

    fn ensure_text_layouts(&mut self) {
        for (row, slot) in self.state.rows().iter().zip(self.text_layouts.iter_mut()) {
            let stale = !matches!(slot, Some((state, _)) if *state == row.state());
            if stale {
                let layout = row_layout(row.text(), self.styles.row(row.state()));
                *slot = Some((row.state(), layout));
            }
        }
    }

    fn paint_rows(&mut self, cx: &mut PaintCx) {
        self.ensure_text_layouts();
        let (_, frame_height) = self.state.frame_size();

        for (i, (row, slot)) in self.state.rows().iter().zip(&self.text_layouts).enumerate() {
            let (x, y, w, h) = self.state.row_rect(i);
            if y.saturating_add(h) < 0 || y > frame_height {
                continue;
            }
            let rect = Rect::new(x as f64, y as f64, (x + w) as f64, (y + h) as f64);

            if let Some(fill) = self.styles.row(row.state()).background {
                cx.fill(&rect, fill, 0.0);
            }
            if let Some((_, layout)) = slot {
                let size = layout.size();
                let origin = Point::new(
                    rect.x0 + (rect.width() - size.width) / 2.0,
                    rect.y0 + (rect.height() - size.height) / 2.0,
                );
                cx.draw_text(layout, origin);
            }
        }
    }

    fn paint_target_lines(&self, cx: &mut PaintCx) {
        let (width, _) = self.state.frame_size();
        let (top, bottom) = self.state.target_lines();
        let line = &self.styles.target_line;
        for y in [top, bottom] {
            let rect = Rect::new(0.0, y as f64, width as f64, y as f64 + line.width);
            cx.fill(&rect, line.color, 0.0);
        }
    }
}

fn row_layout(text: &str, style: &RowStyle) -> TextLayout {
    let attrs = Attrs::new()
        .color(style.color)
        .font_size(style.font_size)
        .weight(style.weight);
    let mut layout = TextLayout::new();
    layout.set_text(text, AttrsList::new(attrs));
    layout
}

fn draw_image(cx: &mut PaintCx, image: &PickerImage, rect: Rect) {
    cx.draw_img(
        floem_renderer::Img {
            img: image.img.clone(),
            hash: &image.hash,
        },
        rect,
    );
}

impl View for ValuePicker {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<PickerUpdate>() {
            match *update {
                PickerUpdate::Index(i) => self.select(i),
            }
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let propagation = self.pointer_down(e.pos.y);
                if matches!(propagation, EventPropagation::Stop) {
                    cx.update_active(self.id());
                }
                propagation
            }
            Event::PointerMove(e) => self.pointer_move(e.pos.y),
            Event::PointerUp(_) | Event::FocusLost => self.pointer_up(),
            _ => EventPropagation::Continue,
        }
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let (w, h) = self.state.frame_size();
        let frame = Rect::new(0.0, 0.0, w as f64, h as f64);

        cx.save();
        cx.clip(&frame);

        match &self.background_image {
            Some(image) => draw_image(cx, image, frame),
            None => cx.fill(&frame, self.styles.background, 0.0),
        }
        self.paint_rows(cx);
        self.paint_target_lines(cx);
        // Overlay is paint-only; pointer events still reach the strip
        if let Some(image) = &self.overlay_image {
            draw_image(cx, image, frame);
        }

        cx.restore();
    }
}
