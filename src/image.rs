//! RGBA8 images for the picker's background and overlay.

use std::sync::Arc;

use floem::peniko::{self, Blob, Color};

use crate::error::PickerError;

/// An RGBA8 raster, scaled to the picker frame when painted.
#[derive(Clone)]
pub struct PickerImage {
    pub(crate) img: peniko::Image,
    pub(crate) hash: Vec<u8>,
}

impl std::fmt::Debug for PickerImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerImage")
            .field("width", &self.img.width)
            .field("height", &self.img.height)
            .finish()
    }
}

impl PickerImage {
    /// Wrap a tightly packed RGBA8 buffer of `width * height` pixels.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, PickerError> {
        if width == 0 || height == 0 {
            return Err(PickerError::ImageSize { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(PickerError::ImageBuffer {
                expected,
                actual: pixels.len(),
            });
        }

        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, width, height);
        Ok(Self {
            hash: blob.id().to_le_bytes().to_vec(),
            img,
        })
    }

    /// An overlay that fades `color` in toward the top and bottom edges and
    /// is fully transparent across the middle third.
    pub fn edge_fade(width: u32, height: u32, color: Color) -> Result<Self, PickerError> {
        Self::from_rgba8(width, height, rasterize_edge_fade(width, height, color))
    }

    pub fn width(&self) -> u32 {
        self.img.width
    }

    pub fn height(&self) -> u32 {
        self.img.height
    }
}

fn rasterize_edge_fade(width: u32, height: u32, color: Color) -> Vec<u8> {
    let mut buf = vec![0u8; width as usize * height as usize * 4];
    let span = (height.saturating_sub(1)).max(1) as f64;
    for py in 0..height {
        // 0 at the center line, 1 at either edge
        let t = ((py as f64 / span) * 2.0 - 1.0).abs();
        let fade = ((t - 1.0 / 3.0) * 1.5).clamp(0.0, 1.0);
        let alpha = (fade * color.a as f64 + 0.5) as u8;
        for px in 0..width {
            let offset = (py as usize * width as usize + px as usize) * 4;
            buf[offset] = color.r;
            buf[offset + 1] = color.g;
            buf[offset + 2] = color.b;
            buf[offset + 3] = alpha;
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        let err = PickerImage::from_rgba8(2, 2, vec![0; 12]).unwrap_err();
        assert_eq!(
            err,
            PickerError::ImageBuffer {
                expected: 16,
                actual: 12
            }
        );
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(
            PickerImage::from_rgba8(0, 4, Vec::new()),
            Err(PickerError::ImageSize { .. })
        ));
    }

    #[test]
    fn edge_fade_is_clear_in_the_middle() {
        let buf = rasterize_edge_fade(1, 9, Color::rgb8(255, 255, 255));
        let alpha = |row: usize| buf[row * 4 + 3];
        assert_eq!(alpha(0), 255);
        assert_eq!(alpha(8), 255);
        assert_eq!(alpha(4), 0);
        assert!(alpha(1) > alpha(2));
    }
}
