//! Pixel sink backed by an egui texture.

use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use huepick_core::{PixelSink, Rgb};

/// Collects generated pixels and uploads them to egui on demand.
///
/// Pixels are stored top row first, the way egui expects them. A commit only
/// marks the texture stale; the upload happens on the next
/// [`texture_id`](Self::texture_id) call, when a [`Context`] is at hand.
pub struct TextureSink {
    name: String,
    width: usize,
    height: usize,
    rgb: Vec<u8>,
    dirty: bool,
    handle: Option<TextureHandle>,
}

impl TextureSink {
    pub fn new(name: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            rgb: vec![0; width * height * 3],
            dirty: false,
            handle: None,
        }
    }

    /// Whether committed pixels are waiting to be uploaded.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Snapshot of the current pixels.
    pub fn color_image(&self) -> ColorImage {
        ColorImage::from_rgb([self.width, self.height], &self.rgb)
    }

    /// Texture holding the last committed pixels, uploading them first if
    /// they changed.
    pub fn texture_id(&mut self, ctx: &Context) -> TextureId {
        let handle = match self.handle.take() {
            Some(mut handle) => {
                if self.dirty {
                    handle.set(self.color_image(), TextureOptions::LINEAR);
                }
                handle
            }
            None => ctx.load_texture(self.name.clone(), self.color_image(), TextureOptions::LINEAR),
        };
        if self.dirty {
            log::debug!("Uploaded texture {}", self.name);
        }
        self.dirty = false;

        let id = handle.id();
        self.handle = Some(handle);
        id
    }
}

impl PixelSink for TextureSink {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let row = self.height - 1 - y;
        let offset = (row * self.width + x) * 3;
        self.rgb[offset..offset + 3].copy_from_slice(&[color.r, color.g, color.b]);
    }

    fn commit(&mut self) {
        self.dirty = true;
    }
}
