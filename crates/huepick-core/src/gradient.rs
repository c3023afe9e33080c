//! Pixel generation for the saturation/value square and the hue strip.
//!
//! Rendering goes through the [`PixelSink`] trait so the core never depends
//! on a particular texture or rendering backend.

use crate::color::{Hsv, Rgb, hsv_to_rgb};

/// Number of 60 degree sectors in the hue strip.
pub const HUE_SEGMENTS: usize = 6;

/// Destination for generated pixels.
///
/// Row 0 is the *bottom* row of the surface (value 0 on the SV square,
/// hue 0 on the hue strip). Sinks whose native origin is top-left flip rows
/// when storing.
pub trait PixelSink {
    /// Width in pixels.
    fn width(&self) -> usize;

    /// Height in pixels.
    fn height(&self) -> usize;

    /// Write one pixel. Coordinates outside the sink are ignored.
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb);

    /// Publish the pixels written since the last commit.
    fn commit(&mut self);
}

/// In-memory pixel sink.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    commits: usize,
}

impl PixelBuffer {
    /// Create a black buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
            commits: 0,
        }
    }

    /// Pixel at `(x, y)`, row 0 being the bottom row.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// All pixels, bottom row first.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// How many times the buffer has been committed.
    pub fn commit_count(&self) -> usize {
        self.commits
    }
}

impl PixelSink for PixelBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    fn commit(&mut self) {
        self.commits += 1;
    }
}

/// Fill `sink` with the saturation/value square for `hue`, then commit.
///
/// Saturation grows left to right and value grows bottom to top. This is
/// O(width * height); callers regenerate only when the hue changes.
pub fn render_sv_square<S: PixelSink + ?Sized>(sink: &mut S, hue: u16) {
    let (width, height) = (sink.width(), sink.height());
    log::debug!("Rendering SV square {}x{} for hue {}", width, height, hue);

    let base = Hsv::new(hue as i32, 1.0, 1.0);
    for y in 0..height {
        let value = fraction(y, height);
        for x in 0..width {
            let saturation = fraction(x, width);
            let color = hsv_to_rgb(base.with_saturation(saturation).with_value(value));
            sink.set_pixel(x, y, color);
        }
    }
    sink.commit();
}

/// Fill `sink` with the full hue circle at saturation = value = 1, then
/// commit.
///
/// The strip is split into six equal segments. Segment `i` (counted from
/// the top) runs from hue `360 - 60i` at its top edge to `300 - 60i` at its
/// bottom edge. Inside a 60 degree sector the pure colors are linear in hue,
/// so each segment is a straight RGB interpolation between its two ends.
pub fn render_hue_strip<S: PixelSink + ?Sized>(sink: &mut S) {
    let (width, height) = (sink.width(), sink.height());
    log::debug!("Rendering hue strip {}x{}", width, height);

    let ends: [(Rgb, Rgb); HUE_SEGMENTS] = std::array::from_fn(|i| {
        let top = 360 - 60 * i as i32;
        (
            hsv_to_rgb(Hsv::new(top, 1.0, 1.0)),
            hsv_to_rgb(Hsv::new(top - 60, 1.0, 1.0)),
        )
    });

    for y in 0..height {
        let from_top = (1.0 - fraction(y, height)) * HUE_SEGMENTS as f32;
        let segment = (from_top as usize).min(HUE_SEGMENTS - 1);
        let (top, bottom) = ends[segment];
        let color = top.lerp(bottom, from_top - segment as f32);
        for x in 0..width {
            sink.set_pixel(x, y, color);
        }
    }
    sink.commit();
}

/// `index / (len - 1)`, or 0 for single-pixel dimensions.
fn fraction(index: usize, len: usize) -> f32 {
    if len > 1 {
        index as f32 / (len - 1) as f32
    } else {
        0.0
    }
}
