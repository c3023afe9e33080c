//! Color representations and the conversions between them.
//!
//! Conversions are explicit named functions ([`rgb_to_hsv`], [`hsv_to_rgb`],
//! [`rgb_to_hex`], [`hex_to_rgb`]); no type converts implicitly into another
//! color space.

mod hex;

pub use hex::{HexError, hex_to_rgb, rgb_to_hex};

use peniko::Color;
use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from normalized channels, clamping each into [0, 1].
    pub fn from_normalized(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: quantize(r),
            g: quantize(g),
            b: quantize(b),
        }
    }

    /// Channels as floats in [0, 1].
    pub fn to_normalized(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Lowercase six digit hex encoding.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Linear interpolation between two colors, `t` in [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let [r0, g0, b0] = self.to_normalized();
        let [r1, g1, b1] = other.to_normalized();
        Rgb::from_normalized(
            r0 + (r1 - r0) * t,
            g0 + (g1 - g0) * t,
            b0 + (b1 - b0) * t,
        )
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_rgba8(rgb.r, rgb.g, rgb.b, 255)
    }
}

impl From<Color> for Rgb {
    /// Alpha is dropped; picked colors are always opaque.
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b)
    }
}

/// Hue/saturation/value color.
///
/// Hue is whole degrees in [0, 360); saturation and value are in [0, 1].
/// Every constructor and setter normalizes its input, so the invariants hold
/// for any value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    hue: u16,
    saturation: f32,
    value: f32,
}

impl Hsv {
    pub fn new(hue: i32, saturation: f32, value: f32) -> Self {
        let mut hsv = Self::default();
        hsv.set_hue(hue);
        hsv.set_saturation(saturation);
        hsv.set_value(value);
        hsv
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the hue, reduced modulo 360 (370 becomes 10, -10 becomes 350).
    pub fn set_hue(&mut self, hue: i32) {
        self.hue = hue.rem_euclid(360) as u16;
    }

    pub fn set_saturation(&mut self, saturation: f32) {
        self.saturation = clamp_unit(saturation);
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = clamp_unit(value);
    }

    pub fn with_hue(mut self, hue: i32) -> Self {
        self.set_hue(hue);
        self
    }

    pub fn with_saturation(mut self, saturation: f32) -> Self {
        self.set_saturation(saturation);
        self
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.set_value(value);
        self
    }
}

/// Convert RGB to HSV.
///
/// The sector index is reduced with `rem_euclid(6)` in every branch, so a
/// red-dominant color with blue above green lands in (300, 360) instead of
/// producing a negative intermediate hue.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let [r, g, b] = rgb.to_normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let hue_index = if chroma == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    let saturation = if max == 0.0 { 0.0 } else { chroma / max };
    Hsv::new((hue_index * 60.0).round() as i32, saturation, max)
}

/// Convert HSV to RGB using the six-sector algorithm.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let chroma = hsv.value * hsv.saturation;
    let hue_index = hsv.hue as f32 / 60.0;
    let x = chroma * (1.0 - (hue_index % 2.0 - 1.0).abs());

    let (r, g, b) = match hue_index as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = hsv.value - chroma;
    Rgb::from_normalized(r + m, g + m, b + m)
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

fn quantize(v: f32) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}
