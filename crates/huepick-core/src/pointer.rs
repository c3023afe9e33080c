//! Mapping between pointer positions on the picker surfaces and color
//! coordinates.
//!
//! Both surfaces use the widget frame: the origin is the top-left corner,
//! x grows to the right and y grows *upward*, so every point inside a
//! surface has `y` in `[-height, 0]`. Hosts with a y-down frame convert
//! with [`SurfaceFrame::from_top_left`].
//!
//! Out-of-bounds positions saturate at the nearest edge instead of failing,
//! since dragging past the widget is routine.

use kurbo::{Point, Size};

/// Conversions between host coordinates and the widget frame.
pub struct SurfaceFrame;

impl SurfaceFrame {
    /// Convert a point measured from the top-left corner with y pointing
    /// down (egui, most windowing systems) into the widget frame.
    pub fn from_top_left(point: Point) -> Point {
        Point::new(point.x, -point.y)
    }

    /// Inverse of [`SurfaceFrame::from_top_left`].
    pub fn to_top_left(point: Point) -> Point {
        Point::new(point.x, -point.y)
    }
}

/// The saturation/value square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvSurface {
    size: Size,
}

impl SvSurface {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Map a local point to `(saturation, value)`, both clamped to [0, 1].
    pub fn color_at(&self, point: Point) -> (f32, f32) {
        let saturation = (point.x / self.size.width).clamp(0.0, 1.0);
        let value = (1.0 + point.y / self.size.height).clamp(0.0, 1.0);
        log::trace!("sv pointer {:?} -> s={saturation:.3} v={value:.3}", point);
        (saturation as f32, value as f32)
    }

    /// Marker position for `(saturation, value)`.
    pub fn marker_position(&self, saturation: f32, value: f32) -> Point {
        Point::new(
            saturation as f64 * self.size.width,
            -(1.0 - value as f64) * self.size.height,
        )
    }
}

/// The vertical hue strip. Hue 0 sits at the bottom and the full circle
/// wraps back to red at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueStrip {
    height: f64,
}

impl HueStrip {
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Map a local point to a hue in [0, 360].
    ///
    /// The top edge yields 360; callers store it through `Hsv::set_hue`,
    /// which reduces it to 0.
    pub fn hue_at(&self, point: Point) -> i32 {
        let hue = (360.0 * (1.0 + point.y / self.height)).round().clamp(0.0, 360.0) as i32;
        log::trace!("hue pointer {:?} -> {hue}", point);
        hue
    }

    /// Marker position for a hue. Only `y` is meaningful.
    pub fn marker_position(&self, hue: u16) -> Point {
        Point::new(0.0, -self.height * (1.0 - hue as f64 / 360.0))
    }
}

/// Receives marker positions from the controller.
pub trait MarkerSink {
    fn set_position(&mut self, position: Point);
}

/// Marker that remembers its last position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Marker {
    position: Option<Point>,
}

impl Marker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last position set, or `None` before the first update.
    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

impl MarkerSink for Marker {
    fn set_position(&mut self, position: Point) {
        self.position = Some(position);
    }
}
