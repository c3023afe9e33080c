//! New/current color preview.

use egui::{Color32, CornerRadius, Rect, Sense, Stroke, StrokeKind, Ui, Vec2, vec2};
use huepick_core::Rgb;

use crate::{sizing, theme};

/// Convert a core color to an egui color.
pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Two swatches side by side: the pending color on the left and the color
/// the session opened with on the right.
pub struct PreviewSwatch {
    new: Color32,
    current: Color32,
    size: Vec2,
}

impl PreviewSwatch {
    pub fn new(new: Rgb, current: Rgb) -> Self {
        Self {
            new: to_color32(new),
            current: to_color32(current),
            size: vec2(64.0, sizing::SWATCH_HEIGHT),
        }
    }

    /// Set the total size of both halves.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show the swatch and return its rect.
    pub fn show(self, ui: &mut Ui) -> Rect {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let radius = sizing::CORNER_RADIUS;
            let (left, right) = rect.split_left_right_at_fraction(0.5);
            let painter = ui.painter();
            painter.rect_filled(
                left,
                CornerRadius { nw: radius, sw: radius, ne: 0, se: 0 },
                self.new,
            );
            painter.rect_filled(
                right,
                CornerRadius { nw: 0, sw: 0, ne: radius, se: radius },
                self.current,
            );
            painter.rect_stroke(
                rect,
                CornerRadius::same(radius),
                Stroke::new(1.0, theme::BORDER),
                StrokeKind::Inside,
            );
        }

        response.on_hover_text("New | Current");
        rect
    }
}
