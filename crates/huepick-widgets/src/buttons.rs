//! Button components.

use egui::{Color32, CornerRadius, CursorIcon, Pos2, Sense, Ui, vec2};

use crate::{sizing, theme};

/// A plain text button, optionally drawn as the primary action.
pub struct TextButton<'a> {
    label: &'a str,
    primary: bool,
}

impl<'a> TextButton<'a> {
    /// Create a new text button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            primary: false,
        }
    }

    /// Draw with the accent color.
    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let width = 16.0 + 7.0 * self.label.len() as f32;
        let (rect, response) = ui.allocate_exact_size(vec2(width, 24.0), Sense::click());

        if ui.is_rect_visible(rect) {
            let (bg_color, text_color) = match (self.primary, response.hovered()) {
                (true, false) => (theme::ACCENT, Color32::WHITE),
                (true, true) => (theme::ACCENT.gamma_multiply(0.85), Color32::WHITE),
                (false, true) => (theme::HOVER_BG, theme::TEXT),
                (false, false) => (Color32::TRANSPARENT, theme::TEXT),
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            ui.painter().text(
                Pos2::new(rect.center().x, rect.center().y),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(12.0),
                text_color,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
