//! The color picker window.

use egui::{
    Color32, Context, CornerRadius, FontId, Pos2, Rect, Response, Sense, Stroke, StrokeKind, Ui,
    Vec2, pos2, vec2,
};
use huepick_core::{
    ConfigError, DragTarget, EditOutcome, Field, Marker, PickerConfig, PickerController,
    PickerResult, Rgb, SurfaceFrame,
};
use kurbo::Point;

use crate::swatch::{PreviewSwatch, to_color32};
use crate::texture::TextureSink;
use crate::{TextButton, panel_frame, section_label, separator, sizing, theme};

type Controller = PickerController<TextureSink, Marker>;

/// Field currently being typed into, with its uncommitted text.
///
/// Typed text is only handed to the controller when the field loses focus,
/// so intermediate states like an empty field never reach it.
struct FieldEdit {
    field: Field,
    text: String,
}

/// Picker window: SV square, hue strip, text fields, preview and
/// Save/Cancel buttons.
pub struct ColorPickerPanel {
    config: PickerConfig,
    controller: Controller,
    editing: Option<FieldEdit>,
    title: String,
}

impl ColorPickerPanel {
    /// Create a closed panel. The config is validated first.
    pub fn new(config: PickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (sv_width, sv_height) = config.sv_pixels();
        let (hue_width, hue_height) = config.hue_strip_pixels();
        let controller = PickerController::new(
            &config,
            TextureSink::new("huepick-sv", sv_width, sv_height),
            TextureSink::new("huepick-hue", hue_width, hue_height),
            Marker::new(),
            Marker::new(),
        );
        Ok(Self {
            config,
            controller,
            editing: None,
            title: "Color".to_string(),
        })
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Start editing `color`. See [`PickerController::open`].
    pub fn open(&mut self, color: Rgb, callback: impl FnMut(Rgb) + 'static) -> PickerResult<()> {
        self.editing = None;
        self.controller.open(color, callback)
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Show the picker window while a session is open. Closing the window
    /// cancels the session.
    pub fn show(&mut self, ctx: &Context) {
        if !self.controller.is_open() {
            return;
        }

        let mut open = true;
        egui::Window::new(self.title.clone())
            .frame(panel_frame())
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| self.ui(ui));

        if !open && self.controller.is_open() {
            if let Err(err) = self.controller.cancel() {
                log::error!("Failed to cancel picker: {}", err);
            }
        }
    }

    /// Draw the picker contents into `ui`.
    pub fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.sv_square(ui);
            ui.add_space(8.0);
            self.hue_strip(ui);
        });

        separator(ui);

        ui.horizontal(|ui| {
            if let Some((new, current)) = self.controller.preview() {
                PreviewSwatch::new(new, current).show(ui);
            }
            ui.add_space(8.0);
            self.hex_field(ui);
        });

        ui.add_space(4.0);
        egui::Grid::new("huepick_fields")
            .num_columns(6)
            .spacing(vec2(4.0, 4.0))
            .show(ui, |ui| {
                for row in [
                    [Field::Hue, Field::Saturation, Field::Value],
                    [Field::Red, Field::Green, Field::Blue],
                ] {
                    for field in row {
                        section_label(ui, field.label());
                        self.field_input(ui, field, sizing::FIELD_WIDTH);
                    }
                    ui.end_row();
                }
            });

        separator(ui);

        ui.horizontal(|ui| {
            if TextButton::new("Save").primary(true).show(ui) {
                match self.controller.save() {
                    Ok(color) => log::info!("Picker saved {}", color.to_hex()),
                    Err(err) => log::error!("Failed to save picker: {}", err),
                }
            }
            if TextButton::new("Cancel").show(ui) {
                match self.controller.cancel() {
                    Ok(color) => log::info!("Picker cancelled, restored {}", color.to_hex()),
                    Err(err) => log::error!("Failed to cancel picker: {}", err),
                }
            }
        });
    }

    fn sv_square(&mut self, ui: &mut Ui) {
        let size = to_vec2(self.config.sv_size);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        self.track_pointer(&response, rect, DragTarget::SvSquare);

        if !ui.is_rect_visible(rect) {
            return;
        }
        let texture = self.controller.sv_pixels_mut().texture_id(ui.ctx());
        let painter = ui.painter();
        painter.image(texture, rect, full_uv(), Color32::WHITE);
        painter.rect_stroke(
            rect,
            CornerRadius::ZERO,
            Stroke::new(1.0, theme::BORDER),
            StrokeKind::Outside,
        );

        if let Some(position) = self.controller.sv_marker().position() {
            let center = to_screen(rect, position);
            let fill = self
                .controller
                .pending()
                .map_or(Color32::TRANSPARENT, |color| to_color32(color.rgb()));
            painter.circle_filled(center, sizing::MARKER_RADIUS, fill);
            painter.circle_stroke(
                center,
                sizing::MARKER_RADIUS + 1.0,
                Stroke::new(1.0, Color32::WHITE),
            );
            painter.circle_stroke(center, sizing::MARKER_RADIUS, Stroke::new(1.0, Color32::BLACK));
        }
    }

    fn hue_strip(&mut self, ui: &mut Ui) {
        let size = to_vec2(self.config.hue_strip_size());
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        self.track_pointer(&response, rect, DragTarget::HueStrip);

        if !ui.is_rect_visible(rect) {
            return;
        }
        let texture = self.controller.hue_pixels_mut().texture_id(ui.ctx());
        let painter = ui.painter();
        painter.image(texture, rect, full_uv(), Color32::WHITE);

        if let Some(position) = self.controller.hue_marker().position() {
            let center_y = to_screen(rect, position).y;
            let marker = Rect::from_center_size(
                pos2(rect.center().x, center_y),
                vec2(
                    rect.width() + sizing::HUE_MARKER_OVERFLOW * 2.0,
                    sizing::HUE_MARKER_HEIGHT,
                ),
            );
            let radius = CornerRadius::same(2);
            painter.rect_stroke(
                marker,
                radius,
                Stroke::new(1.0, Color32::WHITE),
                StrokeKind::Outside,
            );
            painter.rect_stroke(
                marker,
                radius,
                Stroke::new(1.0, Color32::BLACK),
                StrokeKind::Inside,
            );
        }
    }

    /// Feed pointer activity on a surface into the controller's drag protocol.
    fn track_pointer(&mut self, response: &Response, rect: Rect, target: DragTarget) {
        if response.drag_stopped() {
            self.controller.end_drag();
        }
        let Some(pointer) = response.interact_pointer_pos() else {
            return;
        };
        let local = to_local(rect, pointer);

        if response.drag_started() {
            self.controller.begin_drag(target, local);
        } else if response.dragged() {
            self.controller.drag_to(local);
        } else if response.clicked() {
            self.controller.begin_drag(target, local);
            self.controller.end_drag();
        }
    }

    fn hex_field(&mut self, ui: &mut Ui) {
        section_label(ui, Field::Hex.label());
        self.field_input(ui, Field::Hex, sizing::HEX_FIELD_WIDTH);
    }

    fn field_input(&mut self, ui: &mut Ui, field: Field, width: f32) {
        let mut text = match &self.editing {
            Some(edit) if edit.field == field => edit.text.clone(),
            _ => self.controller.fields().get(field).to_string(),
        };

        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .desired_width(width)
                .font(FontId::proportional(12.0))
                .text_color(theme::TEXT),
        );

        if response.lost_focus() {
            self.editing = None;
            self.commit_field(field, &text);
        } else if response.has_focus() {
            self.editing = Some(FieldEdit { field, text });
        }
    }

    /// Hand finished field text to the controller.
    ///
    /// Text equal to what the field already displays is a projection of the
    /// pending color, not an edit, and is dropped. Resubmitting it would
    /// requantise the color through the field's integer units.
    fn commit_field(&mut self, field: Field, text: &str) -> Option<EditOutcome> {
        if text == self.controller.fields().get(field) {
            return None;
        }
        let outcome = self.controller.edit_field(field, text);
        match &outcome {
            EditOutcome::Rejected(err) => log::debug!("{:?} field rejected: {}", field, err),
            outcome => log::trace!("{:?} field -> {:?}", field, outcome),
        }
        Some(outcome)
    }
}

fn to_vec2(size: kurbo::Size) -> Vec2 {
    vec2(size.width as f32, size.height as f32)
}

fn full_uv() -> Rect {
    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0))
}

/// Screen position to the surface's local frame.
fn to_local(rect: Rect, pointer: Pos2) -> Point {
    let offset = pointer - rect.min;
    SurfaceFrame::from_top_left(Point::new(offset.x as f64, offset.y as f64))
}

/// Local surface position to screen.
fn to_screen(rect: Rect, local: Point) -> Pos2 {
    let top_left = SurfaceFrame::to_top_left(local);
    rect.min + vec2(top_left.x as f32, top_left.y as f32)
}
