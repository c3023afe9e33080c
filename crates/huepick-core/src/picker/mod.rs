//! The picker controller: the edit/save/cancel state machine.
//!
//! Every input (text field, pointer drag, programmatic setter) updates the
//! pending color, then the controller re-projects all fields, moves both
//! markers, regenerates the saturation/value square when the hue changed,
//! and reports the new color through the session callback.
//!
//! Field text is plain data read by the host. The controller never writes
//! into host widgets, so refreshing a field cannot feed back into another
//! edit.

mod fields;
mod state;

pub use fields::{Field, FieldError, FieldTexts};
pub use state::{ColorCallback, PickerColor, PickerState, Session};

use kurbo::Point;
use thiserror::Error;

use crate::color::{Rgb, hex_to_rgb};
use crate::config::PickerConfig;
use crate::gradient::{PixelBuffer, PixelSink, render_hue_strip, render_sv_square};
use crate::pointer::{HueStrip, Marker, MarkerSink, SvSurface};
use fields::parse_number;

/// Lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("A picker session is already open")]
    AlreadyOpen,
    #[error("No picker session is open")]
    NotOpen,
}

/// Result type for lifecycle operations.
pub type PickerResult<T> = Result<T, PickerError>;

/// What happened to an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The pending color was updated.
    Applied,
    /// The input was out of range; the clamped value was applied and the
    /// field now shows it.
    Clamped,
    /// The input was malformed; nothing changed except the field text.
    Rejected(FieldError),
    /// No session is open.
    Ignored,
}

impl EditOutcome {
    /// Whether the pending color was updated.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Applied | Self::Clamped)
    }
}

/// Surface being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    SvSquare,
    HueStrip,
}

/// Owns one picker's surfaces, markers and session.
///
/// Only one session can be open at a time; a second [`open`](Self::open)
/// is refused until the current one is saved or cancelled.
pub struct PickerController<P: PixelSink = PixelBuffer, M: MarkerSink = Marker> {
    sv_surface: SvSurface,
    hue_strip: HueStrip,
    sv_pixels: P,
    hue_pixels: P,
    sv_marker: M,
    hue_marker: M,
    state: PickerState,
    fields: FieldTexts,
    drag: Option<DragTarget>,
    /// Hue currently drawn into `sv_pixels`.
    rendered_hue: Option<u16>,
}

impl PickerController<PixelBuffer, Marker> {
    /// Create a controller backed by in-memory buffers sized from `config`.
    pub fn with_buffers(config: &PickerConfig) -> Self {
        let (sv_width, sv_height) = config.sv_pixels();
        let (hue_width, hue_height) = config.hue_strip_pixels();
        Self::new(
            config,
            PixelBuffer::new(sv_width, sv_height),
            PixelBuffer::new(hue_width, hue_height),
            Marker::new(),
            Marker::new(),
        )
    }
}

impl<P: PixelSink, M: MarkerSink> PickerController<P, M> {
    /// Create a closed controller. The hue strip is rendered here, once.
    pub fn new(
        config: &PickerConfig,
        sv_pixels: P,
        mut hue_pixels: P,
        sv_marker: M,
        hue_marker: M,
    ) -> Self {
        render_hue_strip(&mut hue_pixels);
        Self {
            sv_surface: SvSurface::new(config.sv_size),
            hue_strip: HueStrip::new(config.sv_size.height),
            sv_pixels,
            hue_pixels,
            sv_marker,
            hue_marker,
            state: PickerState::Closed,
            fields: FieldTexts::default(),
            drag: None,
            rendered_hue: None,
        }
    }

    // --- Lifecycle ---

    /// Start a session editing `initial`.
    ///
    /// `callback` receives the pending color after every accepted edit and
    /// the final color on save or cancel. It is not called by `open`.
    pub fn open(&mut self, initial: Rgb, callback: impl FnMut(Rgb) + 'static) -> PickerResult<()> {
        if self.state.is_open() {
            log::warn!("Picker already open, ignoring open({:?})", initial);
            return Err(PickerError::AlreadyOpen);
        }

        log::debug!("Opening picker with {:?}", initial);
        let session = Session::new(initial, Box::new(callback));
        let pending = session.pending;
        self.state = PickerState::Open(session);
        self.drag = None;
        self.refresh(&pending, true);
        Ok(())
    }

    /// Close the session, delivering the pending color.
    pub fn save(&mut self) -> PickerResult<Rgb> {
        self.close("save", |session| session.pending)
    }

    /// Close the session, restoring the color it was opened with.
    pub fn cancel(&mut self) -> PickerResult<Rgb> {
        self.close("cancel", |session| session.committed)
    }

    fn close(
        &mut self,
        action: &str,
        pick: impl FnOnce(&Session) -> PickerColor,
    ) -> PickerResult<Rgb> {
        let PickerState::Open(mut session) = std::mem::take(&mut self.state) else {
            log::warn!("Picker {} while closed", action);
            return Err(PickerError::NotOpen);
        };

        let color = pick(&session).rgb();
        (session.callback)(color);
        self.drag = None;
        log::debug!("Picker {} -> {:?}", action, color);
        Ok(color)
    }

    // --- Text fields ---

    /// Apply raw text typed into `field`.
    pub fn edit_field(&mut self, field: Field, text: &str) -> EditOutcome {
        match field {
            Field::Hue => self.edit_hue(text),
            Field::Saturation => self.edit_saturation(text),
            Field::Value => self.edit_value(text),
            Field::Red => self.edit_red(text),
            Field::Green => self.edit_green(text),
            Field::Blue => self.edit_blue(text),
            Field::Hex => self.edit_hex(text),
        }
    }

    /// Hue in whole degrees, clamped to 0..=360 and stored modulo 360.
    pub fn edit_hue(&mut self, text: &str) -> EditOutcome {
        self.edit_number(Field::Hue, text, |color, n| color.with_hue(n as i32))
    }

    /// Saturation in percent, clamped to 0..=100.
    pub fn edit_saturation(&mut self, text: &str) -> EditOutcome {
        self.edit_number(Field::Saturation, text, |color, n| {
            color.with_saturation(n as f32 / 100.0)
        })
    }

    /// Value in percent, clamped to 0..=100.
    pub fn edit_value(&mut self, text: &str) -> EditOutcome {
        self.edit_number(Field::Value, text, |color, n| color.with_value(n as f32 / 100.0))
    }

    pub fn edit_red(&mut self, text: &str) -> EditOutcome {
        self.edit_number(Field::Red, text, |color, n| {
            PickerColor::from_rgb(Rgb { r: n as u8, ..color.rgb() })
        })
    }

    pub fn edit_green(&mut self, text: &str) -> EditOutcome {
        self.edit_number(Field::Green, text, |color, n| {
            PickerColor::from_rgb(Rgb { g: n as u8, ..color.rgb() })
        })
    }

    pub fn edit_blue(&mut self, text: &str) -> EditOutcome {
        self.edit_number(Field::Blue, text, |color, n| {
            PickerColor::from_rgb(Rgb { b: n as u8, ..color.rgb() })
        })
    }

    /// Six lowercase hex digits.
    ///
    /// Malformed input leaves the pending color alone and resets the hex
    /// field to the *committed* color, without invoking the callback.
    pub fn edit_hex(&mut self, text: &str) -> EditOutcome {
        let Some(session) = self.state.session() else {
            return Self::ignored(Field::Hex);
        };
        let committed = session.committed;

        match hex_to_rgb(text) {
            Ok(rgb) => {
                self.apply(PickerColor::from_rgb(rgb));
                EditOutcome::Applied
            }
            Err(err) => {
                log::warn!("Rejected hex input {:?}: {}", text, err);
                self.fields.hex = committed.rgb().to_hex();
                EditOutcome::Rejected(err.into())
            }
        }
    }

    fn edit_number(
        &mut self,
        field: Field,
        text: &str,
        update: impl FnOnce(PickerColor, i64) -> PickerColor,
    ) -> EditOutcome {
        let Some(pending) = self.pending() else {
            return Self::ignored(field);
        };

        match parse_number(field, text) {
            Ok(number) => {
                self.apply(update(pending, number.value));
                if number.clamped {
                    log::debug!("{:?} input {:?} clamped to {}", field, text, number.value);
                    EditOutcome::Clamped
                } else {
                    EditOutcome::Applied
                }
            }
            Err(err) => {
                log::warn!("Rejected {:?} input: {}", field, err);
                self.fields = FieldTexts::project(&pending);
                EditOutcome::Rejected(err)
            }
        }
    }

    fn ignored(field: Field) -> EditOutcome {
        log::debug!("Ignoring {:?} edit while closed", field);
        EditOutcome::Ignored
    }

    // --- Programmatic setters ---

    /// Set the hue directly; reduced modulo 360.
    pub fn set_hue(&mut self, hue: i32) -> EditOutcome {
        self.edit_with(|color| color.with_hue(hue))
    }

    /// Set saturation directly; clamped to [0, 1].
    pub fn set_saturation(&mut self, saturation: f32) -> EditOutcome {
        self.edit_with(|color| color.with_saturation(saturation))
    }

    /// Set value directly; clamped to [0, 1].
    pub fn set_value(&mut self, value: f32) -> EditOutcome {
        self.edit_with(|color| color.with_value(value))
    }

    pub fn set_rgb(&mut self, rgb: Rgb) -> EditOutcome {
        self.edit_with(|_| PickerColor::from_rgb(rgb))
    }

    fn edit_with(&mut self, update: impl FnOnce(PickerColor) -> PickerColor) -> EditOutcome {
        match self.pending() {
            Some(pending) => {
                self.apply(update(pending));
                EditOutcome::Applied
            }
            None => {
                log::debug!("Ignoring edit while closed");
                EditOutcome::Ignored
            }
        }
    }

    // --- Pointer surfaces ---

    /// Pick saturation and value from a point on the SV square.
    pub fn on_sv_surface_interaction(&mut self, point: Point) -> EditOutcome {
        let (saturation, value) = self.sv_surface.color_at(point);
        self.edit_with(|color| color.with_saturation_value(saturation, value))
    }

    /// Pick the hue from a point on the hue strip.
    pub fn on_hue_strip_interaction(&mut self, point: Point) -> EditOutcome {
        let hue = self.hue_strip.hue_at(point);
        self.edit_with(|color| color.with_hue(hue))
    }

    /// Pointer pressed on `target`. Later [`drag_to`](Self::drag_to) calls
    /// keep editing that surface until [`end_drag`](Self::end_drag).
    pub fn begin_drag(&mut self, target: DragTarget, point: Point) -> EditOutcome {
        if !self.state.is_open() {
            log::debug!("Ignoring {:?} drag while closed", target);
            return EditOutcome::Ignored;
        }
        self.drag = Some(target);
        self.drag_to(point)
    }

    /// Pointer moved. Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, point: Point) -> EditOutcome {
        match self.drag {
            Some(DragTarget::SvSquare) => self.on_sv_surface_interaction(point),
            Some(DragTarget::HueStrip) => self.on_hue_strip_interaction(point),
            None => EditOutcome::Ignored,
        }
    }

    /// Pointer released.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn drag_target(&self) -> Option<DragTarget> {
        self.drag
    }

    // --- Synchronization ---

    fn apply(&mut self, next: PickerColor) {
        let PickerState::Open(session) = &mut self.state else {
            return;
        };
        session.pending = next;

        self.refresh(&next, false);

        if let PickerState::Open(session) = &mut self.state {
            (session.callback)(next.rgb());
        }
    }

    fn refresh(&mut self, color: &PickerColor, force_render: bool) {
        let hsv = color.hsv();
        self.fields = FieldTexts::project(color);
        self.sv_marker
            .set_position(self.sv_surface.marker_position(hsv.saturation(), hsv.value()));
        self.hue_marker
            .set_position(self.hue_strip.marker_position(hsv.hue()));

        if force_render || self.rendered_hue != Some(hsv.hue()) {
            render_sv_square(&mut self.sv_pixels, hsv.hue());
            self.rendered_hue = Some(hsv.hue());
        }
    }

    // --- Accessors ---

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Displayed text of every field.
    pub fn fields(&self) -> &FieldTexts {
        &self.fields
    }

    pub fn pending(&self) -> Option<PickerColor> {
        self.state.session().map(Session::pending)
    }

    pub fn committed(&self) -> Option<PickerColor> {
        self.state.session().map(Session::committed)
    }

    /// `(new, current)` colors for the preview swatches.
    pub fn preview(&self) -> Option<(Rgb, Rgb)> {
        self.state
            .session()
            .map(|session| (session.pending.rgb(), session.committed.rgb()))
    }

    pub fn sv_surface(&self) -> &SvSurface {
        &self.sv_surface
    }

    pub fn hue_strip(&self) -> &HueStrip {
        &self.hue_strip
    }

    pub fn sv_pixels(&self) -> &P {
        &self.sv_pixels
    }

    pub fn sv_pixels_mut(&mut self) -> &mut P {
        &mut self.sv_pixels
    }

    pub fn hue_pixels(&self) -> &P {
        &self.hue_pixels
    }

    pub fn hue_pixels_mut(&mut self) -> &mut P {
        &mut self.hue_pixels
    }

    pub fn sv_marker(&self) -> &M {
        &self.sv_marker
    }

    pub fn hue_marker(&self) -> &M {
        &self.hue_marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsv;
    use kurbo::Size;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn controller() -> PickerController {
        init_logging();
        PickerController::with_buffers(&PickerConfig::new(Size::new(20.0, 10.0)))
    }

    /// Open `picker` with `color`, returning the recorded callback values.
    fn open_recording(picker: &mut PickerController, color: Rgb) -> Rc<RefCell<Vec<Rgb>>> {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        picker
            .open(color, move |rgb| sink.borrow_mut().push(rgb))
            .unwrap();
        calls
    }

    fn pending_hsv(picker: &PickerController) -> Hsv {
        picker.pending().unwrap().hsv()
    }

    #[test]
    fn test_open_derives_all_representations() {
        let mut picker = controller();
        let calls = open_recording(&mut picker, Rgb::new(255, 0, 0));

        let hsv = pending_hsv(&picker);
        assert_eq!(hsv.hue(), 0);
        assert!((hsv.saturation() - 1.0).abs() < f32::EPSILON);
        assert!((hsv.value() - 1.0).abs() < f32::EPSILON);
        assert_eq!(picker.fields().hex, "ff0000");
        assert!(calls.borrow().is_empty());
        assert_eq!(picker.sv_pixels().commit_count(), 1);
        assert_eq!(picker.sv_marker().position(), Some(Point::new(20.0, 0.0)));
        assert_eq!(picker.hue_marker().position(), Some(Point::new(0.0, -10.0)));
    }

    #[test]
    fn test_edit_hex() {
        let mut picker = controller();
        let calls = open_recording(&mut picker, Rgb::new(255, 0, 0));

        assert_eq!(picker.edit_hex("00ff00"), EditOutcome::Applied);
        assert_eq!(picker.pending().unwrap().rgb(), Rgb::new(0, 255, 0));
        let hsv = pending_hsv(&picker);
        assert_eq!(hsv.hue(), 120);
        assert!((hsv.saturation() - 1.0).abs() < f32::EPSILON);
        assert!((hsv.value() - 1.0).abs() < f32::EPSILON);
        assert_eq!(*calls.borrow(), vec![Rgb::new(0, 255, 0)]);
    }

    #[test]
    fn test_invalid_hex_reverts_to_committed() {
        let mut picker = controller();
        let calls = open_recording(&mut picker, Rgb::new(255, 0, 0));
        picker.edit_hex("00ff00");

        let outcome = picker.edit_hex("GGGGGG");
        assert!(matches!(outcome, EditOutcome::Rejected(FieldError::Hex(_))));
        assert_eq!(picker.pending().unwrap().rgb(), Rgb::new(0, 255, 0));
        assert_eq!(picker.fields().hex, "ff0000");
        // Other fields still show the pending color.
        assert_eq!(picker.fields().hue, "120");
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_uppercase_and_short_hex_rejected() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(1, 2, 3));
        assert!(!picker.edit_hex("ABCDEF").is_accepted());
        assert!(!picker.edit_hex("abc").is_accepted());
        assert_eq!(picker.pending().unwrap().rgb(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_saturation_clamped_with_echo() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::WHITE);

        assert_eq!(picker.edit_saturation("150"), EditOutcome::Clamped);
        assert_eq!(picker.fields().saturation, "100");
        assert_eq!(pending_hsv(&picker).saturation(), 1.0);
    }

    #[test]
    fn test_rgb_fields_clamped() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::BLACK);

        assert_eq!(picker.edit_red("300"), EditOutcome::Clamped);
        assert_eq!(picker.edit_green("-5"), EditOutcome::Clamped);
        assert_eq!(picker.edit_blue("17"), EditOutcome::Applied);
        assert_eq!(picker.pending().unwrap().rgb(), Rgb::new(255, 0, 17));
        assert_eq!(picker.fields().red, "255");
        assert_eq!(picker.fields().green, "0");
        assert_eq!(picker.fields().hex, "ff0011");
    }

    #[test]
    fn test_hue_field_clamped() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(255, 0, 0));
        assert_eq!(picker.edit_hue("400"), EditOutcome::Clamped);
        assert_eq!(pending_hsv(&picker).hue(), 0);
        assert_eq!(picker.fields().hue, "0");

        assert_eq!(picker.edit_hue("359"), EditOutcome::Applied);
        assert_eq!(pending_hsv(&picker).hue(), 359);
    }

    #[test]
    fn test_hue_field_360_wraps_to_zero() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(0, 0, 255));
        assert_eq!(picker.edit_hue("360"), EditOutcome::Applied);
        assert_eq!(pending_hsv(&picker).hue(), 0);
        assert_eq!(picker.fields().hue, "0");
        assert_eq!(picker.pending().unwrap().rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_parse_error_keeps_previous_value() {
        let mut picker = controller();
        let calls = open_recording(&mut picker, Rgb::new(255, 0, 0));
        picker.edit_value("50");
        let before = picker.pending();

        let outcome = picker.edit_value("fifty");
        assert!(matches!(outcome, EditOutcome::Rejected(FieldError::Parse { .. })));
        assert_eq!(picker.pending(), before);
        assert_eq!(picker.fields().value, "50");
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_set_hue_wraps() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(255, 0, 0));
        picker.set_hue(370);
        assert_eq!(pending_hsv(&picker).hue(), 10);
        picker.set_hue(-30);
        assert_eq!(pending_hsv(&picker).hue(), 330);
    }

    #[test]
    fn test_setters_clamp() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(255, 0, 0));
        picker.set_saturation(2.0);
        picker.set_value(-1.0);
        let hsv = pending_hsv(&picker);
        assert_eq!(hsv.saturation(), 1.0);
        assert_eq!(hsv.value(), 0.0);
        assert_eq!(picker.pending().unwrap().rgb(), Rgb::BLACK);
    }

    #[test]
    fn test_drag_sv_top_left_corner() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(0, 0, 255));

        picker.begin_drag(DragTarget::SvSquare, Point::new(0.0, 0.0));
        let hsv = pending_hsv(&picker);
        assert_eq!(hsv.saturation(), 0.0);
        assert_eq!(hsv.value(), 1.0);
        assert_eq!(hsv.hue(), 240);
        assert_eq!(picker.pending().unwrap().rgb(), Rgb::WHITE);
    }

    #[test]
    fn test_drag_protocol() {
        let mut picker = controller();
        let calls = open_recording(&mut picker, Rgb::new(255, 0, 0));

        // Moves without a drag do nothing.
        assert_eq!(picker.drag_to(Point::new(5.0, -5.0)), EditOutcome::Ignored);

        picker.begin_drag(DragTarget::HueStrip, Point::new(0.0, -5.0));
        assert_eq!(picker.drag_target(), Some(DragTarget::HueStrip));
        assert_eq!(pending_hsv(&picker).hue(), 180);

        // Dragging far outside saturates.
        picker.drag_to(Point::new(0.0, -100.0));
        assert_eq!(pending_hsv(&picker).hue(), 0);
        picker.drag_to(Point::new(0.0, 100.0));
        assert_eq!(pending_hsv(&picker).hue(), 0);

        picker.end_drag();
        assert_eq!(picker.drag_to(Point::new(0.0, -5.0)), EditOutcome::Ignored);
        assert_eq!(calls.borrow().len(), 3);
    }

    #[test]
    fn test_markers_follow_pending() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(255, 0, 0));

        picker.on_sv_surface_interaction(Point::new(5.0, -5.0));
        assert_eq!(picker.sv_marker().position(), Some(Point::new(5.0, -5.0)));

        picker.set_hue(90);
        assert_eq!(picker.hue_marker().position(), Some(Point::new(0.0, -7.5)));
    }

    #[test]
    fn test_sv_regenerated_only_on_hue_change() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(255, 0, 0));
        assert_eq!(picker.sv_pixels().commit_count(), 1);

        picker.edit_saturation("40");
        picker.edit_value("70");
        picker.on_sv_surface_interaction(Point::new(3.0, -3.0));
        assert_eq!(picker.sv_pixels().commit_count(), 1);

        picker.edit_hue("200");
        assert_eq!(picker.sv_pixels().commit_count(), 2);

        picker.set_hue(200);
        assert_eq!(picker.sv_pixels().commit_count(), 2);

        picker.set_rgb(Rgb::new(0, 255, 0));
        assert_eq!(picker.sv_pixels().commit_count(), 3);
        assert_eq!(picker.hue_pixels().commit_count(), 1);
    }

    #[test]
    fn test_sv_surface_shows_pending_hue() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(0, 0, 255));
        let (width, height) = (20, 10);
        assert_eq!(
            picker.sv_pixels().pixel(width - 1, height - 1),
            Some(Rgb::new(0, 0, 255))
        );
    }

    #[test]
    fn test_save_delivers_pending() {
        let mut picker = controller();
        let calls = open_recording(&mut picker, Rgb::new(255, 0, 0));
        picker.edit_hex("123456");
        picker.edit_hex("abcdef");

        assert_eq!(picker.save(), Ok(Rgb::new(0xab, 0xcd, 0xef)));
        assert!(!picker.is_open());
        assert_eq!(calls.borrow().last(), Some(&Rgb::new(0xab, 0xcd, 0xef)));
        assert_eq!(calls.borrow().len(), 3);
    }

    #[test]
    fn test_cancel_restores_committed() {
        let mut picker = controller();
        let calls = open_recording(&mut picker, Rgb::new(10, 20, 30));
        picker.set_hue(100);
        picker.edit_red("200");
        picker.on_sv_surface_interaction(Point::new(1.0, -9.0));

        assert_eq!(picker.cancel(), Ok(Rgb::new(10, 20, 30)));
        assert!(!picker.is_open());
        assert_eq!(calls.borrow().last(), Some(&Rgb::new(10, 20, 30)));
    }

    #[test]
    fn test_closed_ignores_edits() {
        let mut picker = controller();
        assert_eq!(picker.edit_hue("10"), EditOutcome::Ignored);
        assert_eq!(picker.edit_hex("ffffff"), EditOutcome::Ignored);
        assert_eq!(picker.set_rgb(Rgb::WHITE), EditOutcome::Ignored);
        assert_eq!(
            picker.begin_drag(DragTarget::SvSquare, Point::ZERO),
            EditOutcome::Ignored
        );
        assert_eq!(picker.drag_target(), None);
        assert_eq!(picker.save(), Err(PickerError::NotOpen));
        assert_eq!(picker.cancel(), Err(PickerError::NotOpen));
        assert_eq!(picker.preview(), None);
    }

    #[test]
    fn test_edits_after_save_are_ignored() {
        let mut picker = controller();
        let calls = open_recording(&mut picker, Rgb::new(255, 0, 0));
        picker.save().unwrap();
        assert_eq!(picker.edit_field(Field::Red, "5"), EditOutcome::Ignored);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_second_open_refused() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(255, 0, 0));
        assert_eq!(picker.open(Rgb::WHITE, |_| {}), Err(PickerError::AlreadyOpen));
        assert_eq!(picker.pending().unwrap().rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_reopen_after_close() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(255, 0, 0));
        picker.cancel().unwrap();

        open_recording(&mut picker, Rgb::new(0, 0, 255));
        assert_eq!(picker.committed().unwrap().rgb(), Rgb::new(0, 0, 255));
        assert_eq!(picker.fields().hex, "0000ff");
    }

    #[test]
    fn test_preview() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(255, 0, 0));
        picker.edit_field(Field::Hex, "000000");
        assert_eq!(picker.preview(), Some((Rgb::BLACK, Rgb::new(255, 0, 0))));
    }

    #[test]
    fn test_hue_survives_grayscale_drag() {
        let mut picker = controller();
        open_recording(&mut picker, Rgb::new(0, 255, 0));
        picker.on_sv_surface_interaction(Point::new(0.0, 0.0));
        assert_eq!(picker.pending().unwrap().rgb(), Rgb::WHITE);
        picker.on_sv_surface_interaction(Point::new(20.0, 0.0));
        assert_eq!(picker.pending().unwrap().rgb(), Rgb::new(0, 255, 0));
    }
}
