//! Session state for the picker controller.

use crate::color::{Hsv, Rgb, hsv_to_rgb, rgb_to_hsv};

/// A color held in both RGB and HSV form.
///
/// Whichever form an edit arrives in is kept exactly and the other form is
/// derived from it. Keeping HSV alongside RGB means the hue survives an
/// edit that drops saturation to zero, and keeping RGB means typed RGB and
/// hex values are echoed back unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerColor {
    hsv: Hsv,
    rgb: Rgb,
}

impl PickerColor {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hsv: rgb_to_hsv(rgb),
            rgb,
        }
    }

    pub fn from_hsv(hsv: Hsv) -> Self {
        Self {
            hsv,
            rgb: hsv_to_rgb(hsv),
        }
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn with_hue(self, hue: i32) -> Self {
        Self::from_hsv(self.hsv.with_hue(hue))
    }

    pub fn with_saturation(self, saturation: f32) -> Self {
        Self::from_hsv(self.hsv.with_saturation(saturation))
    }

    pub fn with_value(self, value: f32) -> Self {
        Self::from_hsv(self.hsv.with_value(value))
    }

    pub fn with_saturation_value(self, saturation: f32, value: f32) -> Self {
        Self::from_hsv(self.hsv.with_saturation(saturation).with_value(value))
    }
}

/// Callback receiving the live and final colors.
pub type ColorCallback = Box<dyn FnMut(Rgb)>;

/// An open editing session.
pub struct Session {
    /// Color when the session opened. Restored on cancel.
    pub(crate) committed: PickerColor,
    /// Color under live edit. Delivered on save.
    pub(crate) pending: PickerColor,
    pub(crate) callback: ColorCallback,
}

impl Session {
    pub(crate) fn new(initial: Rgb, callback: ColorCallback) -> Self {
        let color = PickerColor::from_rgb(initial);
        Self {
            committed: color,
            pending: color,
            callback,
        }
    }

    pub fn committed(&self) -> PickerColor {
        self.committed
    }

    pub fn pending(&self) -> PickerColor {
        self.pending
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("committed", &self.committed)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

/// Lifecycle of the picker.
#[derive(Debug, Default)]
pub enum PickerState {
    /// No session; edits are ignored.
    #[default]
    Closed,
    /// A session is in progress.
    Open(Session),
}

impl PickerState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Open(session) => Some(session),
            Self::Closed => None,
        }
    }
}
