//! HuePick Core Library
//!
//! Backend-agnostic color model and picker logic. Rendering targets and
//! marker widgets are plugged in through the [`PixelSink`] and
//! [`MarkerSink`] traits.

pub mod color;
pub mod config;
pub mod gradient;
pub mod picker;
pub mod pointer;

pub use color::{HexError, Hsv, Rgb, hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv};
pub use config::{ConfigError, PickerConfig};
pub use gradient::{PixelBuffer, PixelSink, render_hue_strip, render_sv_square};
pub use picker::{
    ColorCallback, DragTarget, EditOutcome, Field, FieldError, FieldTexts, PickerColor,
    PickerController, PickerError, PickerResult, PickerState, Session,
};
pub use pointer::{HueStrip, Marker, MarkerSink, SurfaceFrame, SvSurface};
