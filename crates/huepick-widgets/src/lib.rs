//! egui front end for the HuePick color picker.
//!
//! - **Panel**: the picker window driving a [`huepick_core::PickerController`]
//! - **Texture**: a pixel sink that uploads generated gradients to egui
//! - **Swatch**: new/current color preview
//! - **Layout**: section labels, separators, panel frames

pub mod buttons;
pub mod layout;
pub mod panel;
pub mod swatch;
pub mod texture;

pub use buttons::TextButton;
pub use layout::{panel_frame, section_label, separator};
pub use panel::ColorPickerPanel;
pub use swatch::{PreviewSwatch, to_color32};
pub use texture::TextureSink;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
    /// Radius of the SV square selector circle
    pub const MARKER_RADIUS: f32 = 5.0;
    /// Height of the hue strip selector bar
    pub const HUE_MARKER_HEIGHT: f32 = 4.0;
    /// How far the hue selector sticks out on each side
    pub const HUE_MARKER_OVERFLOW: f32 = 2.0;
    /// Width of a numeric text field
    pub const FIELD_WIDTH: f32 = 36.0;
    /// Width of the hex text field
    pub const HEX_FIELD_WIDTH: f32 = 64.0;
    /// Height of the preview swatch
    pub const SWATCH_HEIGHT: f32 = 24.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Primary action color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
