//! Picker configuration.

use kurbo::Size;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default edge length of the saturation/value square.
pub const DEFAULT_SV_EDGE: f64 = 256.0;

/// Default width of the hue strip.
pub const DEFAULT_HUE_STRIP_WIDTH: f64 = 24.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid {field}: {value} (must be finite and at least 1 pixel)")]
    InvalidSize { field: &'static str, value: f64 },
}

/// Surface geometry for a picker.
///
/// Sizes are in widget units; the generated textures use the same numbers
/// truncated to whole pixels. The hue strip is always as tall as the
/// saturation/value square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Size of the saturation/value square.
    pub sv_size: Size,
    /// Width of the hue strip.
    pub hue_strip_width: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            sv_size: Size::new(DEFAULT_SV_EDGE, DEFAULT_SV_EDGE),
            hue_strip_width: DEFAULT_HUE_STRIP_WIDTH,
        }
    }
}

impl PickerConfig {
    /// Create a config with the given square size and the default strip width.
    pub fn new(sv_size: Size) -> Self {
        Self {
            sv_size,
            ..Self::default()
        }
    }

    /// Set the hue strip width.
    pub fn with_hue_strip_width(mut self, width: f64) -> Self {
        self.hue_strip_width = width;
        self
    }

    /// Parse a JSON config. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every dimension is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("sv_size.width", self.sv_size.width),
            ("sv_size.height", self.sv_size.height),
            ("hue_strip_width", self.hue_strip_width),
        ];
        for (field, value) in dims {
            if !value.is_finite() || value < 1.0 {
                return Err(ConfigError::InvalidSize { field, value });
            }
        }
        Ok(())
    }

    /// Size of the hue strip.
    pub fn hue_strip_size(&self) -> Size {
        Size::new(self.hue_strip_width, self.sv_size.height)
    }

    /// Pixel dimensions of the saturation/value texture.
    pub fn sv_pixels(&self) -> (usize, usize) {
        pixel_dims(self.sv_size)
    }

    /// Pixel dimensions of the hue strip texture.
    pub fn hue_strip_pixels(&self) -> (usize, usize) {
        pixel_dims(self.hue_strip_size())
    }
}

fn pixel_dims(size: Size) -> (usize, usize) {
    (size.width.max(1.0) as usize, size.height.max(1.0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.sv_pixels(), (256, 256));
        assert_eq!(config.hue_strip_pixels(), (24, 256));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strip_follows_square_height() {
        let config = PickerConfig::new(Size::new(300.0, 180.5)).with_hue_strip_width(12.0);
        assert_eq!(config.hue_strip_size(), Size::new(12.0, 180.5));
        assert_eq!(config.hue_strip_pixels(), (12, 180));
    }

    #[test]
    fn test_from_json_partial() {
        let config = PickerConfig::from_json(r#"{ "hue_strip_width": 30.0 }"#).unwrap();
        assert_eq!(config.hue_strip_width, 30.0);
        assert_eq!(config.sv_size, Size::new(DEFAULT_SV_EDGE, DEFAULT_SV_EDGE));
    }

    #[test]
    fn test_from_json_rejects_bad_size() {
        let result = PickerConfig::from_json(r#"{ "hue_strip_width": 0.0 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSize { field: "hue_strip_width", .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(PickerConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PickerConfig::new(Size::new(128.0, 64.0));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }
}
