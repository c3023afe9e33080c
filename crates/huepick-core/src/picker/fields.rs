//! Text fields shown by the picker and parsing of their input.

use std::ops::RangeInclusive;

use thiserror::Error;

use super::state::PickerColor;
use crate::color::HexError;

/// One of the picker's text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hue,
    Saturation,
    Value,
    Red,
    Green,
    Blue,
    Hex,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 7] = [
        Field::Hue,
        Field::Saturation,
        Field::Value,
        Field::Red,
        Field::Green,
        Field::Blue,
        Field::Hex,
    ];

    /// Short label for the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Hue => "H",
            Field::Saturation => "S",
            Field::Value => "V",
            Field::Red => "R",
            Field::Green => "G",
            Field::Blue => "B",
            Field::Hex => "#",
        }
    }

    /// Accepted range of a numeric field. Saturation and value are percent.
    /// Hue accepts 360, which the HSV setter stores as 0.
    pub fn range(self) -> Option<RangeInclusive<i64>> {
        match self {
            Field::Hue => Some(0..=360),
            Field::Saturation | Field::Value => Some(0..=100),
            Field::Red | Field::Green | Field::Blue => Some(0..=255),
            Field::Hex => None,
        }
    }
}

/// Rejected field input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field:?} expects a whole number, got {text:?}")]
    Parse { field: Field, text: String },
    #[error(transparent)]
    Hex(#[from] HexError),
}

/// A parsed numeric field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldNumber {
    pub value: i64,
    /// The input was outside the field's range and has been clamped.
    pub clamped: bool,
}

/// Parse a numeric field, clamping into the field's range.
pub(crate) fn parse_number(field: Field, text: &str) -> Result<FieldNumber, FieldError> {
    let raw: i64 = text.trim().parse().map_err(|_| FieldError::Parse {
        field,
        text: text.to_string(),
    })?;
    let Some(range) = field.range() else {
        return Ok(FieldNumber { value: raw, clamped: false });
    };
    let value = raw.clamp(*range.start(), *range.end());
    Ok(FieldNumber {
        value,
        clamped: value != raw,
    })
}

/// Displayed text of every field.
///
/// This is always a projection of the pending color, except for the hex
/// field after a rejected hex edit, which shows the committed color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTexts {
    pub hue: String,
    pub saturation: String,
    pub value: String,
    pub red: String,
    pub green: String,
    pub blue: String,
    pub hex: String,
}

impl FieldTexts {
    /// Render every field from `color`.
    pub fn project(color: &PickerColor) -> Self {
        let hsv = color.hsv();
        let rgb = color.rgb();
        Self {
            hue: hsv.hue().to_string(),
            saturation: percent(hsv.saturation()),
            value: percent(hsv.value()),
            red: rgb.r.to_string(),
            green: rgb.g.to_string(),
            blue: rgb.b.to_string(),
            hex: rgb.to_hex(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Hue => &self.hue,
            Field::Saturation => &self.saturation,
            Field::Value => &self.value,
            Field::Red => &self.red,
            Field::Green => &self.green,
            Field::Blue => &self.blue,
            Field::Hex => &self.hex,
        }
    }
}

fn percent(fraction: f32) -> String {
    ((fraction * 100.0).round() as i64).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_parse_in_range() {
        let parsed = parse_number(Field::Red, " 42 ").unwrap();
        assert_eq!(parsed, FieldNumber { value: 42, clamped: false });
    }

    #[test]
    fn test_parse_clamps() {
        assert_eq!(
            parse_number(Field::Saturation, "150").unwrap(),
            FieldNumber { value: 100, clamped: true }
        );
        assert_eq!(
            parse_number(Field::Blue, "-3").unwrap(),
            FieldNumber { value: 0, clamped: true }
        );
        assert_eq!(
            parse_number(Field::Hue, "360").unwrap(),
            FieldNumber { value: 360, clamped: false }
        );
        assert_eq!(parse_number(Field::Hue, "400").unwrap().value, 360);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = parse_number(Field::Green, "12a").unwrap_err();
        assert_eq!(
            err,
            FieldError::Parse { field: Field::Green, text: "12a".to_string() }
        );
        assert!(parse_number(Field::Value, "").is_err());
        assert!(parse_number(Field::Value, "99999999999999999999999").is_err());
    }

    #[test]
    fn test_projection() {
        let texts = FieldTexts::project(&PickerColor::from_rgb(Rgb::new(255, 0, 0)));
        assert_eq!(texts.hue, "0");
        assert_eq!(texts.saturation, "100");
        assert_eq!(texts.value, "100");
        assert_eq!(texts.red, "255");
        assert_eq!(texts.green, "0");
        assert_eq!(texts.blue, "0");
        assert_eq!(texts.hex, "ff0000");
        assert_eq!(texts.get(Field::Hex), "ff0000");
    }

    #[test]
    fn test_projection_rounds_percent() {
        let texts = FieldTexts::project(&PickerColor::from_rgb(Rgb::new(74, 74, 74)));
        // 74 / 255 = 0.2902
        assert_eq!(texts.value, "29");
        assert_eq!(texts.saturation, "0");
    }

    #[test]
    fn test_labels_and_ranges() {
        assert_eq!(Field::ALL.len(), 7);
        assert_eq!(Field::Hex.range(), None);
        assert_eq!(Field::Hue.label(), "H");
    }
}
