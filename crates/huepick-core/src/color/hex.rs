//! Six digit hex encoding of RGB colors.
//!
//! The encoder always emits lowercase digits and the decoder accepts only
//! `0-9` and `a-f`. Uppercase input is rejected on purpose.

use super::Rgb;
use thiserror::Error;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Errors produced when decoding hex text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("invalid hex digit {character:?} at position {index}")]
    InvalidCharacter { index: usize, character: char },
    #[error("hex color needs 6 digits, got {len}")]
    TooShort { len: usize },
}

/// Encode a color as six lowercase hex digits, e.g. `"ff8000"`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let mut hex = String::with_capacity(6);
    for channel in [rgb.r, rgb.g, rgb.b] {
        hex.push(DIGITS[(channel >> 4) as usize] as char);
        hex.push(DIGITS[(channel & 0x0f) as usize] as char);
    }
    hex
}

/// Decode the first six characters of `text` into a color.
///
/// Every one of the six characters is validated before any channel is
/// assembled. Characters past the sixth are ignored.
pub fn hex_to_rgb(text: &str) -> Result<Rgb, HexError> {
    let mut nibbles = [0u8; 6];
    let mut len = 0;
    for (index, character) in text.chars().take(6).enumerate() {
        nibbles[index] =
            digit_value(character).ok_or(HexError::InvalidCharacter { index, character })?;
        len += 1;
    }
    if len < 6 {
        return Err(HexError::TooShort { len });
    }

    Ok(Rgb::new(
        nibbles[0] << 4 | nibbles[1],
        nibbles[2] << 4 | nibbles[3],
        nibbles[4] << 4 | nibbles[5],
    ))
}

fn digit_value(character: char) -> Option<u8> {
    match character {
        '0'..='9' => Some(character as u8 - b'0'),
        'a'..='f' => Some(character as u8 - b'a' + 10),
        _ => None,
    }
}
