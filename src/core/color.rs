// iconforge - core/color.rs
//
// Brand colours: hex parsing and conversion to image pixels.

use crate::util::error::ColorError;
use image::Rgba;
use serde::Deserialize;
use std::fmt;

/// An opaque sRGB colour used as an icon background.
///
/// Deserialises from a hex string so palettes can be written as
/// `primary = "#2E88F6"` in iconforge.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct BrandColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BrandColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `RRGGBB` or the short `#RGB` form (case-insensitive).
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex {
            value: value.to_string(),
        };

        let digits = value.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #ABC expands to #AABBCC.
                let nibble = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Fully opaque RGBA pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, u8::MAX])
    }
}

impl TryFrom<String> for BrandColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl fmt::Display for BrandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let c = BrandColor::from_hex("#2E88F6").unwrap();
        assert_eq!(c, BrandColor::new(0x2E, 0x88, 0xF6));
        assert_eq!(c.to_rgba(), Rgba([0x2E, 0x88, 0xF6, 255]));
    }

    #[test]
    fn test_parse_without_hash_and_lowercase() {
        assert_eq!(
            BrandColor::from_hex("ff9f43").unwrap(),
            BrandColor::new(0xFF, 0x9F, 0x43)
        );
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(
            BrandColor::from_hex("#f0a").unwrap(),
            BrandColor::new(0xFF, 0x00, 0xAA)
        );
    }

    #[test]
    fn test_rejects_garbage() {
        for bad in ["", "#", "#12345", "#GGGGGG", "blue", "#2E88F6FF", "#+12345"] {
            assert!(
                BrandColor::from_hex(bad).is_err(),
                "'{bad}' should not parse as a colour"
            );
        }
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(BrandColor::new(0x4c, 0xaf, 0x50).to_string(), "#4CAF50");
    }
}
