//! RGB hex colors and shade generation for chart series.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Brightness factor applied to the first generated shade.
const SHADE_BASE_FACTOR: f64 = 0.7;
/// Brightness added per shade index.
const SHADE_STEP: f64 = 0.15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    Malformed(String),
}

/// A 24-bit RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Malformed`] unless the input is exactly six hex
    /// digits after an optional leading `#`.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Malformed(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::Malformed(s.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Scale every channel by `factor`, flooring and saturating at 255.
    #[must_use]
    pub fn shade(self, factor: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scale = |c: u8| (f64::from(c) * factor).floor().clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Generate `count` progressively lighter shades of `base`.
///
/// Shade `i` applies a factor of `0.7 + i * 0.15` to each channel, so the
/// first entry is darker than `base` and index 2 reproduces it.
#[must_use]
pub fn generate_colors(count: usize, base: HexColor) -> Vec<HexColor> {
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let factor = SHADE_BASE_FACTOR + (i as f64) * SHADE_STEP;
            base.shade(factor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> HexColor {
        HexColor::parse("#10a37f").unwrap()
    }

    #[test]
    fn parse_with_and_without_hash() {
        assert_eq!(HexColor::parse("#10a37f").unwrap(), HexColor::new(0x10, 0xa3, 0x7f));
        assert_eq!(HexColor::parse("10A37F").unwrap(), HexColor::new(0x10, 0xa3, 0x7f));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in ["", "#", "#10a37", "#10a37f0", "#10a37g", "red", "##10a37f", "#1०a37f"] {
            assert!(HexColor::parse(bad).is_err(), "expected {bad:?} to be rejected");
        }
    }

    #[test]
    fn display_is_lowercase_with_hash() {
        assert_eq!(HexColor::parse("4285F4").unwrap().to_string(), "#4285f4");
    }

    #[test]
    fn generate_colors_is_deterministic() {
        assert_eq!(generate_colors(4, base()), generate_colors(4, base()));
    }

    #[test]
    fn first_shade_applies_base_factor_per_channel() {
        // 0x10*0.7=11.2, 0xa3*0.7=114.1, 0x7f*0.7=88.9 -> floor each
        let colors = generate_colors(4, base());
        assert_eq!(colors[0].to_string(), "#0b7258");
        assert_eq!(colors[1].to_string(), "#0d8a6b");
    }

    #[test]
    fn shades_get_lighter_with_index() {
        let colors = generate_colors(4, base());
        for pair in colors.windows(2) {
            assert!(pair[0].g < pair[1].g, "expected increasing brightness: {pair:?}");
        }
    }

    #[test]
    fn shades_saturate_at_255() {
        let colors = generate_colors(5, HexColor::new(200, 200, 200));
        assert_eq!(colors[4], HexColor::new(255, 255, 255));
    }

    #[test]
    fn zero_count_yields_no_colors() {
        assert!(generate_colors(0, base()).is_empty());
    }

    #[test]
    fn serde_round_trips_through_string() {
        let json = serde_json::to_string(&base()).unwrap();
        assert_eq!(json, "\"#10a37f\"");
        let parsed: HexColor = serde_json::from_str("\"#6c54d8\"").unwrap();
        assert_eq!(parsed, HexColor::new(0x6c, 0x54, 0xd8));
        assert!(serde_json::from_str::<HexColor>("\"#xyz\"").is_err());
    }
}
