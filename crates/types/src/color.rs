use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Invalid hex color length in '{0}': expected 6 digits")]
    InvalidLength(String),

    #[error("Invalid hex digit in '{0}'")]
    InvalidDigit(String),
}

/// An opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Parses `#RRGGBB` or `RRGGBB`. Shorthand and alpha forms are rejected.
    pub fn from_hex(s: &str) -> Result<Rgb, ColorParseError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }
        if hex.len() != 6 {
            return Err(ColorParseError::InvalidLength(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Lenient hex lookup: `None` for anything that is not a six-digit hex color.
pub fn hex_to_rgb(s: &str) -> Option<Rgb> {
    Rgb::from_hex(s).ok()
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#808080"), Some(Rgb::gray(0x80)));
        assert_eq!(hex_to_rgb("ff0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("  #FFFFFF "), Some(Rgb::WHITE));
    }

    #[test]
    fn rejects_shorthand_and_garbage() {
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#ff000080"), None);
        assert_eq!(hex_to_rgb("#gg0000"), None);
        assert_eq!(hex_to_rgb("rgb(0,0,0)"), None);
        assert_eq!(hex_to_rgb("#ffé000"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    #[test]
    fn hex_round_trips_lowercase() {
        let c = Rgb::from_hex("#A1B2C3").unwrap();
        assert_eq!(c.to_hex(), "#a1b2c3");
    }

    #[test]
    fn deserializes_from_string() {
        let c: Rgb = serde_json::from_str("\"#000000\"").unwrap();
        assert_eq!(c, Rgb::BLACK);
        assert!(serde_json::from_str::<Rgb>("\"#00\"").is_err());
    }
}
