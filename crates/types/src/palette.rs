//! Palette levels, on-tone choices, and opacity tokens.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A step in a palette family. `default` is accepted as an alias of `primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    L000,
    L050,
    L100,
    L200,
    L300,
    L400,
    L500,
    L600,
    L700,
    L800,
    L900,
    L1000,
    Primary,
}

impl Level {
    pub const ALL: [Level; 13] = [
        Level::L000,
        Level::L050,
        Level::L100,
        Level::L200,
        Level::L300,
        Level::L400,
        Level::L500,
        Level::L600,
        Level::L700,
        Level::L800,
        Level::L900,
        Level::L1000,
        Level::Primary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::L000 => "000",
            Level::L050 => "050",
            Level::L100 => "100",
            Level::L200 => "200",
            Level::L300 => "300",
            Level::L400 => "400",
            Level::L500 => "500",
            Level::L600 => "600",
            Level::L700 => "700",
            Level::L800 => "800",
            Level::L900 => "900",
            Level::L1000 => "1000",
            Level::Primary => "primary",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key == "default" {
            return Ok(Level::Primary);
        }
        Level::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == key)
            .ok_or_else(|| format!("Unknown palette level '{}'", s))
    }
}

impl Serialize for Level {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Foreground chosen to sit on top of a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnTone {
    Black,
    White,
}

impl OnTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnTone::Black => "black",
            OnTone::White => "white",
        }
    }
}

impl fmt::Display for OnTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One level of a palette family with its tone and the selector's on-tone choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteLevel {
    pub family: String,
    pub level: Level,
    pub tone: Rgb,
    pub on_tone: OnTone,
}

/// A named opacity value in `(0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpacityToken {
    pub name: String,
    pub value: f64,
}
