//! Hex color value type
//!
//! `HexColor` is the parsed form of the `#rrggbb` strings the UI trades
//! in. Parsing is strict: a leading `#`, exactly six digits, every digit
//! hexadecimal (either case). Formatting is always lowercase, so a value
//! round-trips through its own `Display` output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An RGB color parsed from `#rrggbb` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl HexColor {
    /// Create a color directly from channel values
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string (digits may be either case).
    ///
    /// Rejections carry the first failed check: missing `#`, wrong
    /// length, then the first non-hex digit position.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        if !input.starts_with('#') {
            return Err(ColorError::MissingHash);
        }
        let bytes = input.as_bytes();
        if bytes.len() != 7 {
            return Err(ColorError::BadLength(bytes.len()));
        }

        let mut channels = [0u8; 3];
        for (i, pair) in bytes[1..].chunks_exact(2).enumerate() {
            let hi = hex_value(pair[0]).ok_or(ColorError::InvalidDigit(1 + i * 2))?;
            let lo = hex_value(pair[1]).ok_or(ColorError::InvalidDigit(2 + i * 2))?;
            channels[i] = (hi << 4) | lo;
        }

        Ok(Self {
            r: channels[0],
            g: channels[1],
            b: channels[2],
        })
    }

    /// Perceived brightness in 0.0..=1.0 (Rec. 601 weights)
    pub fn luminance(&self) -> f32 {
        (f32::from(self.r) * 0.299 + f32::from(self.g) * 0.587 + f32::from(self.b) * 0.114)
            / 255.0
    }

    /// Whether light text reads better on this color than dark text
    pub fn is_dark(&self) -> bool {
        self.luminance() < 0.5
    }
}

/// Value of a single hex digit byte, if it is one
fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|v| v as u8)
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

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
