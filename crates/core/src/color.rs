//! RGB color parsing.

use crate::error::{Error, Result};
use serde::Serialize;
use std::str::FromStr;

/// An RGB color as entered by the user.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-LED byte order expected by the device.
    pub fn grb(&self) -> [u8; 3] {
        [self.g, self.r, self.b]
    }
}

/// Parse a `#RRGGBB` color (hex digits are case-insensitive).
pub fn parse_color(text: &str) -> Result<Color> {
    let invalid = || Error::InvalidColor(text.to_string());

    let digits = text.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let component = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color {
        r: component(0)?,
        g: component(2)?,
        b: component(4)?,
    })
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
