//! Safety layer: validates user-supplied values before any payload is built.
//!
//! # Brightness
//! - **Range**: 0 – 100 (percent)
//! - Out-of-range values are rejected, never clamped.
//!
//! # Invariants
//! 1. A [`Brightness`] can only be obtained through [`validate_brightness`].
//! 2. Validation happens once per command, before any channel is encoded,
//!    so an invalid value never reaches the device for any channel.

use crate::error::{Error, Result};
use serde::Serialize;

/// Brightness constraints.
pub const BRIGHTNESS_MIN: u8 = 0;
pub const BRIGHTNESS_MAX: u8 = 100;

/// A brightness percentage known to be within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Brightness(u8);

impl Brightness {
    /// Raw percentage value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Brightness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a brightness percentage.
pub fn validate_brightness(value: i64) -> Result<Brightness> {
    if !(BRIGHTNESS_MIN as i64..=BRIGHTNESS_MAX as i64).contains(&value) {
        return Err(Error::OutOfRange {
            field: "brightness",
            value,
            min: BRIGHTNESS_MIN as i64,
            max: BRIGHTNESS_MAX as i64,
        });
    }
    Ok(Brightness(value as u8))
}
