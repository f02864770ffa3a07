//! hanbo-core: channel registry, lighting protocol encoding, and device discovery.
//!
//! This crate builds the vendor lighting reports for the Razer Hanbo liquid
//! cooler (pump head plus up to three fans) and writes them over USB HID.

pub mod channel;
pub mod color;
pub mod command;
pub mod device;
pub mod error;
pub mod protocol;
pub mod safety;
pub mod transport;

/// Razer USB Vendor ID.
pub const RAZER_VID: u16 = 0x1532;

/// Razer Hanbo product ID.
pub const HANBO_PID: u16 = 0x0F35;

/// Vendor usage page of the lighting interface.
pub const LIGHTING_USAGE_PAGE: u16 = 0xFF00;

/// Usage of the lighting interface.
pub const LIGHTING_USAGE: u16 = 0x01;
