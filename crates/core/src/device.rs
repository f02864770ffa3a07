//! Device model: discovery and lighting interface selection.

use crate::error::{Error, Result};
use crate::{HANBO_PID, LIGHTING_USAGE, LIGHTING_USAGE_PAGE, RAZER_VID};
use tracing::{debug, info};

/// Information about one HID interface of a connected cooler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub vid: u16,
    pub pid: u16,
    pub path: String,
    pub interface_number: i32,
    pub usage_page: u16,
    pub usage: u16,
    pub product: Option<String>,
    pub serial: Option<String>,
}

impl DeviceInfo {
    /// Whether this interface accepts lighting reports.
    pub fn is_lighting_interface(&self) -> bool {
        self.usage_page == LIGHTING_USAGE_PAGE && self.usage == LIGHTING_USAGE
    }

    /// Product string, or a generic name if the device reports none.
    pub fn display_name(&self) -> &str {
        self.product.as_deref().unwrap_or("Razer Hanbo")
    }

    /// One-line description for device listings.
    pub fn summary(&self) -> String {
        format!(
            "{} (VID: 0x{:04X}, PID: 0x{:04X}, interface: {}, usage: 0x{:04X}/0x{:02X}, serial: {}, path: {})",
            self.display_name(),
            self.vid,
            self.pid,
            self.interface_number,
            self.usage_page,
            self.usage,
            self.serial.as_deref().unwrap_or("n/a"),
            self.path
        )
    }
}

/// Pick the interface to send lighting reports to.
///
/// Prefers the vendor usage page interface; falls back to the first interface
/// on platforms that do not report usage pages.
pub fn select_lighting_interface(devices: &[DeviceInfo]) -> Result<&DeviceInfo> {
    devices
        .iter()
        .find(|d| d.is_lighting_interface())
        .or_else(|| devices.first())
        .ok_or_else(|| {
            Error::DeviceNotFound(format!(
                "no device with VID=0x{RAZER_VID:04X} PID=0x{HANBO_PID:04X}"
            ))
        })
}

/// Classify a failed open from the error messages of every attempt.
///
/// A permission problem in any attempt wins over "not found", so a refused
/// path open is not masked by a later fallback failure.
pub fn open_error(info: &DeviceInfo, attempts: &[String]) -> Error {
    let msg = format!(
        "open HID device (VID=0x{:04X} PID=0x{:04X}): {}",
        info.vid,
        info.pid,
        attempts.join("; ")
    );
    let denied = attempts.iter().any(|attempt| {
        let lower = attempt.to_lowercase();
        lower.contains("permission") || lower.contains("access denied")
    });
    if denied {
        Error::PermissionDenied(msg)
    } else {
        Error::DeviceNotFound(msg)
    }
}

/// Discover all HID interfaces of connected Hanbo coolers.
pub fn discover_devices() -> Result<Vec<DeviceInfo>> {
    debug!("Starting HID device enumeration");
    let api = hidapi::HidApi::new().map_err(|e| Error::Hid(e.to_string()))?;
    Ok(discover_in(&api))
}

/// Discover Hanbo interfaces using an existing hidapi context.
pub fn discover_in(api: &hidapi::HidApi) -> Vec<DeviceInfo> {
    let mut devices = Vec::new();
    for info in api.device_list() {
        if info.vendor_id() != RAZER_VID || info.product_id() != HANBO_PID {
            continue;
        }

        info!(
            vid = format_args!("0x{:04X}", info.vendor_id()),
            pid = format_args!("0x{:04X}", info.product_id()),
            interface = info.interface_number(),
            usage_page = format_args!("0x{:04X}", info.usage_page()),
            usage = info.usage(),
            path = %info.path().to_string_lossy(),
            "Found Hanbo interface"
        );
        devices.push(DeviceInfo {
            vid: info.vendor_id(),
            pid: info.product_id(),
            path: info.path().to_string_lossy().into_owned(),
            interface_number: info.interface_number(),
            usage_page: info.usage_page(),
            usage: info.usage(),
            product: info.product_string().map(|s| s.to_string()),
            serial: info.serial_number().map(|s| s.to_string()),
        });
    }

    debug!(count = devices.len(), "Device enumeration complete");
    devices
}
