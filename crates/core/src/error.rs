//! Error types for hanbo-core.

use crate::channel::Channel;
use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Channel or channel group name not present in the registry.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    /// Value out of the accepted range.
    #[error("value out of range: {field} = {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Color string not of the form `#RRGGBB`.
    #[error("invalid color '{0}' (expected #RRGGBB)")]
    InvalidColor(String),

    /// No cooler with the expected vendor/product ID is connected.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// HID device communication failure.
    #[error("HID error: {0}")]
    Hid(String),

    /// Permission denied while opening the device (udev rules, exclusive access).
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A report in a batch failed after `applied` earlier reports were written.
    #[error("writing to '{channel}' failed after {applied} of {total} reports: {source}")]
    BatchWrite {
        channel: Channel,
        applied: usize,
        total: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Whether this error was caused by user input rather than the device.
    ///
    /// Input errors are always raised before the first write of a batch.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::UnknownChannel(_) | Self::OutOfRange { .. } | Self::InvalidColor(_)
        )
    }

    /// What the device holds after a failed batch, for user-facing output.
    ///
    /// Reports written before the failure are not rolled back.
    pub fn partial_update_note(&self) -> Option<String> {
        match self {
            Self::BatchWrite { applied: 0, .. } => {
                Some("nothing was written to the device".to_string())
            }
            Self::BatchWrite { applied, total, .. } => Some(format!(
                "{applied} of {total} reports were already applied and stay on the device"
            )),
            _ => None,
        }
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_classified() {
        assert!(Error::UnknownChannel("fan9".into()).is_user_input());
        assert!(Error::InvalidColor("#FFF".into()).is_user_input());
        assert!(Error::OutOfRange {
            field: "brightness",
            value: 101,
            min: 0,
            max: 100,
        }
        .is_user_input());
    }

    #[test]
    fn transport_errors_are_not_input_errors() {
        assert!(!Error::DeviceNotFound("Hanbo".into()).is_user_input());
        assert!(!Error::Hid("write failed".into()).is_user_input());
        assert!(!Error::PermissionDenied("access denied".into()).is_user_input());
    }

    fn batch_error(applied: usize) -> Error {
        Error::BatchWrite {
            channel: Channel::Fan2,
            applied,
            total: 4,
            source: Box::new(Error::Hid("write: broken pipe".into())),
        }
    }

    #[test]
    fn batch_error_with_nothing_applied() {
        let err = batch_error(0);
        assert!(!err.is_user_input());
        assert_eq!(
            err.partial_update_note().as_deref(),
            Some("nothing was written to the device")
        );
    }

    #[test]
    fn batch_error_reports_applied_count() {
        let err = batch_error(2);
        assert_eq!(
            err.to_string(),
            "writing to 'fan-2' failed after 2 of 4 reports: HID error: write: broken pipe"
        );
        assert_eq!(
            err.partial_update_note().as_deref(),
            Some("2 of 4 reports were already applied and stay on the device")
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn other_errors_have_no_partial_note() {
        assert_eq!(Error::Hid("x".into()).partial_update_note(), None);
    }

    #[test]
    fn out_of_range_message_names_bounds() {
        let err = Error::OutOfRange {
            field: "brightness",
            value: -1,
            min: 0,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "value out of range: brightness = -1 (allowed 0..=100)"
        );
    }
}
