//! HID transport abstraction for device communication.
//!
//! Provides a trait-based transport layer so that real HID devices and
//! mock devices share the same interface.

use crate::command::PlannedWrite;
use crate::error::{Error, Result};
use tracing::{debug, trace, warn};

/// Abstraction over a raw HID output report write.
pub trait HidTransport: Send {
    /// Write one raw report (report number included) and return the bytes accepted.
    fn write_report(&self, data: &[u8]) -> Result<usize>;
}

/// Write planned reports one at a time, in order.
///
/// `on_write` is called before each report is sent. Stops at the first
/// failure with [`Error::BatchWrite`] carrying the number of reports already
/// written; those keep their new state, nothing is retried or rolled back.
/// Returns the number of reports written.
pub fn apply_plan(
    transport: &dyn HidTransport,
    plan: &[PlannedWrite],
    mut on_write: impl FnMut(&PlannedWrite),
) -> Result<usize> {
    for (written, write) in plan.iter().enumerate() {
        on_write(write);
        let bytes = write.payload.as_bytes();
        trace!(
            channel = %write.channel,
            len = bytes.len(),
            report_hex = format_args!("{:02X?}", bytes),
            "Lighting TX"
        );

        let result = transport.write_report(bytes).and_then(|n| {
            if n < bytes.len() {
                Err(Error::Hid(format!(
                    "short write: {} of {} bytes accepted",
                    n,
                    bytes.len()
                )))
            } else {
                Ok(n)
            }
        });

        if let Err(e) = result {
            warn!(
                channel = %write.channel,
                already_applied = written,
                remaining = plan.len() - written,
                "Lighting write failed; earlier reports stay applied"
            );
            return Err(Error::BatchWrite {
                channel: write.channel,
                applied: written,
                total: plan.len(),
                source: Box::new(e),
            });
        }
    }

    debug!(count = plan.len(), "Lighting plan applied");
    Ok(plan.len())
}

/// A mock HID transport for testing.
///
/// Records every write and can be configured to fail on a given write.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Mock transport that records written reports.
    pub struct MockTransport {
        writes: Mutex<Vec<Vec<u8>>>,
        fail_on: Option<usize>,
        accept_len: Option<usize>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self {
                writes: Mutex::new(Vec::new()),
                fail_on: None,
                accept_len: None,
            }
        }

        /// Fail the write with the given zero-based index.
        pub fn failing_on(index: usize) -> Self {
            Self {
                fail_on: Some(index),
                ..Self::new()
            }
        }

        /// Report only `len` bytes accepted per write.
        pub fn accepting(len: usize) -> Self {
            Self {
                accept_len: Some(len),
                ..Self::new()
            }
        }

        /// Reports successfully written so far.
        pub fn writes(&self) -> Vec<Vec<u8>> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl HidTransport for MockTransport {
        fn write_report(&self, data: &[u8]) -> Result<usize> {
            let mut writes = self.writes.lock().unwrap();
            if self.fail_on == Some(writes.len()) {
                return Err(Error::Hid(format!(
                    "mock: write {} rejected",
                    writes.len()
                )));
            }
            writes.push(data.to_vec());
            Ok(self.accept_len.unwrap_or(data.len()))
        }
    }
}
