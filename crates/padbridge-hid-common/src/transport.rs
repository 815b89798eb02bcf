//! Transport-facing traits and their mock implementations.
//!
//! The protocol and pipeline crates never talk to USB directly: outbound
//! bytes go through [`DeviceWriter`], and the only device metadata the
//! core ever asks for is a slot's vendor/product pair via
//! [`IdentitySource`].

use crate::HidCommonResult;

/// Sink for outbound report and command buffers addressed to one device.
pub trait DeviceWriter: Send {
    /// Deliver one output report; returns the number of bytes accepted.
    fn write_output_report(&mut self, data: &[u8]) -> HidCommonResult<usize>;
}

/// Resolves a transport-assigned device slot to its USB identity.
pub trait IdentitySource: Send + Sync {
    /// `(vendor_id, product_id)` for the device in `slot`, if mounted.
    fn vid_pid(&self, slot: u8) -> Option<(u16, u16)>;
}

pub mod mock {
    use super::{DeviceWriter, IdentitySource};
    use crate::{HidCommonError, HidCommonResult};

    /// Recording writer with an optional injected failure point.
    pub struct MockDeviceWriter {
        writes: Vec<Vec<u8>>,
        fail_at: Option<usize>,
    }

    impl MockDeviceWriter {
        pub fn new() -> Self {
            Self {
                writes: Vec::new(),
                fail_at: None,
            }
        }

        /// Fail the Nth write (0-indexed) and every write after it until
        /// the failure point is cleared.
        pub fn fail_from(write_index: usize) -> Self {
            Self {
                writes: Vec::new(),
                fail_at: Some(write_index),
            }
        }

        pub fn clear_failure(&mut self) {
            self.fail_at = None;
        }

        pub fn writes(&self) -> &[Vec<u8>] {
            &self.writes
        }

        pub fn write_count(&self) -> usize {
            self.writes.len()
        }
    }

    impl Default for MockDeviceWriter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DeviceWriter for MockDeviceWriter {
        fn write_output_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
            if let Some(fail_at) = self.fail_at {
                if self.writes.len() >= fail_at {
                    return Err(HidCommonError::WriteError(
                        "injected transport failure".to_string(),
                    ));
                }
            }
            self.writes.push(data.to_vec());
            Ok(data.len())
        }
    }

    /// Identity table with fixed slot assignments.
    pub struct StaticIdentitySource {
        slots: Vec<Option<(u16, u16)>>,
    }

    impl StaticIdentitySource {
        pub fn empty(slot_count: usize) -> Self {
            Self {
                slots: vec![None; slot_count],
            }
        }

        pub fn with_device(mut self, slot: u8, vid: u16, pid: u16) -> Self {
            if let Some(entry) = self.slots.get_mut(slot as usize) {
                *entry = Some((vid, pid));
            }
            self
        }

        pub fn unplug(&mut self, slot: u8) {
            if let Some(entry) = self.slots.get_mut(slot as usize) {
                *entry = None;
            }
        }
    }

    impl IdentitySource for StaticIdentitySource {
        fn vid_pid(&self, slot: u8) -> Option<(u16, u16)> {
            self.slots.get(slot as usize).copied().flatten()
        }
    }
}
