//! `hidapi`-backed implementations of the transport traits.
//!
//! This is the only module in the workspace that links against a real HID
//! stack. Embedded deployments substitute their own `DeviceWriter`; on a
//! desktop host this adapter is enough to drive a controller end to end.

use crate::transport::DeviceWriter;
use crate::{HidCommonError, HidCommonResult};
use tracing::debug;

/// [`DeviceWriter`] over an open `hidapi` device handle.
pub struct HidapiWriter {
    device: hidapi::HidDevice,
}

impl HidapiWriter {
    pub fn new(device: hidapi::HidDevice) -> Self {
        Self { device }
    }

    /// Open the first enumerated device matching `vid:pid`.
    ///
    /// # Errors
    ///
    /// Returns [`HidCommonError::DeviceNotFound`] when no matching device
    /// is present or the OS refuses to open it.
    pub fn open(api: &hidapi::HidApi, vid: u16, pid: u16) -> HidCommonResult<Self> {
        let device = api
            .open(vid, pid)
            .map_err(|e| HidCommonError::DeviceNotFound(format!("{vid:04X}:{pid:04X}: {e}")))?;
        debug!(vid = format_args!("{vid:04X}"), pid = format_args!("{pid:04X}"), "opened HID device");
        Ok(Self { device })
    }
}

impl DeviceWriter for HidapiWriter {
    fn write_output_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        self.device
            .write(data)
            .map_err(|e| HidCommonError::WriteError(e.to_string()))
    }
}
