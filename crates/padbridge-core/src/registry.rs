//! Fixed-capacity per-slot device registry.
//!
//! One entry per transport-assigned device slot, holding the slot's
//! wake-up progress and its duplicate-report filter. Each entry sits
//! behind its own mutex so the report context and the transport context
//! never race on the same slot's read-modify-write cycles, and traffic on
//! different slots never contends.

use padbridge_hid_common::{DeviceWriter, IdentitySource, MonotonicClock};
use padbridge_hid_switch2_protocol::{
    SwitchProtocolError, SwitchProtocolResult, WakeupSequencer, WakeupState,
};
use parking_lot::Mutex;
use tracing::debug;

/// Maximum number of concurrently tracked devices, matching the
/// transport's concurrent device limit.
pub const MAX_DEVICE_SLOTS: usize = 4;

/// Largest report remembered by the duplicate filter. Longer reports
/// bypass the filter and are always forwarded.
pub const DEDUP_BUFFER_LEN: usize = 64;

struct SlotState {
    wakeup: WakeupState,
    last_report: [u8; DEDUP_BUFFER_LEN],
    last_report_len: Option<usize>,
}

impl SlotState {
    fn new() -> Self {
        Self {
            wakeup: WakeupState::new(),
            last_report: [0; DEDUP_BUFFER_LEN],
            last_report_len: None,
        }
    }

    fn reset(&mut self) {
        self.wakeup.reset();
        self.last_report_len = None;
    }
}

/// Registry of per-slot device state. One instance per running bridge,
/// owned by the embedding application and passed by reference; there is
/// no process-wide singleton.
pub struct DeviceRegistry {
    slots: [Mutex<SlotState>; MAX_DEVICE_SLOTS],
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            slots: [
                Mutex::new(SlotState::new()),
                Mutex::new(SlotState::new()),
                Mutex::new(SlotState::new()),
                Mutex::new(SlotState::new()),
            ],
        }
    }

    fn slot(&self, slot: u8) -> Option<&Mutex<SlotState>> {
        self.slots.get(slot as usize)
    }

    /// Whether the slot's wake-up sequence has finished.
    ///
    /// Out-of-range slots fail open (report complete) so an unexpected
    /// slot index never starves unrelated report traffic.
    pub fn is_wakeup_complete(&self, slot: u8) -> bool {
        match self.slot(slot) {
            Some(entry) => entry.lock().wakeup.is_complete(),
            None => true,
        }
    }

    /// Zero a slot on device disconnect. The reset is atomic with respect
    /// to both contexts: the lock is held for the whole wipe, so no
    /// decode or wake-up call can observe a half-reset slot.
    pub fn reset(&self, slot: u8) {
        if let Some(entry) = self.slot(slot) {
            entry.lock().reset();
            debug!(slot, "device slot reset");
        }
    }

    /// Advance the slot's wake-up sequence under the slot lock.
    ///
    /// # Errors
    ///
    /// [`SwitchProtocolError::InvalidSlot`] for out-of-range slots;
    /// transport errors bubble up from the sequencer with the slot left
    /// mid-sequence for a later retry.
    pub fn drive_wakeup(
        &self,
        slot: u8,
        identity: &dyn IdentitySource,
        writer: &mut dyn DeviceWriter,
        clock: &dyn MonotonicClock,
    ) -> SwitchProtocolResult<()> {
        let entry = self
            .slot(slot)
            .ok_or(SwitchProtocolError::InvalidSlot(slot))?;
        let mut guard = entry.lock();
        WakeupSequencer::drive(&mut guard.wakeup, identity.vid_pid(slot), writer, clock)
    }

    /// Check an inbound report against the slot's previous one and
    /// remember it. Returns true for an exact duplicate.
    ///
    /// Reports longer than [`DEDUP_BUFFER_LEN`] and reports for
    /// out-of-range slots are never treated as duplicates.
    pub fn is_duplicate_and_remember(&self, slot: u8, report: &[u8]) -> bool {
        let Some(entry) = self.slot(slot) else {
            return false;
        };
        if report.len() > DEDUP_BUFFER_LEN {
            return false;
        }

        let mut guard = entry.lock();
        if guard.last_report_len == Some(report.len())
            && guard.last_report[..report.len()] == *report
        {
            return true;
        }

        guard.last_report[..report.len()].copy_from_slice(report);
        guard.last_report_len = Some(report.len());
        false
    }

    /// Snapshot of a slot's wake-up state, if the slot index is valid.
    pub fn wakeup_snapshot(&self, slot: u8) -> Option<WakeupState> {
        self.slot(slot).map(|entry| entry.lock().wakeup)
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
