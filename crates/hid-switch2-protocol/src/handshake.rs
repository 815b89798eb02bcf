//! Wake-up sequencer: per-slot state machine that delivers the Pro
//! Controller 2 initialization commands.
//!
//! Lifecycle per device slot:
//!
//! ```text
//! Unchecked ──identity mismatch──► complete (no-op success, 0 commands)
//!     │
//!     └──target confirmed──► issuing steps 0..17 ──all issued──► complete
//! ```
//!
//! Committed policy: the full 17-command sequence is issued as one paced
//! synchronous burst ([`STEP_INTERVAL_MS`] between steps). Completion
//! means all steps were accepted by the transport. The historical
//! single-command + 500 ms-timeout variant is not implemented.
//!
//! On transport failure the sequencer stops at the failing step and
//! surfaces the error; steps already delivered keep their credit, and a
//! later `drive` call resumes from the failed step. There is no internal
//! retry. `complete` is absorbing until the slot is reset on disconnect.

#![deny(static_mut_refs)]

use crate::commands::{STEP_INTERVAL_MS, WAKEUP_SEQUENCE, WAKEUP_STEP_COUNT};
use crate::ids::needs_wakeup;
use crate::{SwitchProtocolError, SwitchProtocolResult};
use padbridge_hid_common::{DeviceWriter, MonotonicClock};
use tracing::{debug, info, warn};

/// Result of the one-time identity check for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelCheck {
    /// No identity lookup has run for this slot yet.
    #[default]
    Unchecked,
    /// The slot holds a Pro Controller 2; the sequence applies.
    Confirmed,
    /// Some other device; the sequence is skipped permanently.
    NotTarget,
}

/// Per-slot wake-up progress. Owned by the device registry; only the
/// sequencer mutates it.
#[derive(Debug, Clone, Copy, Default)]
pub struct WakeupState {
    model: ModelCheck,
    steps_issued: u8,
    last_issue_ms: u64,
    complete: bool,
}

impl WakeupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero the slot on disconnect so the next connect re-runs the
    /// identity check from scratch.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn model(&self) -> ModelCheck {
        self.model
    }

    /// Number of commands delivered so far; monotone until reset.
    pub fn steps_issued(&self) -> u8 {
        self.steps_issued
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Drives [`WakeupState`] values through the command sequence.
///
/// Stateless by itself; all per-device state lives in the registry slot
/// so concurrent devices never share progress.
pub struct WakeupSequencer;

impl WakeupSequencer {
    /// Return true when `identity` is a model that requires waking.
    pub fn is_target(identity: Option<(u16, u16)>) -> bool {
        match identity {
            Some((vid, pid)) => needs_wakeup(vid, pid),
            None => false,
        }
    }

    /// Advance a slot's wake-up sequence as far as it will go.
    ///
    /// Re-entrant and idempotent: a completed slot is a no-op, a
    /// non-target slot completes immediately with zero commands issued,
    /// and a slot that previously failed mid-sequence resumes at the
    /// first unissued step.
    ///
    /// # Errors
    ///
    /// [`SwitchProtocolError::Transport`] when the writer rejects a step;
    /// the slot stays mid-sequence and is eligible for a later re-drive.
    pub fn drive(
        state: &mut WakeupState,
        identity: Option<(u16, u16)>,
        writer: &mut dyn DeviceWriter,
        clock: &dyn MonotonicClock,
    ) -> SwitchProtocolResult<()> {
        if state.complete {
            return Ok(());
        }

        if state.model == ModelCheck::Unchecked {
            if Self::is_target(identity) {
                state.model = ModelCheck::Confirmed;
                info!(?identity, "wake-up target confirmed; starting sequence");
            } else {
                // Not the target model: mark done so the slot is never
                // revisited until it is reset on disconnect.
                state.model = ModelCheck::NotTarget;
                state.complete = true;
                debug!(?identity, "not a wake-up target; slot marked complete");
                return Ok(());
            }
        }

        while state.steps_issued < WAKEUP_STEP_COUNT {
            let step = state.steps_issued;
            let payload = WAKEUP_SEQUENCE[step as usize];

            if step > 0 {
                Self::pace(state, clock);
            }

            if let Err(source) = writer.write_output_report(payload) {
                warn!(step, "wake-up step rejected by transport");
                return Err(SwitchProtocolError::Transport { step, source });
            }

            state.steps_issued = step + 1;
            state.last_issue_ms = clock.now_ms();
            debug!(
                step,
                len = payload.len(),
                command = format_args!("0x{:02X}", payload[0]),
                "wake-up step issued"
            );
        }

        state.complete = true;
        info!(steps = WAKEUP_STEP_COUNT, "wake-up sequence complete");
        Ok(())
    }

    /// Enforce the minimum inter-step interval, also across re-entry
    /// after a transport failure.
    fn pace(state: &WakeupState, clock: &dyn MonotonicClock) {
        let elapsed = clock.now_ms().saturating_sub(state.last_issue_ms);
        if elapsed < STEP_INTERVAL_MS {
            clock.sleep_ms(STEP_INTERVAL_MS - elapsed);
        }
    }
}
