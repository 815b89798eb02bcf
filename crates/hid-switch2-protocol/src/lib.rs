//! Nintendo Switch controller HID protocol: report classification and
//! decoding, output encoding, and the Pro Controller 2 wake-up sequence.
//!
//! This crate is intentionally I/O-free. It provides pure functions and
//! types that can be tested and fuzzed without hardware or OS-level HID
//! plumbing; the only side-effectful path is the wake-up sequencer, which
//! writes through the `DeviceWriter` trait from `padbridge-hid-common`.
//!
//! ## Verification sources
//!
//! Report layouts and the wake-up command table were cross-referenced
//! against community USB captures of the Switch 2 controller family:
//! - Report ID 0x05 (Pro Controller 2): 32-bit button field at offset 4,
//!   12-bit packed sticks at offsets 10/13.
//! - Report ID 0x30 (Switch Pro): 16-bit button field at offset 1, D-pad
//!   nibble at offset 3, 12-bit packed sticks at offsets 4/7.
//! - The 17-command wake-up sequence sent on USB interface 1, as captured
//!   from console-to-controller traffic.

#![deny(static_mut_refs)]

pub mod classify;
pub mod commands;
pub mod handshake;
pub mod ids;
pub mod input;
pub mod output;
pub mod types;

// Flat re-exports so callers can use `padbridge_hid_switch2_protocol::Foo`.
pub use classify::{InterfaceKind, ReportKind, classify_report, decode_report};
pub use commands::{STEP_INTERVAL_MS, WAKEUP_SEQUENCE, WAKEUP_STEP_COUNT};
pub use handshake::{ModelCheck, WakeupSequencer, WakeupState};
pub use ids::{COMMAND_INTERFACE, NINTENDO_VENDOR_ID, Switch2Model, identify_model, needs_wakeup, product_ids};
pub use input::{
    downscale_axis, parse_bridge_report, parse_generic_report, parse_pro2_report, parse_pro_report,
    unpack_stick,
};
pub use output::{
    BRIDGE_REPORT_LEN, GENERIC_REPORT_LEN, build_generic_report, build_switch_report,
    neutral_generic_report, neutral_switch_report,
};
pub use types::{ButtonSet, DpadDirection, PadButton, PadState, StickPosition};

use padbridge_hid_common::HidCommonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwitchProtocolError {
    #[error("Transport rejected wake-up step {step}: {source}")]
    Transport {
        step: u8,
        #[source]
        source: HidCommonError,
    },

    #[error("Invalid device slot: {0}")]
    InvalidSlot(u8),
}

pub type SwitchProtocolResult<T> = Result<T, SwitchProtocolError>;
