//! Outbound gamepad report encoding.
//!
//! Encoders are pure functions over [`PadState`] and are deliberately
//! decoupled from the decoders: any canonical state encodes correctly no
//! matter which wire format produced it. The 12-bit → 8-bit stick
//! precision lost upstream is not recovered here.

#![deny(static_mut_refs)]

use crate::types::{PadState, StickPosition};

/// Wire size of the emulated Switch-compatible gamepad report.
///
/// HORIPAD-style layout: 16-bit button field, hat byte, four 8-bit axes,
/// one trailing vendor byte.
pub const BRIDGE_REPORT_LEN: usize = 8;

/// Wire size of the generic USB gamepad report: 16-bit button field, hat
/// nibble plus padding, four 8-bit axes.
pub const GENERIC_REPORT_LEN: usize = 7;

/// Encode a canonical state as an emulated Switch gamepad report.
pub fn build_switch_report(state: &PadState) -> [u8; BRIDGE_REPORT_LEN] {
    let buttons = state.buttons.raw().to_le_bytes();
    [
        buttons[0],
        buttons[1],
        state.dpad.to_nibble(),
        state.left_stick.x,
        state.left_stick.y,
        state.right_stick.x,
        state.right_stick.y,
        0x00,
    ]
}

/// Encode a canonical state as a generic 7-byte gamepad report.
pub fn build_generic_report(state: &PadState) -> [u8; GENERIC_REPORT_LEN] {
    let buttons = state.buttons.raw().to_le_bytes();
    [
        buttons[0],
        buttons[1],
        state.dpad.to_nibble() & 0x0F,
        state.left_stick.x,
        state.left_stick.y,
        state.right_stick.x,
        state.right_stick.y,
    ]
}

/// Neutral emulated-Switch report: all released, hat centered, axes 128.
///
/// The console expects one of these immediately after enumeration.
pub fn neutral_switch_report() -> [u8; BRIDGE_REPORT_LEN] {
    build_switch_report(&PadState::neutral())
}

/// Neutral generic gamepad report.
pub fn neutral_generic_report() -> [u8; GENERIC_REPORT_LEN] {
    build_generic_report(&PadState::neutral())
}
