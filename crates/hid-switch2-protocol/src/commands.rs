//! Pro Controller 2 wake-up command table.
//!
//! The Switch 2 controller family stays silent on USB until the console
//! has delivered an initialization sequence on the command interface.
//! The 17 commands below are a byte-exact protocol constant captured from
//! console-to-controller traffic; they are opaque vendor payloads and
//! must be reproduced bit-for-bit, never derived.
//!
//! The 0xFF runs inside the MAC/LTK commands are placeholders where the
//! real console inserts its pairing MAC address. The controller accepts
//! the static placeholder, so this implementation performs no live MAC
//! negotiation.

#![deny(static_mut_refs)]

/// Minimum pacing between consecutive wake-up commands.
pub const STEP_INTERVAL_MS: u64 = 50;

/// Starts HID output at 4 ms intervals; trailing bytes are the console
/// MAC placeholder.
pub const INIT_HID_OUTPUT: &[u8] = &[
    0x03, 0x91, 0x00, 0x0D, 0x00, 0x08, 0x00, 0x00, 0x01, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF,
];

pub const UNKNOWN_0X07: &[u8] = &[0x07, 0x91, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00];

pub const UNKNOWN_0X16: &[u8] = &[0x16, 0x91, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00];

pub const REQUEST_CONTROLLER_MAC: &[u8] = &[
    0x15, 0x91, 0x00, 0x01, 0x00, 0x0E, 0x00, 0x00, 0x00, 0x02, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Long-term-key exchange request; key bytes are static placeholders.
pub const LTK_REQUEST: &[u8] = &[
    0x15, 0x91, 0x00, 0x02, 0x00, 0x11, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

pub const UNKNOWN_0X15_ARG3: &[u8] = &[0x15, 0x91, 0x00, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00];

pub const UNKNOWN_0X09: &[u8] = &[
    0x09, 0x91, 0x00, 0x07, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
];

pub const IMU_ENABLE_STAGE1: &[u8] = &[
    0x0C, 0x91, 0x00, 0x02, 0x00, 0x04, 0x00, 0x00, 0x27, 0x00, 0x00, 0x00,
];

pub const UNKNOWN_0X11: &[u8] = &[0x11, 0x91, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00];

pub const UNKNOWN_0X0A: &[u8] = &[
    0x0A, 0x91, 0x00, 0x08, 0x00, 0x14, 0x00, 0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0x35, 0x00, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub const IMU_ENABLE_STAGE2: &[u8] = &[
    0x0C, 0x91, 0x00, 0x04, 0x00, 0x04, 0x00, 0x00, 0x27, 0x00, 0x00, 0x00,
];

pub const ENABLE_HAPTICS: &[u8] = &[
    0x03, 0x91, 0x00, 0x0A, 0x00, 0x04, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00,
];

pub const UNKNOWN_0X10: &[u8] = &[0x10, 0x91, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00];

pub const UNKNOWN_0X01: &[u8] = &[0x01, 0x91, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00];

pub const UNKNOWN_0X03_SHORT: &[u8] = &[0x03, 0x91, 0x00, 0x01, 0x00, 0x00, 0x00];

pub const UNKNOWN_0X0A_ALT: &[u8] = &[
    0x0A, 0x91, 0x00, 0x02, 0x00, 0x04, 0x00, 0x00, 0x03, 0x00, 0x00,
];

pub const SET_PLAYER_LED: &[u8] = &[
    0x09, 0x91, 0x00, 0x07, 0x00, 0x08, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
];

/// The full wake-up sequence, in issue order.
pub const WAKEUP_SEQUENCE: [&[u8]; 17] = [
    INIT_HID_OUTPUT,
    UNKNOWN_0X07,
    UNKNOWN_0X16,
    REQUEST_CONTROLLER_MAC,
    LTK_REQUEST,
    UNKNOWN_0X15_ARG3,
    UNKNOWN_0X09,
    IMU_ENABLE_STAGE1,
    UNKNOWN_0X11,
    UNKNOWN_0X0A,
    IMU_ENABLE_STAGE2,
    ENABLE_HAPTICS,
    UNKNOWN_0X10,
    UNKNOWN_0X01,
    UNKNOWN_0X03_SHORT,
    UNKNOWN_0X0A_ALT,
    SET_PLAYER_LED,
];

/// Number of wake-up steps.
pub const WAKEUP_STEP_COUNT: u8 = WAKEUP_SEQUENCE.len() as u8;
