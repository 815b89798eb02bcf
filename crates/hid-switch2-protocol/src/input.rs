//! Inbound HID report decoding.
//!
//! All decoders are pure `&[u8] -> Option<PadState>` functions. Undersized
//! or mismatched input yields `None`; a decoder never returns a partially
//! populated state.

#![deny(static_mut_refs)]

use crate::output::BRIDGE_REPORT_LEN;
use crate::types::{ButtonSet, DpadDirection, PadButton, PadState, StickPosition};
use padbridge_hid_common::ReportCursor;

/// Report ID of the Pro Controller 2 standard input report.
pub const PRO2_REPORT_ID: u8 = 0x05;
/// Report ID of the first-generation Pro Controller standard input report.
pub const PRO_REPORT_ID: u8 = 0x30;

/// Minimum length for a decodable Pro Controller 2 report.
pub const PRO2_MIN_LEN: usize = 16;
/// Minimum length for a decodable Pro Controller report.
pub const PRO_MIN_LEN: usize = 12;

/// Downscale a 12-bit axis sample (0–4095) to the canonical 8-bit range.
///
/// Deliberate truncation, not rounding: `0x0FFF >> 4 == 255` and the
/// quantization error is bounded by one 16-unit step.
pub const fn downscale_axis(raw: u16) -> u8 {
    ((raw & 0x0FFF) >> 4) as u8
}

/// Unpack two 12-bit axis values from the 3-byte packed stick encoding at
/// `offset`. Returns `None` when the buffer is too short.
pub fn unpack_stick(data: &[u8], offset: usize) -> Option<(u16, u16)> {
    let bytes = data.get(offset..offset + 3)?;
    let x = u16::from(bytes[0]) | (u16::from(bytes[1] & 0x0F) << 8);
    let y = u16::from(bytes[1] >> 4) | (u16::from(bytes[2]) << 4);
    Some((x, y))
}

fn packed_stick_position(data: &[u8], offset: usize) -> Option<StickPosition> {
    let (x, y) = unpack_stick(data, offset)?;
    Some(StickPosition::new(downscale_axis(x), downscale_axis(y)))
}

/// Pro Controller 2 button bit assignments within the 32-bit field at
/// report offset 4 (little-endian).
mod pro2_bits {
    pub const Y: u32 = 0x0000_0001;
    pub const X: u32 = 0x0000_0002;
    pub const B: u32 = 0x0000_0004;
    pub const A: u32 = 0x0000_0008;
    pub const R: u32 = 0x0000_0040;
    pub const ZR: u32 = 0x0000_0080;
    pub const MINUS: u32 = 0x0000_0100;
    pub const PLUS: u32 = 0x0000_0200;
    pub const RIGHT_STICK: u32 = 0x0000_0400;
    pub const LEFT_STICK: u32 = 0x0000_0800;
    pub const HOME: u32 = 0x0000_1000;
    pub const CAPTURE: u32 = 0x0000_2000;
    pub const DPAD_DOWN: u32 = 0x0001_0000;
    pub const DPAD_UP: u32 = 0x0002_0000;
    pub const DPAD_RIGHT: u32 = 0x0004_0000;
    pub const DPAD_LEFT: u32 = 0x0008_0000;
    pub const L: u32 = 0x0040_0000;
    pub const ZL: u32 = 0x0080_0000;
}

const PRO2_BUTTON_MAP: [(u32, PadButton); 14] = [
    (pro2_bits::Y, PadButton::Y),
    (pro2_bits::X, PadButton::X),
    (pro2_bits::B, PadButton::B),
    (pro2_bits::A, PadButton::A),
    (pro2_bits::R, PadButton::R),
    (pro2_bits::ZR, PadButton::Zr),
    (pro2_bits::MINUS, PadButton::Minus),
    (pro2_bits::PLUS, PadButton::Plus),
    (pro2_bits::RIGHT_STICK, PadButton::RightStick),
    (pro2_bits::LEFT_STICK, PadButton::LeftStick),
    (pro2_bits::HOME, PadButton::Home),
    (pro2_bits::CAPTURE, PadButton::Capture),
    (pro2_bits::L, PadButton::L),
    (pro2_bits::ZL, PadButton::Zl),
];

/// Decode a Pro Controller 2 standard input report (ID 0x05, len ≥ 16).
///
/// Layout: 32-bit LE button field at bytes 4–7 with one bit per cardinal
/// D-pad direction, 12-bit packed sticks at offsets 10 (left) and 13
/// (right).
pub fn parse_pro2_report(data: &[u8]) -> Option<PadState> {
    if data.len() < PRO2_MIN_LEN || data.first().copied() != Some(PRO2_REPORT_ID) {
        return None;
    }

    let mut cursor = ReportCursor::new(data);
    cursor.skip(4);
    let field = cursor.read_u32_le().ok()?;

    let mut buttons = ButtonSet::EMPTY;
    for (bit, button) in PRO2_BUTTON_MAP {
        if field & bit != 0 {
            buttons.press(button);
        }
    }

    let dpad = DpadDirection::from_cardinals(
        field & pro2_bits::DPAD_UP != 0,
        field & pro2_bits::DPAD_DOWN != 0,
        field & pro2_bits::DPAD_LEFT != 0,
        field & pro2_bits::DPAD_RIGHT != 0,
    );

    Some(PadState {
        buttons,
        dpad,
        left_stick: packed_stick_position(data, 10)?,
        right_stick: packed_stick_position(data, 13)?,
    })
}

const PRO_BUTTON_MAP: [(u16, PadButton); 14] = [
    (0x0001, PadButton::Y),
    (0x0002, PadButton::X),
    (0x0004, PadButton::B),
    (0x0008, PadButton::A),
    (0x0010, PadButton::L),
    (0x0020, PadButton::Zl),
    (0x0040, PadButton::R),
    (0x0080, PadButton::Zr),
    (0x0100, PadButton::Minus),
    (0x0200, PadButton::Plus),
    (0x0400, PadButton::RightStick),
    (0x0800, PadButton::LeftStick),
    (0x1000, PadButton::Home),
    (0x2000, PadButton::Capture),
];

/// Decode a first-generation Switch Pro Controller standard input report
/// (ID 0x30, len ≥ 12).
///
/// Layout: 16-bit LE button field at bytes 1–2, D-pad nibble in the low
/// half of byte 3, 12-bit packed sticks at offsets 4 (left) and 7 (right).
pub fn parse_pro_report(data: &[u8]) -> Option<PadState> {
    if data.len() < PRO_MIN_LEN || data.first().copied() != Some(PRO_REPORT_ID) {
        return None;
    }

    let mut cursor = ReportCursor::new(data);
    cursor.skip(1);
    let field = cursor.read_u16_le().ok()?;
    let hat = cursor.read_u8().ok()? & 0x0F;

    let mut buttons = ButtonSet::EMPTY;
    for (bit, button) in PRO_BUTTON_MAP {
        if field & bit != 0 {
            buttons.press(button);
        }
    }

    Some(PadState {
        buttons,
        dpad: DpadDirection::from_nibble(hat),
        left_stick: packed_stick_position(data, 4)?,
        right_stick: packed_stick_position(data, 7)?,
    })
}

/// Decode the bridge's own emulated-Switch output layout read back as
/// input (exactly [`BRIDGE_REPORT_LEN`] bytes).
pub fn parse_bridge_report(data: &[u8]) -> Option<PadState> {
    if data.len() != BRIDGE_REPORT_LEN {
        return None;
    }

    let mut cursor = ReportCursor::new(data);
    let buttons = ButtonSet::from_raw(cursor.read_u16_le().ok()?);
    let hat = cursor.read_u8().ok()? & 0x0F;
    let axes = cursor.read_bytes(4).ok()?;

    Some(PadState {
        buttons,
        dpad: DpadDirection::from_nibble(hat),
        left_stick: StickPosition::new(axes[0], axes[1]),
        right_stick: StickPosition::new(axes[2], axes[3]),
    })
}

/// Decode an unrecognized gamepad report on a best-effort basis (len ≥ 2).
///
/// The first two bytes are taken as a 16-bit LE button field mapped
/// positionally onto the canonical bit indices; bytes 2–5, when present,
/// are raw 8-bit axis values. There is no D-pad in this layout.
pub fn parse_generic_report(data: &[u8]) -> Option<PadState> {
    if data.len() < 2 {
        return None;
    }

    let mut cursor = ReportCursor::new(data);
    let buttons = ButtonSet::from_raw(cursor.read_u16_le().ok()?);

    let (left_stick, right_stick) = if data.len() >= 6 {
        (
            StickPosition::new(data[2], data[3]),
            StickPosition::new(data[4], data[5]),
        )
    } else {
        (StickPosition::centered(), StickPosition::centered())
    };

    Some(PadState {
        buttons,
        dpad: DpadDirection::Centered,
        left_stick,
        right_stick,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pro2_report(field: u32, sticks: [u8; 6]) -> [u8; 16] {
        let mut report = [0u8; 16];
        report[0] = PRO2_REPORT_ID;
        report[4..8].copy_from_slice(&field.to_le_bytes());
        report[10..16].copy_from_slice(&sticks);
        report
    }

    #[test]
    fn test_downscale_axis() {
        assert_eq!(downscale_axis(0x0FFF), 255);
        assert_eq!(downscale_axis(0x0800), 128);
        assert_eq!(downscale_axis(0x0000), 0);
        // Truncation, not rounding.
        assert_eq!(downscale_axis(0x000F), 0);
    }

    #[test]
    fn test_unpack_stick_nibble_split() {
        // x = 0xABC, y = 0x123 packed little-endian across 3 bytes.
        let data = [0xBC, 0x3A, 0x12];
        let (x, y) = unpack_stick(&data, 0).expect("3 bytes available");
        assert_eq!(x, 0x0ABC);
        assert_eq!(y, 0x0123);

        assert!(unpack_stick(&data, 1).is_none());
    }

    #[test]
    fn test_parse_pro2_buttons_and_sticks() {
        let field = pro2_bits::A | pro2_bits::ZL | pro2_bits::HOME;
        let report = pro2_report(field, [0xFF, 0x0F, 0x00, 0x00, 0x00, 0x80]);
        let state = parse_pro2_report(&report).expect("valid report");

        assert!(state.buttons.contains(PadButton::A));
        assert!(state.buttons.contains(PadButton::Zl));
        assert!(state.buttons.contains(PadButton::Home));
        assert_eq!(state.buttons.count(), 3);
        assert_eq!(state.dpad, DpadDirection::Centered);
        // left: x=0x0FFF → 255, y=0x000 → 0; right: x=0x000, y=0x800 → 128
        assert_eq!(state.left_stick, StickPosition::new(255, 0));
        assert_eq!(state.right_stick, StickPosition::new(0, 128));
    }

    #[test]
    fn test_parse_pro2_dpad_cardinals() {
        let report = pro2_report(pro2_bits::DPAD_UP | pro2_bits::DPAD_RIGHT, [0; 6]);
        let state = parse_pro2_report(&report).expect("valid report");
        assert_eq!(state.dpad, DpadDirection::UpRight);
        assert!(state.buttons.is_empty());

        let report = pro2_report(pro2_bits::DPAD_UP | pro2_bits::DPAD_DOWN, [0; 6]);
        let state = parse_pro2_report(&report).expect("valid report");
        assert_eq!(state.dpad, DpadDirection::Centered);
    }

    #[test]
    fn test_parse_pro2_rejects_short_or_wrong_id() {
        let report = pro2_report(0, [0; 6]);
        assert!(parse_pro2_report(&report[..15]).is_none());

        let mut wrong_id = report;
        wrong_id[0] = 0x30;
        assert!(parse_pro2_report(&wrong_id).is_none());
    }

    #[test]
    fn test_parse_pro_full_deflection() {
        // Y pressed, D-pad centered, both sticks at raw 0x0FFF on both axes.
        let report = [
            0x30, 0x01, 0x00, 0x08, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00,
        ];
        let state = parse_pro_report(&report).expect("valid report");

        assert!(state.buttons.contains(PadButton::Y));
        assert_eq!(state.buttons.count(), 1);
        assert_eq!(state.dpad, DpadDirection::Centered);
        assert_eq!(state.left_stick, StickPosition::new(255, 255));
        assert_eq!(state.right_stick, StickPosition::new(255, 255));
    }

    #[test]
    fn test_parse_pro_wire_order_remap() {
        // Wire bit 1 is X, which is canonical bit 3.
        let report = [
            0x30, 0x02, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        let state = parse_pro_report(&report).expect("valid report");
        assert!(state.buttons.contains(PadButton::X));
        assert!(!state.buttons.contains(PadButton::B));
    }

    #[test]
    fn test_parse_pro_dpad_nibble() {
        let mut report = [
            0x30, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        let state = parse_pro_report(&report).expect("valid report");
        assert_eq!(state.dpad, DpadDirection::Left);

        report[3] = 0x0F;
        let state = parse_pro_report(&report).expect("valid report");
        assert_eq!(state.dpad, DpadDirection::Centered);
    }

    #[test]
    fn test_parse_pro_rejects_short() {
        let report = [0x30, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert!(parse_pro_report(&report).is_none());
    }

    #[test]
    fn test_parse_generic_with_axes() {
        let report = [0x05, 0x00, 10, 20, 30, 40];
        let state = parse_generic_report(&report).expect("valid report");

        assert!(state.buttons.contains(PadButton::Y));
        assert!(state.buttons.contains(PadButton::A));
        assert_eq!(state.dpad, DpadDirection::Centered);
        assert_eq!(state.left_stick, StickPosition::new(10, 20));
        assert_eq!(state.right_stick, StickPosition::new(30, 40));
    }

    #[test]
    fn test_parse_generic_buttons_only_centers_sticks() {
        let report = [0x00, 0x20];
        let state = parse_generic_report(&report).expect("valid report");

        assert!(state.buttons.contains(PadButton::Capture));
        assert_eq!(state.left_stick, StickPosition::centered());
        assert_eq!(state.right_stick, StickPosition::centered());

        assert!(parse_generic_report(&report[..1]).is_none());
    }

    #[test]
    fn test_parse_bridge_exact_length_only() {
        let report = [0x01, 0x00, 0x02, 100, 110, 120, 130, 0x00];
        let state = parse_bridge_report(&report).expect("valid report");

        assert!(state.buttons.contains(PadButton::Y));
        assert_eq!(state.dpad, DpadDirection::Right);
        assert_eq!(state.left_stick, StickPosition::new(100, 110));
        assert_eq!(state.right_stick, StickPosition::new(120, 130));

        assert!(parse_bridge_report(&report[..7]).is_none());
    }

    #[test]
    fn test_decoders_are_deterministic() {
        let report = pro2_report(pro2_bits::Y | pro2_bits::DPAD_LEFT, [1, 2, 3, 4, 5, 6]);
        let first = parse_pro2_report(&report);
        let second = parse_pro2_report(&report);
        assert_eq!(first, second);
    }
}
