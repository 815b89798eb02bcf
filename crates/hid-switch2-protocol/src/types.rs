//! Canonical controller state: the pivot between all inbound report
//! layouts and all outbound encodings.

#![deny(static_mut_refs)]

use serde::{Deserialize, Serialize};

/// Named controller buttons with fixed canonical bit positions.
///
/// The bit assignment matches the Switch-compatible gamepad report layout
/// (HORIPAD ordering), so a [`ButtonSet`] forwards to that output without
/// remapping. Decoders for other wire formats translate into this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PadButton {
    Y = 0,
    B = 1,
    A = 2,
    X = 3,
    L = 4,
    R = 5,
    Zl = 6,
    Zr = 7,
    Minus = 8,
    Plus = 9,
    LeftStick = 10,
    RightStick = 11,
    Home = 12,
    Capture = 13,
}

impl PadButton {
    /// All buttons in canonical bit order.
    pub const ALL: [PadButton; 14] = [
        PadButton::Y,
        PadButton::B,
        PadButton::A,
        PadButton::X,
        PadButton::L,
        PadButton::R,
        PadButton::Zl,
        PadButton::Zr,
        PadButton::Minus,
        PadButton::Plus,
        PadButton::LeftStick,
        PadButton::RightStick,
        PadButton::Home,
        PadButton::Capture,
    ];

    pub const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Fixed-size button bitset indexed by [`PadButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonSet(u16);

impl ButtonSet {
    pub const EMPTY: ButtonSet = ButtonSet(0);

    pub const fn contains(self, button: PadButton) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn press(&mut self, button: PadButton) {
        self.0 |= button.bit();
    }

    pub fn release(&mut self, button: PadButton) {
        self.0 &= !button.bit();
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the pressed buttons in canonical bit order.
    pub fn iter(self) -> impl Iterator<Item = PadButton> {
        PadButton::ALL.into_iter().filter(move |b| self.contains(*b))
    }

    /// Raw 14-bit canonical mask; bits 14 and 15 are always clear.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Build from a raw mask, masking off the two reserved bits.
    pub const fn from_raw(mask: u16) -> Self {
        ButtonSet(mask & 0x3FFF)
    }
}

impl FromIterator<PadButton> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = PadButton>>(iter: I) -> Self {
        let mut set = ButtonSet::EMPTY;
        for button in iter {
            set.press(button);
        }
        set
    }
}

/// Eight compass directions plus the released hat position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DpadDirection {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    #[default]
    Centered,
}

impl DpadDirection {
    /// Decode a hat nibble; 0–7 are the compass directions, anything else
    /// (including the conventional 8) is the released position.
    pub const fn from_nibble(nibble: u8) -> Self {
        match nibble {
            0 => Self::Up,
            1 => Self::UpRight,
            2 => Self::Right,
            3 => Self::DownRight,
            4 => Self::Down,
            5 => Self::DownLeft,
            6 => Self::Left,
            7 => Self::UpLeft,
            _ => Self::Centered,
        }
    }

    pub const fn to_nibble(self) -> u8 {
        match self {
            Self::Up => 0,
            Self::UpRight => 1,
            Self::Right => 2,
            Self::DownRight => 3,
            Self::Down => 4,
            Self::DownLeft => 5,
            Self::Left => 6,
            Self::UpLeft => 7,
            Self::Centered => 8,
        }
    }

    /// Combine four independent direction bits into one direction.
    ///
    /// Source formats with one bit per cardinal have no diagonal encoding
    /// of their own; diagonals come from two adjacent bits. Simultaneous
    /// opposite bits (up+down, left+right) cancel to `Centered`.
    pub const fn from_cardinals(up: bool, down: bool, left: bool, right: bool) -> Self {
        let vertical = match (up, down) {
            (true, false) => 1i8,
            (false, true) => -1i8,
            _ => 0,
        };
        let horizontal = match (right, left) {
            (true, false) => 1i8,
            (false, true) => -1i8,
            _ => 0,
        };
        match (vertical, horizontal) {
            (1, 0) => Self::Up,
            (1, 1) => Self::UpRight,
            (0, 1) => Self::Right,
            (-1, 1) => Self::DownRight,
            (-1, 0) => Self::Down,
            (-1, -1) => Self::DownLeft,
            (0, -1) => Self::Left,
            (1, -1) => Self::UpLeft,
            _ => Self::Centered,
        }
    }
}

/// One analog stick, 0–255 per axis with 128 at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickPosition {
    pub x: u8,
    pub y: u8,
}

impl StickPosition {
    /// Rest position on both axes.
    pub const CENTER: u8 = 128;

    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub const fn centered() -> Self {
        Self {
            x: Self::CENTER,
            y: Self::CENTER,
        }
    }
}

impl Default for StickPosition {
    fn default() -> Self {
        Self::centered()
    }
}

/// Normalized controller state produced by every decoder and consumed by
/// every encoder. A fresh value per decode call; nothing here is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PadState {
    pub buttons: ButtonSet,
    pub dpad: DpadDirection,
    pub left_stick: StickPosition,
    pub right_stick: StickPosition,
}

impl PadState {
    /// All buttons released, hat centered, both sticks at rest.
    pub fn neutral() -> Self {
        Self::default()
    }
}
