//! Nintendo vendor ID and controller product ID constants.
//!
//! # Verified sources
//!
//! - **Linux kernel `hid-ids.h`** (mainline): `USB_VENDOR_ID_NINTENDO =
//!   0x057e` and the first-generation Pro Controller PID 0x2009.
//!   <https://github.com/torvalds/linux/blob/master/drivers/hid/hid-ids.h>
//! - Switch 2 family PIDs (0x2066, 0x2067, 0x2069, 0x2073) are from USB
//!   descriptor captures of retail hardware; they are not yet in the
//!   FFB-focused community sources above.

#![deny(static_mut_refs)]

/// Nintendo Co., Ltd USB Vendor ID.
pub const NINTENDO_VENDOR_ID: u16 = 0x057E;

/// USB interface number carrying wake-up commands on Switch 2 controllers.
///
/// Interface 0 is the HID input interface; the vendor command channel the
/// wake-up sequence targets is interface 1.
pub const COMMAND_INTERFACE: u8 = 1;

/// Known Nintendo controller product IDs.
pub mod product_ids {
    /// Switch Pro Controller (first generation, report ID 0x30).
    pub const PRO_CONTROLLER: u16 = 0x2009;

    // ── Switch 2 family ─────────────────────────────────────────────
    // These controllers stay silent on USB until the wake-up sequence
    // has been delivered on the command interface.
    pub const JOYCON2_RIGHT: u16 = 0x2066;
    pub const JOYCON2_LEFT: u16 = 0x2067;
    pub const PRO_CONTROLLER_2: u16 = 0x2069;
    /// GameCube controller (Nintendo Switch Online edition).
    pub const GC_NSO: u16 = 0x2073;
}

/// Controller model resolved from a USB identity pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch2Model {
    ProController,
    JoyCon2Left,
    JoyCon2Right,
    ProController2,
    GameCubeNso,
    /// Nintendo VID with a product ID we do not recognize.
    UnknownNintendo,
    /// Not a Nintendo device at all.
    NotNintendo,
}

impl Switch2Model {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProController => "Switch Pro Controller",
            Self::JoyCon2Left => "Joy-Con 2 (L)",
            Self::JoyCon2Right => "Joy-Con 2 (R)",
            Self::ProController2 => "Pro Controller 2",
            Self::GameCubeNso => "GameCube Controller (NSO)",
            Self::UnknownNintendo => "Nintendo Device",
            Self::NotNintendo => "Non-Nintendo Device",
        }
    }
}

/// Identify a controller model from its USB identity pair.
pub fn identify_model(vendor_id: u16, product_id: u16) -> Switch2Model {
    if vendor_id != NINTENDO_VENDOR_ID {
        return Switch2Model::NotNintendo;
    }
    match product_id {
        product_ids::PRO_CONTROLLER => Switch2Model::ProController,
        product_ids::JOYCON2_LEFT => Switch2Model::JoyCon2Left,
        product_ids::JOYCON2_RIGHT => Switch2Model::JoyCon2Right,
        product_ids::PRO_CONTROLLER_2 => Switch2Model::ProController2,
        product_ids::GC_NSO => Switch2Model::GameCubeNso,
        _ => Switch2Model::UnknownNintendo,
    }
}

/// Return true when the identified device belongs to the Switch 2 family
/// that requires the wake-up sequence before it emits input reports.
pub fn needs_wakeup(vendor_id: u16, product_id: u16) -> bool {
    matches!(
        identify_model(vendor_id, product_id),
        Switch2Model::JoyCon2Left
            | Switch2Model::JoyCon2Right
            | Switch2Model::ProController2
            | Switch2Model::GameCubeNso
    )
}
