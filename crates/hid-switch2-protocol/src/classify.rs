//! Report classification: ordered-priority rule table mapping a raw
//! report's shape to the decoder that understands it.
//!
//! Classification is a precedence chain, not independent checks; the
//! first matching rule wins. It is pure and testable separately from the
//! decode step.

#![deny(static_mut_refs)]

use crate::input::{
    PRO2_MIN_LEN, PRO2_REPORT_ID, PRO_MIN_LEN, PRO_REPORT_ID, parse_bridge_report,
    parse_generic_report, parse_pro2_report, parse_pro_report,
};
use crate::output::BRIDGE_REPORT_LEN;
use crate::types::PadState;

/// HID interface boot-protocol hint delivered out of band by the host
/// stack. Keyboards and mice are never decoded as gamepads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceKind {
    /// Boot protocol 0 (none), the normal case for gamepads.
    Generic,
    Keyboard,
    Mouse,
}

impl InterfaceKind {
    /// Map the bInterfaceProtocol value from the HID descriptor.
    pub const fn from_protocol(protocol: u8) -> Self {
        match protocol {
            1 => Self::Keyboard,
            2 => Self::Mouse,
            _ => Self::Generic,
        }
    }
}

/// Recognized inbound report layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Pro Controller 2 standard input (ID 0x05).
    Pro2,
    /// First-generation Pro Controller standard input (ID 0x30).
    Pro,
    /// The bridge's own emulated-Switch layout read back.
    Bridge,
    /// Anything else with a plausible button field.
    Generic,
    /// Keyboard/mouse interface; never decoded.
    NotGamepad,
    /// Too short to carry any state; rejected.
    Unknown,
}

struct ClassifierRule {
    kind: ReportKind,
    min_len: usize,
    exact_len: Option<usize>,
    report_id: Option<u8>,
}

impl ClassifierRule {
    fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.min_len {
            return false;
        }
        if let Some(exact) = self.exact_len {
            if data.len() != exact {
                return false;
            }
        }
        match (self.report_id, data.first()) {
            (Some(id), Some(first)) => id == *first,
            (Some(_), None) => false,
            (None, _) => true,
        }
    }
}

/// Ordered precedence chain; earlier rules shadow later ones.
const CLASSIFIER_RULES: [ClassifierRule; 4] = [
    ClassifierRule {
        kind: ReportKind::Pro2,
        min_len: PRO2_MIN_LEN,
        exact_len: None,
        report_id: Some(PRO2_REPORT_ID),
    },
    ClassifierRule {
        kind: ReportKind::Pro,
        min_len: PRO_MIN_LEN,
        exact_len: None,
        report_id: Some(PRO_REPORT_ID),
    },
    ClassifierRule {
        kind: ReportKind::Bridge,
        min_len: BRIDGE_REPORT_LEN,
        exact_len: Some(BRIDGE_REPORT_LEN),
        report_id: None,
    },
    ClassifierRule {
        kind: ReportKind::Generic,
        min_len: 2,
        exact_len: None,
        report_id: None,
    },
];

/// Classify a raw report buffer. Pure; no decoding is performed.
pub fn classify_report(interface: InterfaceKind, data: &[u8]) -> ReportKind {
    if !matches!(interface, InterfaceKind::Generic) {
        return ReportKind::NotGamepad;
    }
    for rule in &CLASSIFIER_RULES {
        if rule.matches(data) {
            return rule.kind;
        }
    }
    ReportKind::Unknown
}

/// Dispatch a classified report to its decoder.
pub fn decode_report(kind: ReportKind, data: &[u8]) -> Option<PadState> {
    match kind {
        ReportKind::Pro2 => parse_pro2_report(data),
        ReportKind::Pro => parse_pro_report(data),
        ReportKind::Bridge => parse_bridge_report(data),
        ReportKind::Generic => parse_generic_report(data),
        ReportKind::NotGamepad | ReportKind::Unknown => None,
    }
}
