//! Inbound report forwarding.
//!
//! One inbound HID report produces at most one outbound report. The
//! pipeline classifies the raw bytes, drops non-gamepad and duplicate
//! traffic, decodes the rest into a canonical state and re-encodes it
//! for the configured output protocol.

use padbridge_hid_switch2_protocol::{
    GENERIC_REPORT_LEN, InterfaceKind, ReportKind, build_generic_report, build_switch_report,
    classify_report, decode_report,
};
use tracing::debug;

use crate::registry::DeviceRegistry;

/// Which outbound wire layout the bridge speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// The 8-byte emulated Switch gamepad layout.
    EmulatedSwitch,
    /// The 7-byte generic gamepad layout.
    GenericGamepad,
}

/// Stateless forwarding logic over a shared [`DeviceRegistry`].
pub struct BridgePipeline {
    target: OutputTarget,
}

impl BridgePipeline {
    pub fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> OutputTarget {
        self.target
    }

    /// Process one inbound report for a device slot.
    ///
    /// Returns the outbound report bytes, or `None` when nothing should
    /// be forwarded: non-gamepad interface, unknown layout, an exact
    /// duplicate of the slot's previous report, or a report the decoder
    /// rejects as malformed.
    pub fn process_report(
        &self,
        registry: &DeviceRegistry,
        slot: u8,
        interface: InterfaceKind,
        data: &[u8],
    ) -> Option<Vec<u8>> {
        let kind = classify_report(interface, data);
        match kind {
            ReportKind::NotGamepad | ReportKind::Unknown => {
                debug!(slot, ?kind, len = data.len(), "skipping report");
                return None;
            }
            _ => {}
        }

        // Generic reports narrower than the generic output layout carry
        // no analog data worth forwarding on that target.
        if self.target == OutputTarget::GenericGamepad
            && kind == ReportKind::Generic
            && data.len() < GENERIC_REPORT_LEN
        {
            debug!(slot, len = data.len(), "generic report below output width");
            return None;
        }

        if registry.is_duplicate_and_remember(slot, data) {
            debug!(slot, ?kind, "duplicate report suppressed");
            return None;
        }

        let state = decode_report(kind, data)?;
        let out = match self.target {
            OutputTarget::EmulatedSwitch => build_switch_report(&state).to_vec(),
            OutputTarget::GenericGamepad => build_generic_report(&state).to_vec(),
        };
        debug!(slot, ?kind, out_len = out.len(), "report forwarded");
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padbridge_hid_switch2_protocol::{BRIDGE_REPORT_LEN, neutral_switch_report};

    const PRO_REPORT: [u8; 12] = [
        0x30, 0x01, 0x00, 0x08, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00,
    ];

    #[test]
    fn test_pro_report_forwards_as_switch() {
        let registry = DeviceRegistry::new();
        let pipeline = BridgePipeline::new(OutputTarget::EmulatedSwitch);

        let out = pipeline
            .process_report(&registry, 0, InterfaceKind::Generic, &PRO_REPORT)
            .expect("decodes");
        assert_eq!(out.len(), BRIDGE_REPORT_LEN);
        // Y pressed, d-pad centered, both sticks pinned high.
        assert_eq!(out, vec![0x01, 0x00, 0x08, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
    }

    #[test]
    fn test_duplicate_report_forwarded_once() {
        let registry = DeviceRegistry::new();
        let pipeline = BridgePipeline::new(OutputTarget::EmulatedSwitch);

        assert!(
            pipeline
                .process_report(&registry, 0, InterfaceKind::Generic, &PRO_REPORT)
                .is_some()
        );
        assert!(
            pipeline
                .process_report(&registry, 0, InterfaceKind::Generic, &PRO_REPORT)
                .is_none()
        );
    }

    #[test]
    fn test_keyboard_interface_never_forwards() {
        let registry = DeviceRegistry::new();
        let pipeline = BridgePipeline::new(OutputTarget::EmulatedSwitch);

        assert!(
            pipeline
                .process_report(&registry, 0, InterfaceKind::Keyboard, &PRO_REPORT)
                .is_none()
        );
        // A skipped report must not poison the duplicate filter.
        assert!(
            pipeline
                .process_report(&registry, 0, InterfaceKind::Generic, &PRO_REPORT)
                .is_some()
        );
    }

    #[test]
    fn test_short_generic_report_depends_on_target() {
        let registry = DeviceRegistry::new();
        let short = [0x00, 0x00];

        let generic = BridgePipeline::new(OutputTarget::GenericGamepad);
        assert!(
            generic
                .process_report(&registry, 0, InterfaceKind::Generic, &short)
                .is_none()
        );

        let switch = BridgePipeline::new(OutputTarget::EmulatedSwitch);
        let out = switch
            .process_report(&registry, 0, InterfaceKind::Generic, &short)
            .expect("buttons-only generic report decodes");
        assert_eq!(out, neutral_switch_report().to_vec());
    }

    #[test]
    fn test_undersized_report_skipped() {
        let registry = DeviceRegistry::new();
        let pipeline = BridgePipeline::new(OutputTarget::EmulatedSwitch);

        assert!(
            pipeline
                .process_report(&registry, 0, InterfaceKind::Generic, &[0x05])
                .is_none()
        );
    }

    #[test]
    fn test_generic_target_output_width() {
        let registry = DeviceRegistry::new();
        let pipeline = BridgePipeline::new(OutputTarget::GenericGamepad);

        let out = pipeline
            .process_report(&registry, 0, InterfaceKind::Generic, &PRO_REPORT)
            .expect("decodes");
        assert_eq!(out.len(), GENERIC_REPORT_LEN);
    }
}
