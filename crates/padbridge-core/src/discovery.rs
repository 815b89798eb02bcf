//! Bounded startup discovery of the wake-up target device.

use padbridge_hid_common::{IdentitySource, MonotonicClock};
use padbridge_hid_switch2_protocol::{identify_model, needs_wakeup};
use tracing::{debug, info};

use crate::registry::MAX_DEVICE_SLOTS;

/// Polling parameters for [`find_wakeup_target`].
#[derive(Debug, Clone, Copy)]
pub struct DiscoveryConfig {
    /// Delay between identity scans, in milliseconds. Clamped to at
    /// least 1 ms.
    pub poll_interval_ms: u64,
    /// Total time budget for the scan, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            timeout_ms: 5_000,
        }
    }
}

/// Poll the identity source until a slot reports a device that requires
/// the wake-up sequence, or the time budget runs out.
///
/// Returns the first matching slot index. The clock is injected so the
/// loop is bounded and testable without real delays.
pub fn find_wakeup_target(
    identity: &dyn IdentitySource,
    clock: &dyn MonotonicClock,
    config: &DiscoveryConfig,
) -> Option<u8> {
    let interval = config.poll_interval_ms.max(1);
    let deadline = clock.now_ms().saturating_add(config.timeout_ms);

    loop {
        for slot in 0..MAX_DEVICE_SLOTS as u8 {
            if let Some((vid, pid)) = identity.vid_pid(slot)
                && needs_wakeup(vid, pid)
            {
                info!(slot, model = identify_model(vid, pid).name(), "wake-up target found");
                return Some(slot);
            }
        }

        if clock.now_ms() >= deadline {
            debug!(timeout_ms = config.timeout_ms, "discovery timed out");
            return None;
        }
        clock.sleep_ms(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padbridge_hid_common::ManualClock;
    use padbridge_hid_common::mock::StaticIdentitySource;
    use padbridge_hid_switch2_protocol::{NINTENDO_VENDOR_ID, product_ids};

    #[test]
    fn test_finds_target_immediately() {
        let identity = StaticIdentitySource::empty(MAX_DEVICE_SLOTS).with_device(
            2,
            NINTENDO_VENDOR_ID,
            product_ids::PRO_CONTROLLER_2,
        );
        let clock = ManualClock::new();

        let slot = find_wakeup_target(&identity, &clock, &DiscoveryConfig::default());
        assert_eq!(slot, Some(2));
        // First scan succeeds without sleeping.
        assert_eq!(clock.now_ms(), 0);
    }

    #[test]
    fn test_times_out_with_no_target() {
        let identity = StaticIdentitySource::empty(MAX_DEVICE_SLOTS);
        let clock = ManualClock::new();
        let config = DiscoveryConfig {
            poll_interval_ms: 100,
            timeout_ms: 1_000,
        };

        assert_eq!(find_wakeup_target(&identity, &clock, &config), None);
        // The manual clock only advances through sleeps, so the loop
        // slept exactly to the deadline.
        assert_eq!(clock.now_ms(), 1_000);
    }

    #[test]
    fn test_non_target_device_ignored() {
        // A first-generation Pro Controller does not need waking.
        let identity = StaticIdentitySource::empty(MAX_DEVICE_SLOTS).with_device(
            0,
            NINTENDO_VENDOR_ID,
            product_ids::PRO_CONTROLLER,
        );
        let clock = ManualClock::new();
        let config = DiscoveryConfig {
            poll_interval_ms: 50,
            timeout_ms: 200,
        };

        assert_eq!(find_wakeup_target(&identity, &clock, &config), None);
    }

    #[test]
    fn test_zero_interval_still_terminates() {
        let identity = StaticIdentitySource::empty(MAX_DEVICE_SLOTS);
        let clock = ManualClock::new();
        let config = DiscoveryConfig {
            poll_interval_ms: 0,
            timeout_ms: 10,
        };

        assert_eq!(find_wakeup_target(&identity, &clock, &config), None);
    }
}
