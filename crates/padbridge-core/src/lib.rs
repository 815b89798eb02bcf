//! PadBridge core: the glue between raw inbound HID reports and outbound
//! gamepad reports.
//!
//! Two execution contexts touch this crate concurrently: a report context
//! that runs the classify → decode → encode pipeline per inbound report,
//! and a transport-servicing context that drives device wake-up. All
//! shared per-device state (wake-up progress, duplicate filter) lives in
//! [`DeviceRegistry`] behind one lock per slot; the pipeline's pure
//! stages need no synchronization at all.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod discovery;
pub mod pipeline;
pub mod registry;

pub use discovery::{DiscoveryConfig, find_wakeup_target};
pub use pipeline::{BridgePipeline, OutputTarget};
pub use registry::{DEDUP_BUFFER_LEN, DeviceRegistry, MAX_DEVICE_SLOTS};
