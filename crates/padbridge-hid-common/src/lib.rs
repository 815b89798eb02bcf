//! Common HID utilities shared across PadBridge protocol crates.
//!
//! This crate carries the transport-facing traits (report writing, device
//! identity lookup, monotonic time) plus bounded byte-cursor helpers for
//! report parsing and building. Protocol crates stay I/O-free; everything
//! that touches a real device funnels through the traits defined here.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod clock;
pub mod report;
pub mod transport;

pub mod hidapi_backend;

pub use clock::{ManualClock, MonotonicClock, SystemClock};
pub use report::ReportCursor;
pub use transport::{DeviceWriter, IdentitySource, mock};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HidCommonError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Failed to write to device: {0}")]
    WriteError(String),

    #[error("Invalid report format: {0}")]
    InvalidReport(String),

    #[error("Device disconnected")]
    Disconnected,
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;
