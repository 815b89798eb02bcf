//! Injectable monotonic time source.
//!
//! Handshake pacing and discovery polling need bounded delays; routing
//! them through a trait keeps the state machines testable without real
//! sleeps.

use std::time::{Duration, Instant};

/// Monotonic millisecond clock with a bounded sleep primitive.
pub trait MonotonicClock: Send + Sync {
    /// Milliseconds elapsed since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;

    /// Block the calling thread for `ms` milliseconds.
    fn sleep_ms(&self, ms: u64);
}

/// Real clock backed by `std::time::Instant`.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Test clock advanced explicitly; `sleep_ms` advances instead of blocking.
pub struct ManualClock {
    now: parking_lot::Mutex<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: parking_lot::Mutex::new(0),
        }
    }

    pub fn starting_at(ms: u64) -> Self {
        Self {
            now: parking_lot::Mutex::new(ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        *self.now.lock() += ms;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for ManualClock {
    fn now_ms(&self) -> u64 {
        *self.now.lock()
    }

    fn sleep_ms(&self, ms: u64) {
        self.advance(ms);
    }
}
