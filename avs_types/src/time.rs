//! Deterministic time
//!
//! Time only advances when the driver says so. This keeps every timeout
//! path reproducible in tests: advance the clock past the window and the
//! expiry fires, deterministically, with no sleeps anywhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A point in deterministic time, measured in ticks
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Tick(u64);

impl Tick {
    /// Tick zero, the start of every run
    pub const ZERO: Tick = Tick(0);

    /// Creates a tick from a raw count
    pub const fn from_ticks(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Returns the raw tick count
    pub const fn as_ticks(&self) -> u64 {
        self.0
    }

    /// Returns the number of ticks since an earlier point
    ///
    /// Saturates at zero if `earlier` is actually later.
    pub fn elapsed_since(&self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<u64> for Tick {
    type Output = Tick;

    fn add(self, delta: u64) -> Self::Output {
        Tick(self.0.saturating_add(delta))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Controllable clock for driving timeouts
///
/// Only advances when explicitly instructed, in the manner of a simulated
/// timer device.
#[derive(Debug, Clone, Default)]
pub struct TickClock {
    now: Tick,
}

impl TickClock {
    /// Creates a clock starting at tick zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current tick
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Advances the clock by `delta` ticks
    pub fn advance(&mut self, delta: u64) {
        self.now = self.now + delta;
    }
}
