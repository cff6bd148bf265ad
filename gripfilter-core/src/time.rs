//! Time management for frame-driven filters
//!
//! The filters never read a clock on their own; the host passes `now` (and
//! `dt`) into every call. This module provides the clock abstraction for
//! hosts that want one:
//! - Manual clock (host frame counter, tests)
//! - System clock (monotonic, when `std` is available)

/// Time in seconds, from an arbitrary host-defined origin
pub type Seconds = f32;

/// Source of time for the filters
pub trait TimeSource {
    /// Get current time in seconds
    fn now(&self) -> Seconds;

    /// Check if this source only moves forward
    fn is_monotonic(&self) -> bool;
}

/// Clock the host advances by hand
///
/// Typically advanced by each frame's `dt`, which makes sample timestamps line
/// up exactly with the host's simulation time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    now: Seconds,
}

impl ManualClock {
    /// Create a clock reading `start`
    pub fn new(start: Seconds) -> Self {
        Self { now: start }
    }

    /// Jump to an absolute time
    pub fn set(&mut self, now: Seconds) {
        self.now = now;
    }

    /// Move forward by `dt` seconds; negative or non-finite steps are ignored
    pub fn advance(&mut self, dt: Seconds) {
        if dt.is_finite() && dt > 0.0 {
            self.now += dt;
        }
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Seconds {
        self.now
    }

    fn is_monotonic(&self) -> bool {
        // `set` can move it backwards
        false
    }
}

/// Monotonic system time source (requires std)
///
/// Reads seconds elapsed since the clock was created.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Start a clock at zero
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Seconds {
        self.origin.elapsed().as_secs_f32()
    }

    fn is_monotonic(&self) -> bool {
        true
    }
}
