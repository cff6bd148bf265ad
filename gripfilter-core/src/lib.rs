//! Per-frame filters for hand-held VR interactions
//!
//! Turns the pose stream of a tracked hand or controller into the two signals
//! interaction code actually needs:
//!
//! - a knob or dial angle that keeps counting past ±180° and switches smoothly
//!   between "hand moves around the pivot" and "wrist twists in place"
//! - a release velocity averaged over the last fraction of a second, for
//!   throws and flicks
//!
//! Key constraints:
//! - Runs inside the host's frame tick: no allocation, no blocking
//! - Bad input never panics; the affected output holds its last value
//! - `no_std` capable (`default-features = false`)
//!
//! ```no_run
//! use gripfilter_core::{Pose, ThrowConfig, ThrowSession};
//! use glam::Vec3;
//!
//! let mut throw = ThrowSession::begin(ThrowConfig::default(), Pose::default());
//!
//! // Once per frame while held
//! throw.tick(Pose::from_position(Vec3::new(0.0, 0.01, 0.02)), 1.0 / 90.0);
//!
//! // On release
//! let launch = throw.release();
//! if launch.is_flick(2.0) {
//!     // apply launch.linear / launch.angular to the object
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging; arguments are still type-checked when `log` is off
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ if false { let _ = format_args!($($arg)*); } }};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ if false { let _ = format_args!($($arg)*); } }};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {{ if false { let _ = format_args!($($arg)*); } }};
}

pub mod angle;
pub mod buffer;
pub mod constants;
pub mod errors;
pub mod pose;
pub mod rotation;
pub mod session;
pub mod smoothing;
pub mod time;

// Public API
pub use angle::{shortest_angle_distance, AngleAccumulator};
pub use errors::{TrackingError, TrackingResult};
pub use pose::{Pose, ReferenceFrame};
pub use rotation::{
    DualSourceRotationTracker, Knob, KnobReading, RotationInput, RotationSource, TrackerConfig,
};
pub use session::{KnobSession, ReleaseVelocity, ThrowConfig, ThrowSession};
pub use smoothing::{
    ConstantWeight, KeyframeCurve, LinearFalloff, SmoothedVelocity, SmoothingConfig,
    VelocitySmoother, WeightCurve,
};
pub use time::{ManualClock, Seconds, TimeSource};

#[cfg(feature = "std")]
pub use time::SystemClock;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
