//! Error Types for Tracking and Configuration Faults
//!
//! ## Design Philosophy
//!
//! The filters in this crate run inside a host's per-frame tick, so nothing on
//! the hot path is allowed to halt the loop. Errors exist for two audiences:
//!
//! 1. **Callers of the `try_*` entry points** who want to know *why* a sample
//!    was not taken (degenerate direction, zero timestep, tracking stopped).
//!
//! 2. **Authoring tools** that call `validate()` on a configuration to report
//!    mistakes before `sanitized()` silently corrects them.
//!
//! The per-frame entry points (`record_sample`, `update`, ...) wrap the
//! fallible ones, log the error and hold their last good state.
//!
//! Like the rest of the crate, errors are small and `Copy`: no heap, only
//! inline floats and `usize`.
//!
//! ## Error Categories
//!
//! ### Degenerate Input
//! - `DegenerateDirection`: a direction whose XZ projection has no length
//! - `NonPositiveTimestep`: `dt <= 0` would divide by zero
//! - `InvalidValue`: NaN or infinity in a pose or rate
//!
//! ### Session State
//! - `InactiveTracking`: a sample arrived while tracking was stopped
//!
//! ### Configuration
//! - `InvertedAngleRange`: `min_angle > max_angle`
//! - `InvalidSmoothingWindow`: window is not a positive finite duration
//! - `ZeroCapacity`: a ring buffer with no slots
//! - `KeyframeOverflow` / `KeyframesUnordered`: malformed weight curve table
//!
//! ```rust
//! use gripfilter_core::{AngleAccumulator, TrackingError};
//! use glam::Vec3;
//!
//! let mut angle = AngleAccumulator::new();
//! match angle.try_set_target_from_vector(Vec3::Y) {
//!     Ok(()) => {}
//!     Err(TrackingError::DegenerateDirection) => {
//!         // Hand is directly above the pivot: hold the last angle
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for tracking operations
pub type TrackingResult<T> = Result<T, TrackingError>;

/// Tracking and configuration errors - kept small for per-frame use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TrackingError {
    /// Direction has no usable component in the rotation plane
    #[error("Direction is degenerate in the rotation plane")]
    DegenerateDirection,

    /// Frame timestep was zero or negative
    #[error("Timestep {dt}s is not positive")]
    NonPositiveTimestep {
        /// The rejected timestep in seconds
        dt: f32,
    },

    /// Sample arrived while tracking was stopped
    #[error("Tracking is not active")]
    InactiveTracking,

    /// Value makes no numeric sense (NaN, infinity)
    #[error("Invalid value: not a finite number")]
    InvalidValue,

    /// Angle range is inverted
    #[error("Angle range [{min}, {max}] is inverted")]
    InvertedAngleRange {
        /// Configured minimum angle in degrees
        min: f32,
        /// Configured maximum angle in degrees
        max: f32,
    },

    /// Smoothing window is not a positive finite duration
    #[error("Smoothing window {window}s is not a positive duration")]
    InvalidSmoothingWindow {
        /// Configured window in seconds
        window: f32,
    },

    /// Ring buffer was declared with no slots
    #[error("Sample buffer has zero capacity")]
    ZeroCapacity,

    /// Too many keyframes for the curve's fixed storage
    #[error("Keyframe table is full (capacity {capacity})")]
    KeyframeOverflow {
        /// Maximum number of keyframes the table can hold
        capacity: usize,
    },

    /// Keyframe times are not strictly increasing
    #[error("Keyframe times must be strictly increasing")]
    KeyframesUnordered,
}

#[cfg(feature = "defmt")]
impl defmt::Format for TrackingError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::DegenerateDirection =>
                defmt::write!(fmt, "Degenerate direction"),
            Self::NonPositiveTimestep { dt } =>
                defmt::write!(fmt, "Timestep {}s not positive", dt),
            Self::InactiveTracking =>
                defmt::write!(fmt, "Tracking inactive"),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::InvertedAngleRange { min, max } =>
                defmt::write!(fmt, "Angle range [{}, {}] inverted", min, max),
            Self::InvalidSmoothingWindow { window } =>
                defmt::write!(fmt, "Smoothing window {}s invalid", window),
            Self::ZeroCapacity =>
                defmt::write!(fmt, "Zero capacity"),
            Self::KeyframeOverflow { capacity } =>
                defmt::write!(fmt, "Keyframe table full ({})", capacity),
            Self::KeyframesUnordered =>
                defmt::write!(fmt, "Keyframes unordered"),
        }
    }
}
