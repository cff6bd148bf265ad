//! Constants for gripfilter Core
//!
//! Centralized, documented constants used throughout the filters. Values that
//! were tuned by feel on hardware are marked as such; they seed the
//! configuration defaults and can be overridden per control.
//!
//! ## Organization
//!
//! - **Angles**: circle arithmetic and the accumulator rebase threshold
//! - **Knob**: default knob range and mode-switch hysteresis
//! - **Smoothing**: ring buffer sizing and release-velocity tuning
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units
//! 3. Note when a value is empirical rather than derived

/// Circle arithmetic and accumulator limits.
pub mod angles;

/// Knob defaults and source-selection hysteresis.
pub mod knob;

/// Velocity smoothing buffer and throw tuning.
pub mod smoothing;

pub use angles::{FULL_CIRCLE_DEG, REBASE_THRESHOLD_DEG, MIN_PLANAR_LENGTH};

pub use knob::{
    DEFAULT_MIN_ANGLE_DEG, DEFAULT_MAX_ANGLE_DEG, DEFAULT_POSITION_TRACKED_RADIUS_M,
    DEFAULT_TWIST_SENSITIVITY, MODE_SWITCH_DEADZONE, VERTICAL_ALIGNMENT_THRESHOLD,
};

pub use smoothing::{
    DEFAULT_SMOOTHING_FRAMES, DEFAULT_SMOOTHING_WINDOW_S,
    DEFAULT_THROW_LINEAR_SCALE, DEFAULT_THROW_ANGULAR_SCALE,
};
