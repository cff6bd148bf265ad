//! Velocity Smoothing Constants
//!
//! Sizing for the release-velocity ring buffer and the default scaling applied
//! when a throw session ends.

/// Default number of per-frame samples held by a `VelocitySmoother`.
///
/// 20 frames covers the default window at anything up to 80 Hz; at 90 Hz and
/// above the window, not the buffer, bounds the history.
pub const DEFAULT_SMOOTHING_FRAMES: usize = 20;

/// Default trailing window (seconds) over which samples are averaged.
pub const DEFAULT_SMOOTHING_WINDOW_S: f32 = 0.25;

/// Default multiplier applied to the smoothed linear velocity on release.
///
/// Empirical: raw hand velocity reads as a weak throw, so it is boosted.
pub const DEFAULT_THROW_LINEAR_SCALE: f32 = 1.5;

/// Default multiplier applied to the smoothed angular velocity on release.
pub const DEFAULT_THROW_ANGULAR_SCALE: f32 = 1.0;
