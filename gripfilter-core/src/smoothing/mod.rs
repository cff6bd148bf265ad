//! Release-Velocity Smoothing
//!
//! ## Overview
//!
//! When a held object is let go, the host needs one velocity to launch it with.
//! Taking the last frame's displacement gives jittery, often too-weak throws;
//! this module averages the last fraction of a second instead, favouring the
//! newest frames.
//!
//! ## Pieces
//!
//! - [`VelocitySmoother`]: ring buffer of per-frame linear/angular rates and
//!   the weighted walk over it
//! - [`WeightCurve`]: freshness → weight mapping; any `Fn(f32) -> f32`, or one
//!   of [`LinearFalloff`], [`ConstantWeight`], [`KeyframeCurve`]
//! - [`SmoothingConfig`]: the trailing window length
//!
//! ## Usage Example
//!
//! ```rust
//! use gripfilter_core::smoothing::{SmoothingConfig, VelocitySmoother};
//! use gripfilter_core::Pose;
//! use glam::Vec3;
//!
//! let mut smoother = VelocitySmoother::new(SmoothingConfig::default());
//! smoother.reset();
//! smoother.start_tracking();
//!
//! let dt = 1.0 / 90.0;
//! let mut now = 0.0;
//! for frame in 0..10 {
//!     now += dt;
//!     let pose = Pose::from_position(Vec3::new(frame as f32 * 0.01, 0.0, 0.0));
//!     smoother.record_sample(pose, dt, now);
//! }
//!
//! // 1 cm per frame at 90 Hz
//! let v = smoother.smoothed_velocity(now);
//! assert!((v.linear.x - 0.9).abs() < 1e-3);
//! ```

mod curve;
mod smoother;

pub use curve::{ConstantWeight, Keyframe, KeyframeCurve, LinearFalloff, WeightCurve};
pub use smoother::{
    angular_delta_deg, SmoothedVelocity, SmoothingConfig, VelocitySample, VelocitySmoother,
};
