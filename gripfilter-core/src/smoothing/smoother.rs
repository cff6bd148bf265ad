//! Windowed, weighted release-velocity estimation
//!
//! Raw frame-to-frame hand velocity is noisy and the frame a user lets go on is
//! often the one where the hand is already decelerating. The smoother keeps the
//! last `N` per-frame rates and, when asked, averages the ones inside the
//! trailing window with a freshness weight.
//!
//! ## The walk
//!
//! ```text
//! newest ──► older ──► older ──► (empty | stale) stop
//!   w=1       w=.8      w=.5
//!
//! velocity = Σ rate·w / Σ w        (zero when Σ w == 0)
//! ```
//!
//! The walk stops at the first never-written slot or the first sample older
//! than the window. It does not scan past a gap: a freshly reset buffer reports
//! only the history it has, never wrapped-around leftovers.

use glam::{EulerRot, Quat, Vec3};

use crate::{
    angle::shortest_angle_distance,
    buffer::CircularBuffer,
    constants::{DEFAULT_SMOOTHING_FRAMES, DEFAULT_SMOOTHING_WINDOW_S, FULL_CIRCLE_DEG},
    errors::{TrackingError, TrackingResult},
    pose::Pose,
    time::{Seconds, TimeSource},
};

use super::curve::{LinearFalloff, WeightCurve};

/// Smoothing parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmoothingConfig {
    /// Trailing history (seconds) that contributes to the average
    pub window_secs: Seconds,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_SMOOTHING_WINDOW_S,
        }
    }
}

impl SmoothingConfig {
    /// Set the smoothing window
    pub fn with_window(mut self, window_secs: Seconds) -> Self {
        self.window_secs = window_secs;
        self
    }

    /// Report the first authoring mistake
    pub fn validate(&self) -> TrackingResult<()> {
        if !self.window_secs.is_finite() || self.window_secs <= 0.0 {
            return Err(TrackingError::InvalidSmoothingWindow {
                window: self.window_secs,
            });
        }
        Ok(())
    }

    /// Copy with mistakes replaced by defaults
    pub fn sanitized(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log_warn!("smoothing config corrected: {}", e);
                Self::default()
            }
        }
    }
}

/// One frame's rates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocitySample {
    /// When the sample was taken
    pub timestamp: Seconds,
    /// Linear velocity, units per second
    pub linear: Vec3,
    /// Angular velocity, radians per second per axis
    pub angular: Vec3,
}

/// Smoothed linear and angular velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedVelocity {
    /// Units per second
    pub linear: Vec3,
    /// Radians per second per axis
    pub angular: Vec3,
}

impl SmoothedVelocity {
    /// No motion
    pub const ZERO: Self = Self {
        linear: Vec3::ZERO,
        angular: Vec3::ZERO,
    };
}

impl Default for SmoothedVelocity {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Per-axis rotation from `from` to `to`, degrees, each axis in [-180, 180]
///
/// Axes are read from the `to · from⁻¹` delta as yaw (Y), pitch (X) and roll
/// (Z), each folded onto the short way round.
pub fn angular_delta_deg(from: Quat, to: Quat) -> Vec3 {
    let delta = (to * from.inverse()).normalize();
    let (yaw, pitch, roll) = delta.to_euler(EulerRot::YXZ);

    let wrap = |rad: f32| shortest_angle_distance(0.0, rad.to_degrees(), FULL_CIRCLE_DEG);
    Vec3::new(wrap(pitch), wrap(yaw), wrap(roll))
}

/// Ring buffer of per-frame rates with weighted averaging
///
/// `W` weighs samples by freshness; `N` is the number of frames kept.
#[derive(Debug, Clone)]
pub struct VelocitySmoother<W: WeightCurve = LinearFalloff, const N: usize = DEFAULT_SMOOTHING_FRAMES> {
    samples: CircularBuffer<VelocitySample, N>,
    curve: W,
    config: SmoothingConfig,
    last_pose: Option<Pose>,
    active: bool,
}

impl VelocitySmoother {
    /// Linear-falloff smoother with the default frame count
    pub fn new(config: SmoothingConfig) -> Self {
        Self::from_parts(config, LinearFalloff)
    }
}

impl Default for VelocitySmoother {
    fn default() -> Self {
        Self::new(SmoothingConfig::default())
    }
}

impl<W: WeightCurve> VelocitySmoother<W> {
    /// Smoother with a custom curve and the default frame count
    pub fn with_curve(config: SmoothingConfig, curve: W) -> Self {
        Self::from_parts(config, curve)
    }
}

impl<W: WeightCurve, const N: usize> VelocitySmoother<W, N> {
    /// Smoother with a custom curve and frame count
    ///
    /// The config is sanitized; a zero-frame smoother is accepted but never
    /// reports anything but zero.
    pub fn from_parts(config: SmoothingConfig, curve: W) -> Self {
        if N == 0 {
            log_warn!("velocity smoother built with zero capacity; output will stay zero");
        }

        Self {
            samples: CircularBuffer::new(),
            curve,
            config: config.sanitized(),
            last_pose: None,
            active: false,
        }
    }

    /// `from_parts` that refuses a bad config or a zero-frame ring
    pub fn try_from_parts(config: SmoothingConfig, curve: W) -> TrackingResult<Self> {
        if N == 0 {
            return Err(TrackingError::ZeroCapacity);
        }
        config.validate()?;
        Ok(Self::from_parts(config, curve))
    }

    /// Begin sampling
    pub fn start_tracking(&mut self) {
        self.active = true;
    }

    /// Stop sampling; history is kept
    pub fn stop_tracking(&mut self) {
        self.active = false;
    }

    /// True while samples are being taken
    pub fn is_tracking(&self) -> bool {
        self.active
    }

    /// Clear every slot and forget the last pose
    pub fn reset(&mut self) {
        self.samples.clear();
        self.last_pose = None;
    }

    /// Set the pose the next sample is measured from, without recording
    pub fn seed(&mut self, pose: Pose) {
        self.last_pose = Some(pose);
    }

    /// Record this frame's motion, skipping it on bad input
    ///
    /// The first call after a reset (with no seed) only remembers the pose.
    pub fn record_sample(&mut self, pose: Pose, dt: Seconds, now: Seconds) {
        if let Err(e) = self.try_record_sample(pose, dt, now) {
            log_debug!("velocity sample skipped: {}", e);
        }
    }

    /// Record this frame's motion, reporting why a sample was not taken
    pub fn try_record_sample(&mut self, pose: Pose, dt: Seconds, now: Seconds) -> TrackingResult<()> {
        if !self.active {
            return Err(TrackingError::InactiveTracking);
        }
        if !dt.is_finite() || !now.is_finite() || !pose.is_finite() {
            return Err(TrackingError::InvalidValue);
        }
        if dt <= 0.0 {
            return Err(TrackingError::NonPositiveTimestep { dt });
        }

        let last = match self.last_pose.replace(pose) {
            Some(last) => last,
            None => return Ok(()),
        };

        let linear = (pose.position - last.position) / dt;
        let angular = (angular_delta_deg(last.rotation, pose.rotation) / dt) * (core::f32::consts::PI / 180.0);

        self.samples.push(VelocitySample {
            timestamp: now,
            linear,
            angular,
        });
        Ok(())
    }

    /// Record rates the host already measured (e.g. from the tracking runtime)
    pub fn record_rates(&mut self, linear: Vec3, angular: Vec3, now: Seconds) -> TrackingResult<()> {
        if !self.active {
            return Err(TrackingError::InactiveTracking);
        }
        if !linear.is_finite() || !angular.is_finite() || !now.is_finite() {
            return Err(TrackingError::InvalidValue);
        }

        self.samples.push(VelocitySample {
            timestamp: now,
            linear,
            angular,
        });
        Ok(())
    }

    /// `record_sample` stamped from `clock`
    ///
    /// A clock that can run backwards is checked against the newest sample; a
    /// reading earlier than it only re-seeds the pose.
    pub fn record_sample_at<C: TimeSource>(&mut self, clock: &C, pose: Pose, dt: Seconds) {
        let now = clock.now();
        if !clock.is_monotonic() {
            if let Some(newest) = self.samples.last() {
                if now < newest.timestamp {
                    log_warn!("clock went back from {} to {}; sample skipped", newest.timestamp, now);
                    if self.active && pose.is_finite() {
                        self.seed(pose);
                    }
                    return;
                }
            }
        }
        self.record_sample(pose, dt, now);
    }

    /// Weighted average of the samples inside the window as of `now`
    pub fn smoothed_velocity(&self, now: Seconds) -> SmoothedVelocity {
        let window = self.config.window_secs;
        let mut linear = Vec3::ZERO;
        let mut angular = Vec3::ZERO;
        let mut total_weight = 0.0;

        for sample in self.samples.recent() {
            let age_fraction = (now - sample.timestamp) / window;
            if age_fraction > 1.0 {
                break;
            }

            let weight = self.curve.clamped_weight((1.0 - age_fraction).clamp(0.0, 1.0));
            linear += sample.linear * weight;
            angular += sample.angular * weight;
            total_weight += weight;
        }

        if total_weight > 0.0 {
            SmoothedVelocity {
                linear: linear / total_weight,
                angular: angular / total_weight,
            }
        } else {
            SmoothedVelocity::ZERO
        }
    }

    /// `smoothed_velocity` as of `clock`'s current time
    pub fn smoothed_velocity_at<C: TimeSource>(&self, clock: &C) -> SmoothedVelocity {
        self.smoothed_velocity(clock.now())
    }

    /// Samples currently stored (including stale ones)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when nothing has been recorded since the last reset
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<&VelocitySample> {
        self.samples.last()
    }

    /// Pose the next sample is measured from
    pub fn last_pose(&self) -> Option<Pose> {
        self.last_pose
    }

    /// Effective (sanitized) configuration
    pub fn config(&self) -> SmoothingConfig {
        self.config
    }
}
