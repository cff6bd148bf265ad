//! Manipulation sessions
//!
//! A session exists exactly as long as one grab: it is created when the hand
//! closes on an object, ticked once per frame, and consumed when the hand
//! lets go. The filters it owns are therefore always freshly reset, and there
//! is no "is anything held?" state for the host to check each frame.
//!
//! ```text
//!   grab ──► KnobSession::tick ... ──► end()      -> final knob value
//!   grab ──► ThrowSession::tick ... ──► release()  -> launch velocity
//! ```

use glam::Vec3;

use crate::{
    constants::{DEFAULT_SMOOTHING_FRAMES, DEFAULT_THROW_ANGULAR_SCALE, DEFAULT_THROW_LINEAR_SCALE},
    errors::{TrackingError, TrackingResult},
    pose::{Pose, ReferenceFrame},
    rotation::{DualSourceRotationTracker, Knob, KnobReading, RotationInput, RotationSource},
    smoothing::{LinearFalloff, SmoothedVelocity, SmoothingConfig, VelocitySmoother, WeightCurve},
    time::Seconds,
};

/// One grab of a [`Knob`]
///
/// Holds the knob mutably for the duration of the grab; every tick writes the
/// new value back.
#[derive(Debug)]
pub struct KnobSession<'a> {
    knob: &'a mut Knob,
    tracker: DualSourceRotationTracker,
}

impl<'a> KnobSession<'a> {
    pub(crate) fn begin(knob: &'a mut Knob, frame: &ReferenceFrame, pose: &Pose) -> Self {
        let mut tracker = DualSourceRotationTracker::new(*knob.config(), knob.value());
        let reading = tracker.begin(&RotationInput::measure(frame, pose));
        knob.store_value(reading.value);

        Self { knob, tracker }
    }

    /// Advance one frame
    pub fn tick(&mut self, frame: &ReferenceFrame, pose: &Pose) -> KnobReading {
        self.tick_input(&RotationInput::measure(frame, pose))
    }

    /// Advance one frame from measurements the host already took
    pub fn tick_input(&mut self, input: &RotationInput) -> KnobReading {
        let reading = self.tracker.update(input);
        self.knob.store_value(reading.value);
        reading
    }

    /// Latest output
    pub fn reading(&self) -> KnobReading {
        self.tracker.reading()
    }

    /// Signal currently driving the knob
    pub fn active_source(&self) -> RotationSource {
        self.tracker.active_source()
    }

    /// Let go; returns the value the knob was left at
    pub fn end(self) -> f32 {
        self.knob.value()
    }
}

/// Tuning for a throw
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThrowConfig {
    /// Window the release velocity is averaged over
    pub smoothing: SmoothingConfig,
    /// Multiplier on the smoothed linear velocity
    pub linear_scale: f32,
    /// Multiplier on the smoothed angular velocity
    pub angular_scale: f32,
}

impl Default for ThrowConfig {
    fn default() -> Self {
        Self {
            smoothing: SmoothingConfig::default(),
            linear_scale: DEFAULT_THROW_LINEAR_SCALE,
            angular_scale: DEFAULT_THROW_ANGULAR_SCALE,
        }
    }
}

impl ThrowConfig {
    /// Set the smoothing window
    pub fn with_window(mut self, window_secs: Seconds) -> Self {
        self.smoothing = self.smoothing.with_window(window_secs);
        self
    }

    /// Set both release multipliers
    pub fn with_scales(mut self, linear_scale: f32, angular_scale: f32) -> Self {
        self.linear_scale = linear_scale;
        self.angular_scale = angular_scale;
        self
    }

    /// Report the first authoring mistake
    pub fn validate(&self) -> TrackingResult<()> {
        self.smoothing.validate()?;
        if !self.linear_scale.is_finite() || !self.angular_scale.is_finite() {
            return Err(TrackingError::InvalidValue);
        }
        Ok(())
    }

    /// Copy with mistakes replaced by defaults
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f32, fallback: f32| {
            if v.is_finite() {
                v
            } else {
                log_warn!("throw scale {} replaced by {}", v, fallback);
                fallback
            }
        };

        Self {
            smoothing: self.smoothing.sanitized(),
            linear_scale: finite_or(self.linear_scale, defaults.linear_scale),
            angular_scale: finite_or(self.angular_scale, defaults.angular_scale),
        }
    }
}

/// Velocity to launch a released object with
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleaseVelocity {
    /// Units per second
    pub linear: Vec3,
    /// Radians per second per axis
    pub angular: Vec3,
}

impl ReleaseVelocity {
    /// Linear speed
    pub fn speed(&self) -> f32 {
        self.linear.length()
    }

    /// True when the hand was moving at least `min_speed` on release
    pub fn is_flick(&self, min_speed: f32) -> bool {
        self.speed() >= min_speed
    }
}

/// One hold of a throwable object
///
/// Keeps its own clock: each tick advances it by `dt`, so hosts only supply
/// frame deltas.
#[derive(Debug, Clone)]
pub struct ThrowSession<W: WeightCurve = LinearFalloff, const N: usize = DEFAULT_SMOOTHING_FRAMES> {
    smoother: VelocitySmoother<W, N>,
    config: ThrowConfig,
    elapsed: Seconds,
}

impl ThrowSession {
    /// Start tracking a hold at `pose` with the default curve and capacity
    pub fn begin(config: ThrowConfig, pose: Pose) -> Self {
        Self::from_parts(config, LinearFalloff, pose)
    }
}

impl<W: WeightCurve> ThrowSession<W> {
    /// Start tracking with a custom weight curve
    pub fn with_curve(config: ThrowConfig, curve: W, pose: Pose) -> Self {
        Self::from_parts(config, curve, pose)
    }
}

impl<W: WeightCurve, const N: usize> ThrowSession<W, N> {
    /// Start tracking with an explicit curve and ring capacity
    pub fn from_parts(config: ThrowConfig, curve: W, pose: Pose) -> Self {
        let config = config.sanitized();
        let mut smoother = VelocitySmoother::from_parts(config.smoothing, curve);
        smoother.reset();
        smoother.start_tracking();
        smoother.seed(pose);

        Self {
            smoother,
            config,
            elapsed: 0.0,
        }
    }

    /// Record one frame of the held object's pose
    ///
    /// Frames with a non-positive or non-finite `dt` are skipped and do not
    /// advance the session clock.
    pub fn tick(&mut self, pose: Pose, dt: Seconds) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.smoother.record_sample(pose, dt, self.elapsed);
    }

    /// Smoothed velocity so far, before release scaling
    pub fn velocity(&self) -> SmoothedVelocity {
        self.smoother.smoothed_velocity(self.elapsed)
    }

    /// Session time, seconds since `begin`
    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }

    /// Underlying smoother
    pub fn smoother(&self) -> &VelocitySmoother<W, N> {
        &self.smoother
    }

    /// Let go: the smoothed velocity with the release multipliers applied
    pub fn release(mut self) -> ReleaseVelocity {
        self.smoother.stop_tracking();
        let velocity = self.velocity();

        ReleaseVelocity {
            linear: velocity.linear * self.config.linear_scale,
            angular: velocity.angular * self.config.angular_scale,
        }
    }
}
