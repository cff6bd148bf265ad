//! Knob tuning and the angle/value mapping it implies

use crate::{
    constants::{
        knob::{DEFAULT_KNOB_VALUE, VERTICAL_DEADZONE},
        DEFAULT_MAX_ANGLE_DEG, DEFAULT_MIN_ANGLE_DEG, DEFAULT_POSITION_TRACKED_RADIUS_M,
        DEFAULT_TWIST_SENSITIVITY, MODE_SWITCH_DEADZONE, VERTICAL_ALIGNMENT_THRESHOLD,
    },
    errors::{TrackingError, TrackingResult},
};

/// Configuration for a `DualSourceRotationTracker`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// Angle (degrees) at value 0
    pub min_angle: f32,
    /// Angle (degrees) at value 1
    pub max_angle: f32,
    /// Keep the angle inside `[min_angle, max_angle]` and the value in `[0, 1]`
    pub clamped_motion: bool,
    /// Snap step in degrees; `<= 0` means continuous
    pub angle_increment: f32,
    /// Hand distance (m) from the pivot above which hand position drives the knob
    pub position_tracked_radius: f32,
    /// Multiplier on twist-derived rotation
    pub twist_sensitivity: f32,
    /// Fractional radius margin while position-driven
    pub mode_switch_deadzone: f32,
    /// Fractional alignment margin for the up/forward twist split
    pub vertical_deadzone: f32,
    /// `|forward.y|` above which twist is read about the device up axis
    pub vertical_threshold: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            min_angle: DEFAULT_MIN_ANGLE_DEG,
            max_angle: DEFAULT_MAX_ANGLE_DEG,
            clamped_motion: true,
            angle_increment: 0.0,
            position_tracked_radius: DEFAULT_POSITION_TRACKED_RADIUS_M,
            twist_sensitivity: DEFAULT_TWIST_SENSITIVITY,
            mode_switch_deadzone: MODE_SWITCH_DEADZONE,
            vertical_deadzone: VERTICAL_DEADZONE,
            vertical_threshold: VERTICAL_ALIGNMENT_THRESHOLD,
        }
    }
}

impl TrackerConfig {
    /// Set the travel range
    pub fn with_angle_range(mut self, min_angle: f32, max_angle: f32) -> Self {
        self.min_angle = min_angle;
        self.max_angle = max_angle;
        self
    }

    /// Enable or disable clamping
    pub fn with_clamped_motion(mut self, clamped: bool) -> Self {
        self.clamped_motion = clamped;
        self
    }

    /// Set the snap step (`<= 0` for continuous)
    pub fn with_angle_increment(mut self, increment: f32) -> Self {
        self.angle_increment = increment;
        self
    }

    /// Set the radial/twist switch distance
    pub fn with_position_tracked_radius(mut self, radius: f32) -> Self {
        self.position_tracked_radius = radius;
        self
    }

    /// Set the twist multiplier
    pub fn with_twist_sensitivity(mut self, sensitivity: f32) -> Self {
        self.twist_sensitivity = sensitivity;
        self
    }

    /// Retune source-selection hysteresis
    pub fn with_hysteresis(mut self, mode_switch_deadzone: f32, vertical_deadzone: f32, vertical_threshold: f32) -> Self {
        self.mode_switch_deadzone = mode_switch_deadzone;
        self.vertical_deadzone = vertical_deadzone;
        self.vertical_threshold = vertical_threshold;
        self
    }

    /// Report the first authoring mistake
    pub fn validate(&self) -> TrackingResult<()> {
        let numbers = [
            self.min_angle,
            self.max_angle,
            self.angle_increment,
            self.position_tracked_radius,
            self.twist_sensitivity,
            self.mode_switch_deadzone,
            self.vertical_deadzone,
            self.vertical_threshold,
        ];
        if numbers.iter().any(|n| !n.is_finite()) {
            return Err(TrackingError::InvalidValue);
        }

        if self.min_angle > self.max_angle {
            return Err(TrackingError::InvertedAngleRange {
                min: self.min_angle,
                max: self.max_angle,
            });
        }

        Ok(())
    }

    /// Copy with every mistake corrected
    ///
    /// - inverted range: swapped
    /// - negative or non-finite increment: continuous
    /// - negative radius: made positive
    /// - hysteresis margins: clamped into `[0, 1)`, threshold into `[0, 1]`
    /// - any other non-finite number: its default
    pub fn sanitized(self) -> Self {
        if let Err(e) = self.validate() {
            log_warn!("tracker config corrected: {}", e);
        }

        let defaults = Self::default();
        let finite_or = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };

        let min = finite_or(self.min_angle, defaults.min_angle);
        let max = finite_or(self.max_angle, defaults.max_angle);
        let (min_angle, max_angle) = if min > max { (max, min) } else { (min, max) };

        let increment = finite_or(self.angle_increment, 0.0);

        Self {
            min_angle,
            max_angle,
            clamped_motion: self.clamped_motion,
            angle_increment: if increment > 0.0 { increment } else { 0.0 },
            position_tracked_radius: libm::fabsf(finite_or(
                self.position_tracked_radius,
                defaults.position_tracked_radius,
            )),
            twist_sensitivity: finite_or(self.twist_sensitivity, defaults.twist_sensitivity),
            mode_switch_deadzone: finite_or(self.mode_switch_deadzone, defaults.mode_switch_deadzone)
                .clamp(0.0, 0.99),
            vertical_deadzone: finite_or(self.vertical_deadzone, defaults.vertical_deadzone).clamp(0.0, 0.99),
            vertical_threshold: finite_or(self.vertical_threshold, defaults.vertical_threshold).clamp(0.0, 1.0),
        }
    }

    /// Degrees of travel between value 0 and value 1
    pub fn angle_range(&self) -> f32 {
        self.max_angle - self.min_angle
    }

    /// True when snapping is on
    pub fn is_quantized(&self) -> bool {
        self.angle_increment > 0.0
    }

    /// Angle for `value`, extrapolating outside `[0, 1]`
    pub fn value_to_angle(&self, value: f32) -> f32 {
        self.min_angle + self.angle_range() * value
    }

    /// Value for `angle`; zero when the range is empty
    pub fn angle_to_value(&self, angle: f32) -> f32 {
        let range = self.angle_range();
        if range <= 0.0 {
            return 0.0;
        }
        (angle - self.min_angle) / range
    }

    /// Round `angle` to the nearest increment, counted from `min_angle`
    pub fn quantize_angle(&self, angle: f32) -> f32 {
        if !self.is_quantized() {
            return angle;
        }
        let steps = libm::roundf((angle - self.min_angle) / self.angle_increment);
        self.min_angle + steps * self.angle_increment
    }

    /// Clamp then quantize `angle`, keeping the result inside a clamped range
    ///
    /// A range that is not a whole number of steps can round past an end; the
    /// result is then pulled back one increment onto the last step inside.
    pub fn snap_angle(&self, angle: f32) -> f32 {
        let mut angle = self.quantize_angle(self.clamp_angle(angle));
        if self.clamped_motion && self.is_quantized() {
            if angle > self.max_angle {
                angle -= self.angle_increment;
            } else if angle < self.min_angle {
                angle += self.angle_increment;
            }
        }
        angle
    }

    /// Clamp `value` into `[0, 1]` when clamping is on
    pub fn clamp_value(&self, value: f32) -> f32 {
        if self.clamped_motion {
            value.clamp(0.0, 1.0)
        } else {
            value
        }
    }

    /// Clamp `angle` into the range when clamping is on
    pub fn clamp_angle(&self, angle: f32) -> f32 {
        if self.clamped_motion {
            angle.clamp(self.min_angle, self.max_angle)
        } else {
            angle
        }
    }

    /// Index of the increment `angle` sits on, if snapping is on
    pub fn step_index(&self, angle: f32) -> Option<i32> {
        if !self.is_quantized() {
            return None;
        }
        Some(libm::roundf((angle - self.min_angle) / self.angle_increment) as i32)
    }

    /// Starting value for a knob with this config
    pub fn default_value(&self) -> f32 {
        DEFAULT_KNOB_VALUE
    }
}
