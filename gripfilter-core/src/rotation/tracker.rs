//! Knob rotation from whichever hand signal is most reliable
//!
//! Turning a dial in VR happens two ways: grabbing its rim and moving the hand
//! around the axis, or pinching its center and twisting the wrist. The tracker
//! measures both every frame and lets one of three sources drive the knob:
//!
//! ```text
//!              radius >= position_tracked_radius ?
//!                  │yes                │no
//!               Radial          |forward.y| > vertical_threshold ?
//!        (hand angle around          │yes              │no
//!          the pivot)               Up             Forward
//!                             (twist about the   (twist about the
//!                              device up axis)    device forward axis)
//! ```
//!
//! Each test gets a hysteresis margin while its current answer holds, so a
//! hand resting on a boundary does not flip sources frame to frame. The newly
//! chosen source's accumulator is re-anchored on the frame it takes over, which
//! keeps the output continuous across a switch.
//!
//! Output:
//!
//! ```text
//! angle = base_rotation - (up + forward) * twist_sensitivity - radial
//! angle = snap(angle)   clamp, quantize, pull back inside the range
//! value = clamp((angle - min) / (max - min))
//! ```

use glam::Vec3;

use crate::{
    angle::AngleAccumulator,
    pose::{planar_direction, Pose, ReferenceFrame},
};

use super::config::TrackerConfig;

/// Signal currently driving the knob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationSource {
    /// Hand position around the pivot
    Radial,
    /// Device twist about its forward axis
    Forward,
    /// Device twist about its up axis
    Up,
}

/// One frame's measurements, in the knob's local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationInput {
    /// Distance from the pivot in the rotation plane
    pub radius: f32,
    /// Pivot-to-hand direction in the rotation plane
    pub radial: Option<Vec3>,
    /// `|forward.y|`: how much the device points along the knob axis
    pub vertical_alignment: f32,
    /// Flattened device forward axis
    pub forward: Option<Vec3>,
    /// Flattened device up axis
    pub up: Option<Vec3>,
}

impl RotationInput {
    /// Measure `pose` against the knob's `frame`
    pub fn measure(frame: &ReferenceFrame, pose: &Pose) -> Self {
        let offset = frame.inverse_transform_point(pose.position);
        let flat_offset = Vec3::new(offset.x, 0.0, offset.z);
        let local_forward = frame.inverse_transform_vector(pose.forward());
        let local_up = frame.inverse_transform_vector(pose.up());

        Self {
            radius: flat_offset.length(),
            radial: planar_direction(flat_offset),
            vertical_alignment: libm::fabsf(local_forward.y),
            forward: planar_direction(local_forward),
            up: planar_direction(local_up),
        }
    }

    /// Direction `source` is read from this frame
    pub fn direction(&self, source: RotationSource) -> Option<Vec3> {
        match source {
            RotationSource::Radial => self.radial,
            RotationSource::Forward => self.forward,
            RotationSource::Up => self.up,
        }
    }

    fn is_finite(&self) -> bool {
        self.radius.is_finite() && self.vertical_alignment.is_finite()
    }
}

/// Tracker output for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobReading {
    /// Handle angle in degrees, clamped and snapped per config
    pub angle: f32,
    /// Position in the travel range, `[0, 1]` when clamped
    pub value: f32,
    /// Snap index from `min_angle`, when snapping is on
    pub step: Option<i32>,
    /// Signal that drove this frame
    pub source: RotationSource,
}

/// Three accumulators and the logic choosing between them
#[derive(Debug, Clone)]
pub struct DualSourceRotationTracker {
    config: TrackerConfig,
    base_rotation: f32,
    radial: AngleAccumulator,
    forward: AngleAccumulator,
    up: AngleAccumulator,
    active: RotationSource,
    up_driven: bool,
    needs_anchor: bool,
    output_angle: f32,
    value: f32,
}

impl DualSourceRotationTracker {
    /// Tracker resting at `value`
    pub fn new(config: TrackerConfig, value: f32) -> Self {
        let config = config.sanitized();
        let value = if value.is_finite() { value } else { config.default_value() };
        let value = config.clamp_value(value);
        let base_rotation = config.value_to_angle(value);

        let mut tracker = Self {
            config,
            base_rotation,
            radial: AngleAccumulator::new(),
            forward: AngleAccumulator::new(),
            up: AngleAccumulator::new(),
            active: RotationSource::Forward,
            up_driven: false,
            needs_anchor: true,
            output_angle: base_rotation,
            value,
        };
        tracker.apply_output();
        tracker
    }

    /// Start a manipulation: zero the accumulators and pick a source afresh
    pub fn begin(&mut self, input: &RotationInput) -> KnobReading {
        self.radial.reset();
        self.forward.reset();
        self.up.reset();
        self.base_rotation = self.config.value_to_angle(self.value);
        self.needs_anchor = true;

        self.step(input, true)
    }

    /// Advance one frame of an ongoing manipulation
    pub fn update(&mut self, input: &RotationInput) -> KnobReading {
        self.step(input, false)
    }

    /// Latest output
    pub fn reading(&self) -> KnobReading {
        KnobReading {
            angle: self.output_angle,
            value: self.value,
            step: self.config.step_index(self.output_angle),
            source: self.active,
        }
    }

    /// Signal currently driving the knob
    pub fn active_source(&self) -> RotationSource {
        self.active
    }

    /// Handle angle in degrees
    pub fn output_angle(&self) -> f32 {
        self.output_angle
    }

    /// Position in the travel range
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Effective (sanitized) configuration
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Accumulator for `source`
    pub fn accumulator(&self, source: RotationSource) -> &AngleAccumulator {
        match source {
            RotationSource::Radial => &self.radial,
            RotationSource::Forward => &self.forward,
            RotationSource::Up => &self.up,
        }
    }

    fn accumulator_mut(&mut self, source: RotationSource) -> &mut AngleAccumulator {
        match source {
            RotationSource::Radial => &mut self.radial,
            RotationSource::Forward => &mut self.forward,
            RotationSource::Up => &mut self.up,
        }
    }

    fn step(&mut self, input: &RotationInput, fresh: bool) -> KnobReading {
        if !input.is_finite() {
            log_debug!("knob frame skipped: non-finite measurement");
            return self.reading();
        }

        self.select_source(input, fresh);

        if !self.needs_anchor {
            let active = self.active;
            if let Some(direction) = input.direction(active) {
                self.accumulator_mut(active).set_target_from_vector(direction);
            }
        }

        self.apply_output();
        self.reading()
    }

    fn select_source(&mut self, input: &RotationInput, fresh: bool) {
        let config = self.config;

        let mut radius = input.radius;
        if self.active == RotationSource::Radial && !fresh {
            radius *= 1.0 + config.mode_switch_deadzone;
        }
        let radial = radius >= config.position_tracked_radius;

        let mut alignment = input.vertical_alignment;
        if !fresh {
            alignment *= if self.up_driven {
                1.0 + config.vertical_deadzone
            } else {
                1.0 - config.vertical_deadzone
            };
        }
        self.up_driven = alignment > config.vertical_threshold;

        let twist = if self.up_driven { RotationSource::Up } else { RotationSource::Forward };
        let preferred = if radial { RotationSource::Radial } else { twist };

        let must_anchor = fresh || self.needs_anchor;
        if preferred == self.active && !must_anchor {
            return;
        }

        for candidate in [preferred, twist] {
            let direction = match input.direction(candidate) {
                Some(direction) => direction,
                None => continue,
            };

            if candidate == self.active && !must_anchor {
                // Preferred source unusable this frame; keep the current one
                return;
            }

            if candidate != self.active {
                log_debug!("knob source {:?} -> {:?}", self.active, candidate);
            }
            self.accumulator_mut(candidate).set_base_from_vector(direction);
            self.active = candidate;
            self.needs_anchor = false;
            return;
        }

        log_debug!("knob frame has no usable direction; holding {:?}", self.active);
    }

    fn apply_output(&mut self) {
        let config = self.config;
        let twist = self.up.total_offset() + self.forward.total_offset();
        let raw = self.base_rotation - twist * config.twist_sensitivity - self.radial.total_offset();

        let angle = config.snap_angle(raw);

        self.output_angle = angle;
        self.value = config.clamp_value(config.angle_to_value(angle));
    }
}
