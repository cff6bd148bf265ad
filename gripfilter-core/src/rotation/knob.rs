//! Persistent knob state between grabs

use crate::{
    pose::{Pose, ReferenceFrame},
    session::KnobSession,
};

use super::config::TrackerConfig;

/// A dial: its tuning and where it currently sits
///
/// The knob outlives every grab. `grab` opens a [`KnobSession`] that writes the
/// new value back into the knob each tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "KnobRecord"))]
pub struct Knob {
    config: TrackerConfig,
    value: f32,
}

/// Stored form of a [`Knob`]; loading goes through the same corrections as `new`
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct KnobRecord {
    config: TrackerConfig,
    value: f32,
}

#[cfg(feature = "serde")]
impl From<KnobRecord> for Knob {
    fn from(record: KnobRecord) -> Self {
        Self::new(record.config).with_value(record.value)
    }
}

impl Knob {
    /// Knob at its default resting value
    pub fn new(config: TrackerConfig) -> Self {
        let config = config.sanitized();
        let mut knob = Self {
            config,
            value: config.default_value(),
        };
        knob.set_value(config.default_value());
        knob
    }

    /// Builder form of [`set_value`](Self::set_value)
    pub fn with_value(mut self, value: f32) -> Self {
        self.set_value(value);
        self
    }

    /// Move the knob programmatically, clamped and snapped like a grab would be
    ///
    /// Non-finite values are ignored.
    pub fn set_value(&mut self, value: f32) {
        if !value.is_finite() {
            log_debug!("knob value {} ignored", value);
            return;
        }
        let angle = self.config.snap_angle(self.config.value_to_angle(value));
        self.value = self.config.clamp_value(self.config.angle_to_value(angle));
    }

    /// Position in the travel range
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Handle angle for the current value, degrees
    pub fn angle(&self) -> f32 {
        self.config.value_to_angle(self.value)
    }

    /// Tuning this knob runs with
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Start turning the knob from `pose`, measured in `frame`
    pub fn grab(&mut self, frame: &ReferenceFrame, pose: &Pose) -> KnobSession<'_> {
        KnobSession::begin(self, frame, pose)
    }

    pub(crate) fn store_value(&mut self, value: f32) {
        self.value = value;
    }
}

impl Default for Knob {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
