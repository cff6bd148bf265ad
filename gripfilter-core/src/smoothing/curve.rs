//! Sample weighting curves
//!
//! A curve maps a sample's *freshness* to its weight in the average:
//!
//! ```text
//! freshness = clamp(1 - age / window, 0, 1)
//!
//!   1.0  newest sample          weight(1.0) should be 1
//!   0.0  sample at window edge  weight(0.0) usually small or 0
//! ```
//!
//! Any `Fn(f32) -> f32` is a curve. `KeyframeCurve` covers curves authored as a
//! handful of points. Whatever a curve returns is clamped to `[0, 1]`, NaN
//! counting as zero, before it is used.

use heapless::Vec;

use crate::errors::{TrackingError, TrackingResult};

/// Maps sample freshness in `[0, 1]` to a weight in `[0, 1]`
pub trait WeightCurve {
    /// Raw weight for `freshness`
    fn weight(&self, freshness: f32) -> f32;

    /// Weight clamped into `[0, 1]`, with non-numbers treated as zero
    fn clamped_weight(&self, freshness: f32) -> f32 {
        let w = self.weight(freshness);
        if w.is_nan() {
            0.0
        } else {
            w.clamp(0.0, 1.0)
        }
    }
}

impl<F> WeightCurve for F
where
    F: Fn(f32) -> f32,
{
    fn weight(&self, freshness: f32) -> f32 {
        self(freshness)
    }
}

/// Weight falls linearly from 1 (newest) to 0 (window edge)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFalloff;

impl WeightCurve for LinearFalloff {
    fn weight(&self, freshness: f32) -> f32 {
        freshness
    }
}

/// Every sample inside the window counts equally
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantWeight;

impl WeightCurve for ConstantWeight {
    fn weight(&self, _freshness: f32) -> f32 {
        1.0
    }
}

/// One point of a `KeyframeCurve`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe {
    /// Freshness this key sits at
    pub time: f32,
    /// Weight at `time`
    pub value: f32,
}

impl Keyframe {
    /// Key at `time` with `value`
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Piecewise-linear curve through up to `K` keyframes
///
/// Inputs before the first key take its value, inputs after the last key take
/// the last value. An empty curve weighs everything at 1.
#[derive(Debug, Clone)]
pub struct KeyframeCurve<const K: usize> {
    keys: Vec<Keyframe, K>,
}

impl<const K: usize> KeyframeCurve<K> {
    /// Build from keys sorted by strictly increasing time
    pub fn new(keys: &[Keyframe]) -> TrackingResult<Self> {
        let mut curve = Self { keys: Vec::new() };
        for key in keys {
            curve.push(*key)?;
        }
        Ok(curve)
    }

    /// Append a key after the current last one
    pub fn push(&mut self, key: Keyframe) -> TrackingResult<()> {
        if !key.time.is_finite() || !key.value.is_finite() {
            return Err(TrackingError::InvalidValue);
        }
        if let Some(last) = self.keys.last() {
            if key.time <= last.time {
                return Err(TrackingError::KeyframesUnordered);
            }
        }
        self.keys
            .push(key)
            .map_err(|_| TrackingError::KeyframeOverflow { capacity: K })
    }

    /// Keys in time order
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Straight line from (0, 0) to (1, 1) - same shape as `LinearFalloff`
    pub fn linear() -> Self {
        let mut keys = Vec::new();
        // K < 2 keeps whatever fits; the clamped ends still evaluate sensibly
        let _ = keys.push(Keyframe::new(0.0, 0.0));
        let _ = keys.push(Keyframe::new(1.0, 1.0));
        Self { keys }
    }
}

impl<const K: usize> WeightCurve for KeyframeCurve<K> {
    fn weight(&self, freshness: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 1.0,
        };

        if freshness <= first.time {
            return first.value;
        }
        if freshness >= last.time {
            return last.value;
        }

        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if freshness <= b.time {
                let t = (freshness - a.time) / (b.time - a.time);
                return a.value + (b.value - a.value) * t;
            }
        }

        last.value
    }
}
