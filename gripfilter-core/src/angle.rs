//! Unbounded Angle Accumulation About a Fixed Axis
//!
//! ## Overview
//!
//! A hand turning a dial produces one direction per frame. Converting each
//! direction to an angle with `atan2` gives a value that wraps at ±180°, so a
//! naive "current minus start" jumps by 360° the moment the hand crosses the
//! seam. `AngleAccumulator` instead tracks:
//!
//! ```text
//! base_angle         anchor direction, degrees
//! current_offset     shortest signed arc from base to latest target, |x| <= 180
//! accumulated_angle  every offset committed so far
//!
//! total_offset = accumulated_angle + current_offset
//! ```
//!
//! ## Rebasing
//!
//! Whenever `|current_offset|` exceeds 90° the offset is committed into the
//! accumulated total and the base moves to the target. The shortest arc is only
//! unambiguous below 180°, so re-anchoring at 90° leaves a full quarter turn of
//! headroom for the next frame. Total rotation can grow without bound (several
//! turns, either sign) while each stored term stays small.
//!
//! ```text
//! target:   10°    95°          185°
//! base:      0°     0° -> 95°    95°
//! current:  10°    95° -> 0°     90°
//! accum:     0°     0° -> 95°    95°
//! total:    10°    95°          185°
//! ```
//!
//! ## Preconditions
//!
//! Directions are read in the XZ plane. A direction with no XZ component has
//! no angle; the plain setters assume the caller filtered those out, the
//! `try_*` variants reject them.

use glam::Vec3;

use crate::{
    constants::{FULL_CIRCLE_DEG, REBASE_THRESHOLD_DEG},
    errors::{TrackingError, TrackingResult},
    pose::{planar_angle_deg, planar_direction},
};

/// Signed shortest arc from `start` to `end` on a circle of size `max`
///
/// The magnitude never exceeds `max/2`; a tie at exactly half a turn keeps the
/// sign of the raw difference.
///
/// ```rust
/// use gripfilter_core::angle::shortest_angle_distance;
///
/// assert_eq!(shortest_angle_distance(179.0, -179.0, 360.0), 2.0);
/// assert_eq!(shortest_angle_distance(-179.0, 179.0, 360.0), -2.0);
/// ```
pub fn shortest_angle_distance(start: f32, end: f32, max: f32) -> f32 {
    let delta = end - start;
    let sign = if delta < 0.0 { -1.0 } else { 1.0 };

    let mut delta = libm::fmodf(libm::fabsf(delta), max);
    if delta > max * 0.5 {
        delta = -(max - delta);
    }

    delta * sign
}

/// Rotation tracker that never wraps
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AngleAccumulator {
    base_angle: f32,
    current_offset: f32,
    accumulated_angle: f32,
}

impl AngleAccumulator {
    /// Fresh accumulator with everything at zero
    pub const fn new() -> Self {
        Self {
            base_angle: 0.0,
            current_offset: 0.0,
            accumulated_angle: 0.0,
        }
    }

    /// Zero all state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Commit the current offset and re-anchor at `direction`
    ///
    /// `direction` must have a non-zero XZ projection.
    pub fn set_base_from_vector(&mut self, direction: Vec3) {
        self.set_base_angle(planar_angle_deg(direction));
    }

    /// Measure `direction` against the base, rebasing past the threshold
    ///
    /// `direction` must have a non-zero XZ projection.
    pub fn set_target_from_vector(&mut self, direction: Vec3) {
        self.set_target_angle(planar_angle_deg(direction));
    }

    /// Commit the current offset and re-anchor at `angle` degrees
    pub fn set_base_angle(&mut self, angle: f32) {
        self.accumulated_angle += self.current_offset;
        self.base_angle = angle;
        self.current_offset = 0.0;
    }

    /// Measure a target given directly in degrees
    ///
    /// For hosts that already read an angle (a hinge, a joint) instead of a
    /// direction vector.
    pub fn set_target_angle(&mut self, target_angle: f32) {
        self.current_offset = shortest_angle_distance(self.base_angle, target_angle, FULL_CIRCLE_DEG);

        if libm::fabsf(self.current_offset) > REBASE_THRESHOLD_DEG {
            log_trace!(
                "angle rebase: base {} -> {}, committing {}",
                self.base_angle,
                target_angle,
                self.current_offset
            );
            self.accumulated_angle += self.current_offset;
            self.base_angle = target_angle;
            self.current_offset = 0.0;
        }
    }

    /// `set_base_from_vector` that rejects directions with no XZ component
    pub fn try_set_base_from_vector(&mut self, direction: Vec3) -> TrackingResult<()> {
        let direction = planar_direction(direction).ok_or(TrackingError::DegenerateDirection)?;
        self.set_base_from_vector(direction);
        Ok(())
    }

    /// `set_target_from_vector` that rejects directions with no XZ component
    pub fn try_set_target_from_vector(&mut self, direction: Vec3) -> TrackingResult<()> {
        let direction = planar_direction(direction).ok_or(TrackingError::DegenerateDirection)?;
        self.set_target_from_vector(direction);
        Ok(())
    }

    /// Total rotation since the last reset, degrees, unbounded
    pub fn total_offset(&self) -> f32 {
        self.accumulated_angle + self.current_offset
    }

    /// Anchor angle offsets are measured from
    pub fn base_angle(&self) -> f32 {
        self.base_angle
    }

    /// Offset from the anchor to the latest target
    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    /// Sum of committed offsets
    pub fn accumulated_angle(&self) -> f32 {
        self.accumulated_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(deg: f32) -> Vec3 {
        let rad = deg.to_radians();
        Vec3::new(libm::cosf(rad), 0.0, libm::sinf(rad))
    }

    #[test]
    fn shortest_distance_crosses_seam() {
        assert_eq!(shortest_angle_distance(179.0, -179.0, 360.0), 2.0);
        assert_eq!(shortest_angle_distance(-179.0, 179.0, 360.0), -2.0);
    }

    #[test]
    fn shortest_distance_plain_cases() {
        assert_eq!(shortest_angle_distance(0.0, 0.0, 360.0), 0.0);
        assert_eq!(shortest_angle_distance(10.0, 40.0, 360.0), 30.0);
        assert_eq!(shortest_angle_distance(40.0, 10.0, 360.0), -30.0);
        // More than a full turn apart folds back into range
        assert_eq!(shortest_angle_distance(0.0, 370.0, 360.0), 10.0);
        // Exactly half a turn keeps the sign of the raw delta
        assert_eq!(shortest_angle_distance(0.0, 180.0, 360.0), 180.0);
        assert_eq!(shortest_angle_distance(0.0, -180.0, 360.0), -180.0);
    }

    #[test]
    fn targets_without_rebase() {
        let mut acc = AngleAccumulator::new();
        acc.set_base_from_vector(dir(0.0));
        acc.set_target_from_vector(dir(45.0));

        assert!((acc.current_offset() - 45.0).abs() < 1e-3);
        assert_eq!(acc.accumulated_angle(), 0.0);
        assert!((acc.total_offset() - 45.0).abs() < 1e-3);
    }

    #[test]
    fn single_rebase_past_ninety() {
        let mut acc = AngleAccumulator::new();

        acc.set_target_angle(10.0);
        assert_eq!(acc.accumulated_angle(), 0.0);
        assert_eq!(acc.current_offset(), 10.0);

        acc.set_target_angle(95.0);
        // Rebased: offset committed, base moved
        assert_eq!(acc.accumulated_angle(), 95.0);
        assert_eq!(acc.base_angle(), 95.0);
        assert_eq!(acc.current_offset(), 0.0);

        acc.set_target_angle(185.0);
        // Exactly 90° from the new base is not past the threshold
        assert_eq!(acc.accumulated_angle(), 95.0);
        assert_eq!(acc.current_offset(), 90.0);
        assert_eq!(acc.total_offset(), 185.0);
    }

    #[test]
    fn vector_targets_keep_wrapped_angle_continuous() {
        let mut acc = AngleAccumulator::new();
        acc.set_base_from_vector(dir(0.0));

        acc.set_target_from_vector(dir(10.0));
        acc.set_target_from_vector(dir(95.0));
        assert!((acc.base_angle() - 95.0).abs() < 1e-3);

        // atan2 reports -175° here; the total must still read 185°
        acc.set_target_from_vector(dir(185.0));
        assert!((acc.total_offset() - 185.0).abs() < 1e-3);
    }

    #[test]
    fn base_commits_current_offset() {
        let mut acc = AngleAccumulator::new();
        acc.set_base_from_vector(dir(0.0));
        acc.set_target_from_vector(dir(30.0));
        acc.set_base_from_vector(dir(-60.0));

        assert!((acc.accumulated_angle() - 30.0).abs() < 1e-3);
        assert_eq!(acc.current_offset(), 0.0);

        acc.set_target_from_vector(dir(-40.0));
        assert!((acc.total_offset() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn tracks_multiple_turns_backwards() {
        let mut acc = AngleAccumulator::new();
        acc.set_base_from_vector(dir(0.0));

        // Three full turns clockwise, 30° per frame
        for step in 1..=36 {
            acc.set_target_from_vector(dir(-30.0 * step as f32));
        }

        assert!((acc.total_offset() + 1080.0).abs() < 1e-2);
    }

    #[test]
    fn rejects_degenerate_direction() {
        let mut acc = AngleAccumulator::new();
        acc.set_base_from_vector(dir(0.0));
        acc.set_target_from_vector(dir(20.0));

        let result = acc.try_set_target_from_vector(Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(result, Err(TrackingError::DegenerateDirection));
        assert!((acc.total_offset() - 20.0).abs() < 1e-3);

        assert!(acc.try_set_base_from_vector(Vec3::ZERO).is_err());
        assert!(acc.try_set_target_from_vector(dir(40.0) * 5.0).is_ok());
        assert!((acc.total_offset() - 40.0).abs() < 1e-3);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut acc = AngleAccumulator::new();
        acc.set_base_from_vector(dir(10.0));
        acc.set_target_from_vector(dir(70.0));

        acc.reset();
        let once = acc;
        acc.reset();

        assert_eq!(acc, once);
        assert_eq!(acc, AngleAccumulator::new());
    }
}
