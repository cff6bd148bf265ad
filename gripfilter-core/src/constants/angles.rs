//! Angle Constants
//!
//! All angles in this crate are degrees unless a name says otherwise.
//! Angular *velocities* leave the smoother in radians per second.

/// Degrees in a full turn.
pub const FULL_CIRCLE_DEG: f32 = 360.0;

/// Offset at which an accumulator commits and re-anchors its base angle.
///
/// Kept well below 180° so a delta is never ambiguous about which way round
/// the circle it went. A target that moves more than this in one frame is
/// folded into the accumulated total and tracking continues from there.
pub const REBASE_THRESHOLD_DEG: f32 = 90.0;

/// Smallest XZ length treated as a usable direction.
///
/// Below this `atan2` still returns a number, but it is noise: the hand is
/// effectively on the rotation axis.
pub const MIN_PLANAR_LENGTH: f32 = 1.0e-5;
