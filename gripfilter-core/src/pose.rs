//! Poses and the reference frame measurements are taken in
//!
//! A `Pose` is what the host samples from a tracked point each frame (hand,
//! controller, attach point). A `ReferenceFrame` is the transform of the thing
//! being manipulated: knob angles are measured in its local XZ plane, about its
//! local Y axis.
//!
//! Scale is not modelled; distances in the local frame equal world distances.

use glam::{Quat, Vec3};

use crate::constants::MIN_PLANAR_LENGTH;

/// Position and orientation of a tracked point
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    /// World-space position
    pub position: Vec3,
    /// World-space orientation
    pub rotation: Quat,
}

impl Pose {
    /// Pose at `position` with `rotation`
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` with identity rotation
    pub fn from_position(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// Device forward axis (+Z) in world space
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Device up axis (+Y) in world space
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// True when every component is finite and the rotation is usable
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

/// Transform of the manipulated object
///
/// `origin` is the pivot the hand offset is measured from (a knob's handle
/// center); `rotation` orients the local frame whose Y axis is the rotation
/// axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceFrame {
    /// Pivot in world space
    pub origin: Vec3,
    /// Orientation of the local frame in world space
    pub rotation: Quat,
}

impl ReferenceFrame {
    /// Frame at `origin` with `rotation`
    pub fn new(origin: Vec3, rotation: Quat) -> Self {
        Self { origin, rotation }
    }

    /// Rotate a world-space vector into the local frame
    pub fn inverse_transform_vector(&self, v: Vec3) -> Vec3 {
        self.rotation.inverse() * v
    }

    /// Express a world-space point relative to the pivot, in the local frame
    pub fn inverse_transform_point(&self, p: Vec3) -> Vec3 {
        self.inverse_transform_vector(p - self.origin)
    }
}

impl Default for ReferenceFrame {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

/// Flatten `v` onto the XZ plane and normalize it
///
/// Returns `None` when the flattened vector is too short (or not finite) to
/// carry a direction.
pub fn planar_direction(v: Vec3) -> Option<Vec3> {
    let flat = Vec3::new(v.x, 0.0, v.z);
    let length = flat.length();
    if !length.is_finite() || length < MIN_PLANAR_LENGTH {
        return None;
    }
    Some(flat / length)
}

/// Angle of `v`'s XZ projection in degrees, `atan2(z, x)`
///
/// The vector need not be normalized; only its direction matters.
pub fn planar_angle_deg(v: Vec3) -> f32 {
    libm::atan2f(v.z, v.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn planar_direction_drops_height() {
        let dir = planar_direction(Vec3::new(3.0, 10.0, 4.0)).unwrap();
        assert!((dir - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn vertical_vector_has_no_planar_direction() {
        assert!(planar_direction(Vec3::Y).is_none());
        assert!(planar_direction(Vec3::ZERO).is_none());
        assert!(planar_direction(Vec3::new(f32::NAN, 0.0, 1.0)).is_none());
    }

    #[test]
    fn planar_angle_quadrants() {
        assert!((planar_angle_deg(Vec3::X) - 0.0).abs() < 1e-5);
        assert!((planar_angle_deg(Vec3::Z) - 90.0).abs() < 1e-5);
        assert!((planar_angle_deg(-Vec3::Z) + 90.0).abs() < 1e-5);
        assert!((planar_angle_deg(Vec3::new(-1.0, 0.0, 0.0)) - 180.0).abs() < 1e-5);
    }

    #[test]
    fn frame_inverse_transform() {
        let frame = ReferenceFrame::new(Vec3::new(1.0, 0.0, 0.0), Quat::from_rotation_y(FRAC_PI_2));
        // Local +X maps to world -Z under a +90° yaw, so world -Z reads as local +X
        let local = frame.inverse_transform_point(Vec3::new(1.0, 0.0, -1.0));
        assert!((local - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn pose_axes_follow_rotation() {
        let pose = Pose::new(Vec3::ZERO, Quat::from_rotation_x(-FRAC_PI_2));
        // Pitching up by 90° points forward along +Y
        assert!((pose.forward() - Vec3::Y).length() < 1e-5);
        assert!(pose.is_finite());
    }
}
