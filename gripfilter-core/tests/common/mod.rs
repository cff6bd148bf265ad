//! Shared pose generators for integration tests
//!
//! - Hand positions orbiting a knob pivot
//! - Controller orientations twisting in place
//! - Straight-line and decelerating throw paths

#![allow(dead_code)]

use glam::{Quat, Vec3};

use gripfilter_core::{Pose, ReferenceFrame};

pub mod harness;

/// Frame time of a 90 Hz headset
pub const DT_90HZ: f32 = 1.0 / 90.0;

/// Knob lying flat at `origin`
pub fn flat_knob(origin: Vec3) -> ReferenceFrame {
    ReferenceFrame::new(origin, Quat::IDENTITY)
}

/// Point on the knob's local XZ plane at `radius`, `deg` around +Y from +X
pub fn planar_point(deg: f32, radius: f32) -> Vec3 {
    let rad = deg.to_radians();
    Vec3::new(rad.cos() * radius, 0.0, rad.sin() * radius)
}

/// Hand `radius` from the pivot of `frame`, `deg` around its axis
pub fn orbit_pose(frame: &ReferenceFrame, deg: f32, radius: f32) -> Pose {
    let local = planar_point(deg, radius);
    Pose::from_position(frame.origin + frame.rotation * local)
}

/// Hand at the pivot with the controller forward twisted to `deg`
///
/// The controller stays level: forward lies in the knob plane, so twist is
/// read from the forward axis.
pub fn level_twist_pose(frame: &ReferenceFrame, deg: f32) -> Pose {
    // Local forward (+Z) rotated to point at `deg` measured from +X
    let yaw = (90.0 - deg).to_radians();
    Pose::new(frame.origin, frame.rotation * Quat::from_rotation_y(yaw))
}

/// Hand at the pivot with the controller pointing down the knob axis
///
/// Twist about the pointing direction moves the controller's up axis around
/// the knob plane; `deg` is where that up axis points.
pub fn pointing_twist_pose(frame: &ReferenceFrame, deg: f32) -> Pose {
    // Pitch forward (+Z) down onto -Y; up (+Y) lands on +Z
    let point_down = Quat::from_rotation_x(core::f32::consts::FRAC_PI_2);
    let twist = Quat::from_rotation_y((90.0 - deg).to_radians());
    Pose::new(frame.origin, frame.rotation * twist * point_down)
}

/// Poses moving at constant `velocity` for `frames` frames of `dt`
pub fn linear_path(start: Vec3, velocity: Vec3, frames: usize, dt: f32) -> Vec<Pose> {
    (1..=frames)
        .map(|i| Pose::from_position(start + velocity * (i as f32 * dt)))
        .collect()
}
