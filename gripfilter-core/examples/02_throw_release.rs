//! Throw Release Example
//!
//! A ball is swung forward for a few frames, the hand brakes, and the ball is
//! let go. The launch velocity comes from the smoothed history rather than
//! the last (slow) frame.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_throw_release
//! ```

use glam::{Quat, Vec3};

use gripfilter_core::{Pose, ThrowConfig, ThrowSession};

const DT: f32 = 1.0 / 90.0;

fn main() {
    println!("gripfilter Throw Release Example");
    println!("================================\n");

    let start = Pose::from_position(Vec3::new(0.0, 1.2, 0.0));
    let mut session = ThrowSession::begin(ThrowConfig::default(), start);

    let mut position = start.position;
    let mut spin = 0.0f32;
    for frame in 1..=24 {
        // Accelerate forward, then brake over the last 6 frames
        let speed = if frame <= 18 { 0.2 * frame as f32 } else { 3.6 - 0.5 * (frame - 18) as f32 };
        position += Vec3::new(0.0, 0.3, 1.0).normalize() * speed * DT;
        spin += 4.0 * DT;

        session.tick(Pose::new(position, Quat::from_rotation_x(spin)), DT);

        let v = session.velocity();
        println!(
            "frame {:>2}  t={:.3}s  raw speed {:.2} m/s  smoothed {:.2} m/s",
            frame,
            session.elapsed(),
            speed,
            v.linear.length()
        );
    }

    let release = session.release();
    println!("\nRelease velocity: {:?} ({:.2} m/s)", release.linear, release.speed());
    println!("Release spin:     {:?} rad/s", release.angular);
    println!("Counts as a flick (> 3 m/s): {}", release.is_flick(3.0));
}
