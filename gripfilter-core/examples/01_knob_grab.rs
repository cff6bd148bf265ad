//! Knob Grab Example
//!
//! A hand grabs a dial by its rim, drags it round, pulls in to the center and
//! finishes the turn with a wrist twist.
//!
//! ## What You'll Learn
//!
//! - Configuring a knob's travel range and snapping
//! - Opening a grab session and ticking it per frame
//! - Reading which hand signal is driving the knob
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_knob_grab
//! ```

use glam::{Quat, Vec3};

use gripfilter_core::{Knob, Pose, ReferenceFrame, TrackerConfig};

fn rim(frame: &ReferenceFrame, deg: f32, radius: f32) -> Pose {
    let rad = deg.to_radians();
    Pose::from_position(frame.origin + Vec3::new(rad.cos() * radius, 0.0, rad.sin() * radius))
}

fn twisted(frame: &ReferenceFrame, deg: f32) -> Pose {
    Pose::new(frame.origin, Quat::from_rotation_y((90.0 - deg).to_radians()))
}

fn main() {
    println!("gripfilter Knob Grab Example");
    println!("============================\n");

    // Volume dial: 270° of travel, snapping every 15°
    let config = TrackerConfig::default()
        .with_angle_range(-135.0, 135.0)
        .with_angle_increment(15.0);
    let frame = ReferenceFrame::new(Vec3::new(0.0, 1.1, 0.4), Quat::IDENTITY);
    let mut knob = Knob::new(config).with_value(0.0);

    println!("Resting at value {:.3} ({:.1}°)\n", knob.value(), knob.angle());

    let mut session = knob.grab(&frame, &rim(&frame, 90.0, 0.15));
    println!("Grabbed by the rim, source: {:?}", session.active_source());

    for deg in (0..=120).step_by(10) {
        let reading = session.tick(&frame, &rim(&frame, 90.0 - deg as f32, 0.15));
        println!(
            "  hand at {:>4}°  ->  angle {:>6.1}°  value {:.3}  step {:?}  [{:?}]",
            90 - deg,
            reading.angle,
            reading.value,
            reading.step,
            reading.source
        );
    }

    println!("\nHand slides to the center and twists:");
    for deg in (0..=40).step_by(10) {
        let reading = session.tick(&frame, &twisted(&frame, 90.0 - deg as f32));
        println!(
            "  twist {:>3}°  ->  angle {:>6.1}°  value {:.3}  [{:?}]",
            deg, reading.angle, reading.value, reading.source
        );
    }

    let value = session.end();
    println!("\nReleased at value {:.3} ({:.1}°)", value, knob.angle());
}
