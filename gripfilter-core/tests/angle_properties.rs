//! Property tests for the angle accumulator and the velocity smoother

#![cfg(test)]

mod common;

use glam::Vec3;
use proptest::prelude::*;

use gripfilter_core::{
    shortest_angle_distance, AngleAccumulator, ConstantWeight, SmoothingConfig, VelocitySmoother,
};

use common::{planar_point, DT_90HZ};

proptest! {
    #[test]
    fn total_offset_follows_true_rotation(
        start in -180.0f32..180.0,
        steps in prop::collection::vec(-89.0f32..89.0, 1..80),
    ) {
        let mut acc = AngleAccumulator::new();
        acc.set_base_from_vector(planar_point(start, 1.0));

        let mut truth = 0.0f32;
        for step in &steps {
            truth += step;
            acc.set_target_from_vector(planar_point(start + truth, 1.0));
        }

        let tolerance = 1e-3 * (steps.len() as f32 + truth.abs() / 90.0 + 1.0);
        prop_assert!(
            (acc.total_offset() - truth).abs() < tolerance,
            "total {} vs truth {}",
            acc.total_offset(),
            truth
        );
    }

    #[test]
    fn current_offset_stays_within_threshold(
        targets in prop::collection::vec(-720.0f32..720.0, 1..50),
    ) {
        let mut acc = AngleAccumulator::new();
        for target in targets {
            acc.set_target_angle(target);
            prop_assert!(acc.current_offset().abs() <= 90.0);
        }
    }

    #[test]
    fn shortest_distance_is_bounded_and_consistent(
        start in -1000.0f32..1000.0,
        end in -1000.0f32..1000.0,
    ) {
        let d = shortest_angle_distance(start, end, 360.0);
        prop_assert!(d.abs() <= 180.0 + 1e-3);

        // Landing point agrees with `end` modulo a full turn
        let residue = (start + d - end).rem_euclid(360.0);
        prop_assert!(residue < 1e-2 || residue > 360.0 - 1e-2, "residue {}", residue);
    }

    #[test]
    fn constant_samples_average_to_the_constant(
        x in -50.0f32..50.0,
        y in -50.0f32..50.0,
        z in -50.0f32..50.0,
        count in 1usize..40,
    ) {
        let v = Vec3::new(x, y, z);
        let mut linear_decay = VelocitySmoother::new(SmoothingConfig::default());
        let mut flat: VelocitySmoother<ConstantWeight> =
            VelocitySmoother::with_curve(SmoothingConfig::default(), ConstantWeight);
        let mut squared = VelocitySmoother::with_curve(SmoothingConfig::default(), |f: f32| f * f);
        linear_decay.start_tracking();
        flat.start_tracking();
        squared.start_tracking();

        for i in 1..=count {
            let now = i as f32 * DT_90HZ;
            linear_decay.record_rates(v, -v, now).unwrap();
            flat.record_rates(v, -v, now).unwrap();
            squared.record_rates(v, -v, now).unwrap();
        }

        let now = count as f32 * DT_90HZ;
        for smoothed in [
            linear_decay.smoothed_velocity(now),
            flat.smoothed_velocity(now),
            squared.smoothed_velocity(now),
        ] {
            prop_assert!((smoothed.linear - v).length() <= 1e-4 * (1.0 + v.length()));
            prop_assert!((smoothed.angular + v).length() <= 1e-4 * (1.0 + v.length()));
        }
    }

    #[test]
    fn smoothed_output_stays_within_sample_range(
        rates in prop::collection::vec(-10.0f32..10.0, 1..30),
    ) {
        let mut smoother = VelocitySmoother::new(SmoothingConfig::default());
        smoother.start_tracking();
        for (i, rate) in rates.iter().enumerate() {
            smoother.record_rates(Vec3::new(*rate, 0.0, 0.0), Vec3::ZERO, (i + 1) as f32 * DT_90HZ).unwrap();
        }

        let now = rates.len() as f32 * DT_90HZ;
        let out = smoother.smoothed_velocity(now).linear.x;
        let lo = rates.iter().cloned().fold(f32::INFINITY, f32::min);
        let hi = rates.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        prop_assert!(out >= lo - 1e-4 && out <= hi + 1e-4);
    }
}

#[test]
fn empty_smoother_reads_zero() {
    let smoother = VelocitySmoother::new(SmoothingConfig::default());
    let v = smoother.smoothed_velocity(0.0);
    assert_eq!(v.linear, Vec3::ZERO);
    assert_eq!(v.angular, Vec3::ZERO);
}

#[test]
fn smoother_reset_is_idempotent() {
    let mut smoother = VelocitySmoother::new(SmoothingConfig::default());
    smoother.start_tracking();
    smoother.record_rates(Vec3::X, Vec3::Y, 0.1).unwrap();

    smoother.reset();
    let once = (smoother.len(), smoother.last_pose(), smoother.smoothed_velocity(0.1));
    smoother.reset();
    let twice = (smoother.len(), smoother.last_pose(), smoother.smoothed_velocity(0.1));

    assert_eq!(once, twice);
    assert_eq!(once.0, 0);
}

#[test]
fn rebase_scenario_ten_ninety_five_one_eighty_five() {
    let mut acc = AngleAccumulator::new();
    acc.set_target_angle(10.0);
    acc.set_target_angle(95.0);
    let accumulated_after_rebase = acc.accumulated_angle();
    acc.set_target_angle(185.0);

    assert_eq!(accumulated_after_rebase, 95.0);
    // No second rebase
    assert_eq!(acc.accumulated_angle(), 95.0);
    assert_eq!(acc.total_offset(), 185.0);
}
