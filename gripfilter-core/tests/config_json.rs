//! Loading control tuning from JSON authored alongside the scene

#![cfg(feature = "serde")]

use gripfilter_core::{Knob, RotationSource, ThrowConfig, TrackerConfig, TrackingError};

#[test]
fn test_partial_tracker_config_fills_defaults() {
    let json = r#"{ "min_angle": -135.0, "max_angle": 135.0, "angle_increment": 15.0 }"#;
    let config: TrackerConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.min_angle, -135.0);
    assert_eq!(config.angle_increment, 15.0);
    assert!(config.clamped_motion);
    assert_eq!(config.twist_sensitivity, TrackerConfig::default().twist_sensitivity);
    assert!(config.validate().is_ok());
}

#[test]
fn test_inverted_json_range_is_reported_then_fixed() {
    let json = r#"{ "min_angle": 90.0, "max_angle": -90.0 }"#;
    let config: TrackerConfig = serde_json::from_str(json).unwrap();

    assert_eq!(
        config.validate(),
        Err(TrackingError::InvertedAngleRange { min: 90.0, max: -90.0 })
    );

    let knob = Knob::new(config);
    assert_eq!(knob.config().min_angle, -90.0);
    assert_eq!(knob.config().max_angle, 90.0);
}

#[test]
fn test_throw_config_round_trip_through_json() {
    let json = r#"{ "smoothing": { "window_secs": 0.15 }, "linear_scale": 2.0 }"#;
    let config: ThrowConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.smoothing.window_secs, 0.15);
    assert_eq!(config.linear_scale, 2.0);
    assert_eq!(config.angular_scale, ThrowConfig::default().angular_scale);

    let back: ThrowConfig = serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_rotation_source_names() {
    let source: RotationSource = serde_json::from_str(r#""Up""#).unwrap();
    assert_eq!(source, RotationSource::Up);
}

#[test]
fn test_loaded_knob_is_corrected_like_a_new_one() {
    let json = r#"{ "config": { "min_angle": 100.0, "max_angle": 0.0, "angle_increment": 40.0 }, "value": 7.0 }"#;
    let knob: Knob = serde_json::from_str(json).unwrap();

    assert_eq!(knob.config().min_angle, 0.0);
    assert_eq!(knob.config().max_angle, 100.0);
    // Clamped to the end, then snapped to the last step inside
    assert_eq!(knob.value(), 0.8);
    assert_eq!(knob.angle(), 80.0);

    let saved = serde_json::to_string(&knob).unwrap();
    let reloaded: Knob = serde_json::from_str(&saved).unwrap();
    assert_eq!(reloaded, knob);
}
