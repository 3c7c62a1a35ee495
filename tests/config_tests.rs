//! Configuration surface tests: defaults, file round-trip, validation.

use gesture_recognition::config::{Config, EXAMPLE_CONFIG};
use gesture_recognition::{Error, Thresholds};

#[test]
fn default_thresholds_match_documented_rule_table() {
    let t = Thresholds::default();

    assert_eq!(t.min_history_frames, 10);
    assert_eq!(t.hot_lookback_frames, 8);
    assert!((t.hot_mouth_radius - 0.2).abs() < f32::EPSILON);
    assert!((t.hot_drop_distance - 0.15).abs() < f32::EPSILON);
    assert!((t.cold_wrist_shoulder_radius - 0.25).abs() < f32::EPSILON);
    assert!((t.cold_wrist_cross_radius - 0.2).abs() < f32::EPSILON);
    assert!((t.cold_elbow_cross_radius - 0.4).abs() < f32::EPSILON);
    assert!((t.rub_zone_radius - 0.3).abs() < f32::EPSILON);
    assert_eq!(t.rub_dwell_frames, 20);
    assert!((t.rub_min_motion - 0.15).abs() < f32::EPSILON);
    assert_eq!(t.rub_min_oscillations, 2);
    assert!((t.hungry_center_tolerance - 0.2).abs() < f32::EPSILON);
    assert!((t.tired_zone_radius - 0.35).abs() < f32::EPSILON);
    assert_eq!(t.tired_dwell_frames, 15);
    assert!((t.tired_max_motion - 0.10).abs() < f32::EPSILON);
    assert!((t.oscillation_noise_floor - 0.01).abs() < f32::EPSILON);
    assert!((t.belly_y_offset - 0.1).abs() < f32::EPSILON);
}

#[test]
fn config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("gesture-config-{}.yaml", std::process::id()));

    let mut config = Config::default();
    config.buffer.capacity = 60;
    config.thresholds.rub_zone_radius = 0.25;

    config.to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.buffer.capacity, 60);
    assert!((loaded.thresholds.rub_zone_radius - 0.25).abs() < f32::EPSILON);
    assert_eq!(loaded.thresholds.rub_dwell_frames, 20);
}

#[test]
fn example_config_is_valid() {
    let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
    config.validate().unwrap();
}

#[test]
fn missing_config_file_is_an_io_error() {
    let result = Config::from_file("/nonexistent/gesture-config.yaml");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let path = std::env::temp_dir().join(format!("gesture-bad-config-{}.yaml", std::process::id()));
    std::fs::write(&path, "buffer: [not, a, mapping").unwrap();

    let result = Config::from_file(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn validation_rejections() {
    let mut zero_capacity = Config::default();
    zero_capacity.buffer.capacity = 0;
    assert!(zero_capacity.validate().is_err());

    let mut short_window = Config::default();
    short_window.buffer.capacity = 8;
    assert!(short_window.validate().is_err());

    let mut zero_dwell = Config::default();
    zero_dwell.thresholds.rub_dwell_frames = 0;
    assert!(zero_dwell.validate().is_err());

    let mut bad_radius = Config::default();
    bad_radius.thresholds.tired_zone_radius = f32::NAN;
    assert!(bad_radius.validate().is_err());
}
