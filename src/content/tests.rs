//! Content domain: tests for movement.ron parsing and validation.

use std::path::{Path, PathBuf};

use super::{
    MovementSettingsDef, load_movement_settings, parse_single, resolve_movement_settings,
    validate_movement_settings,
};
use crate::movement::{AxisSmoothing, GameLayer, MovementTuning};

const SAMPLE: &str = r#"(
    schema_version: 1,
    movement: (
        walk_speed: 4.0,
        sprint_speed: 8.0,
        jump_height: 1.5,
        gravity: -20.0,
        rotation_speed: 90.0,
        ground_distance: 0.3,
        ground_layers: [Ground, Wall],
    ),
    input: (
        sensitivity: 5.0,
        gravity: 4.0,
        snap: false,
    ),
)"#;

fn sample() -> MovementSettingsDef {
    match parse_single("sample.ron", SAMPLE) {
        Ok(settings) => settings,
        Err(e) => panic!("{}", e),
    }
}

fn assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data")
}

#[test]
fn test_parse_sample_settings() {
    let settings = sample();
    assert_eq!(settings.schema_version, 1);
    assert_eq!(settings.movement.walk_speed, 4.0);
    assert_eq!(
        settings.movement.ground_layers,
        vec![GameLayer::Ground, GameLayer::Wall]
    );
    assert!(settings.input.is_some());
}

#[test]
fn test_resolve_sample_settings() {
    let (tuning, smoothing) = match resolve_movement_settings(&sample()) {
        Ok(resolved) => resolved,
        Err(errors) => panic!("unexpected errors: {:?}", errors),
    };

    assert_eq!(tuning.sprint_speed, 8.0);
    assert_eq!(tuning.gravity, -20.0);
    assert_eq!(tuning.ground_layers.len(), 2);
    assert_eq!(
        smoothing,
        AxisSmoothing {
            sensitivity: 5.0,
            gravity: 4.0,
            snap: false,
        }
    );
}

#[test]
fn test_missing_input_section_uses_default_smoothing() {
    let contents = r#"(
        schema_version: 1,
        movement: (
            walk_speed: 5.0,
            sprint_speed: 9.0,
            jump_height: 2.0,
            gravity: -9.81,
            rotation_speed: 100.0,
            ground_distance: 0.4,
            ground_layers: [Ground],
        ),
    )"#;
    let settings: MovementSettingsDef = match parse_single("no_input.ron", contents) {
        Ok(settings) => settings,
        Err(e) => panic!("{}", e),
    };
    assert!(settings.input.is_none());

    let resolved = resolve_movement_settings(&settings).map(|(_, s)| s);
    assert_eq!(resolved, Ok(AxisSmoothing::default()));
}

#[test]
fn test_parse_error_names_file() {
    let result: Result<MovementSettingsDef, _> = parse_single("broken.ron", "(schema_version: ");
    let Err(e) = result else {
        panic!("broken RON parsed");
    };
    assert_eq!(e.file, "broken.ron");
    assert!(e.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_validation_rejects_upward_gravity() {
    let mut settings = sample();
    settings.movement.gravity = 9.81;

    let errors = validate_movement_settings(&settings);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "gravity");
}

#[test]
fn test_validation_collects_all_errors() {
    let mut settings = sample();
    settings.schema_version = 7;
    settings.movement.walk_speed = -1.0;
    settings.movement.ground_distance = 0.0;
    settings.movement.ground_layers.clear();
    if let Some(input) = settings.input.as_mut() {
        input.sensitivity = -3.0;
    }

    let fields: Vec<_> = validate_movement_settings(&settings)
        .iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(
        fields,
        vec![
            "schema_version",
            "walk_speed",
            "ground_distance",
            "ground_layers",
            "input.sensitivity",
        ]
    );
}

#[test]
fn test_validation_rejects_nan() {
    let mut settings = sample();
    settings.movement.jump_height = f32::NAN;

    let errors = validate_movement_settings(&settings);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "jump_height");
}

#[test]
fn test_shipped_movement_ron_matches_defaults() {
    let settings = match load_movement_settings(&assets_dir()) {
        Ok(settings) => settings,
        Err(e) => panic!("{}", e),
    };
    let (tuning, smoothing) = match resolve_movement_settings(&settings) {
        Ok(resolved) => resolved,
        Err(errors) => panic!("shipped movement.ron is invalid: {:?}", errors),
    };

    assert_eq!(tuning, MovementTuning::default());
    assert_eq!(smoothing, AxisSmoothing::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let Err(e) = load_movement_settings(Path::new("does/not/exist")) else {
        panic!("loaded settings from a missing directory");
    };
    assert!(e.message.starts_with("IO error"));
}
