//! Range checks for loaded movement settings.

use super::data::{MovementSettingsDef, SCHEMA_VERSION};

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

/// Helper macro for range checks
macro_rules! check {
    ($errors:expr, $cond:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate movement settings.
/// Returns a list of validation errors, empty if the settings are usable.
pub fn validate_movement_settings(settings: &MovementSettingsDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let m = &settings.movement;

    check!(
        errors,
        settings.schema_version == SCHEMA_VERSION,
        "schema_version",
        "is {}, expected {}",
        settings.schema_version,
        SCHEMA_VERSION
    );
    check!(
        errors,
        m.walk_speed >= 0.0,
        "walk_speed",
        "must be non-negative, got {}",
        m.walk_speed
    );
    check!(
        errors,
        m.sprint_speed >= 0.0,
        "sprint_speed",
        "must be non-negative, got {}",
        m.sprint_speed
    );
    check!(
        errors,
        m.jump_height >= 0.0,
        "jump_height",
        "must be non-negative, got {}",
        m.jump_height
    );
    // Gravity is signed: it is added to vertical velocity every frame
    check!(
        errors,
        m.gravity < 0.0,
        "gravity",
        "must be negative (downward), got {}",
        m.gravity
    );
    check!(
        errors,
        m.rotation_speed >= 0.0,
        "rotation_speed",
        "must be non-negative, got {}",
        m.rotation_speed
    );
    check!(
        errors,
        m.ground_distance > 0.0,
        "ground_distance",
        "must be positive, got {}",
        m.ground_distance
    );
    check!(
        errors,
        !m.ground_layers.is_empty(),
        "ground_layers",
        "must name at least one layer"
    );

    if let Some(input) = &settings.input {
        check!(
            errors,
            input.sensitivity >= 0.0,
            "input.sensitivity",
            "must be non-negative, got {}",
            input.sensitivity
        );
        check!(
            errors,
            input.gravity >= 0.0,
            "input.gravity",
            "must be non-negative, got {}",
            input.gravity
        );
    }

    errors
}
