//! Content domain: data-driven tuning loaded from assets/data at startup.

use bevy::prelude::*;
use std::path::PathBuf;

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::*;
pub use loader::*;
pub use validation::*;

use crate::movement::{AxisSmoothing, MovementTuning};

/// Directory holding the RON content files.
#[derive(Resource, Debug, Clone)]
pub struct ContentDir(pub PathBuf);

impl Default for ContentDir {
    fn default() -> Self {
        Self(PathBuf::from("assets/data"))
    }
}

/// Convert loaded settings into runtime resources, rejecting invalid values.
pub fn resolve_movement_settings(
    settings: &MovementSettingsDef,
) -> Result<(MovementTuning, AxisSmoothing), Vec<ValidationError>> {
    let errors = validate_movement_settings(settings);
    if !errors.is_empty() {
        return Err(errors);
    }

    let tuning = MovementTuning::from(&settings.movement);
    let smoothing = settings
        .input
        .as_ref()
        .map(AxisSmoothing::from)
        .unwrap_or_default();
    Ok((tuning, smoothing))
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentDir>()
            .add_systems(PreStartup, load_movement_content);
    }
}

/// Load movement.ron into MovementTuning/AxisSmoothing. Failures are logged
/// and leave the built-in defaults in place.
fn load_movement_content(mut commands: Commands, dir: Res<ContentDir>) {
    let settings = match load_movement_settings(&dir.0) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}; using default movement tuning", e);
            return;
        }
    };

    match resolve_movement_settings(&settings) {
        Ok((tuning, smoothing)) => {
            info!(
                "Loaded movement tuning: walk={}, sprint={}, jump_height={}, gravity={}, rotation={}deg/s, jump_velocity={:.3}",
                tuning.walk_speed,
                tuning.sprint_speed,
                tuning.jump_height,
                tuning.gravity,
                tuning.rotation_speed,
                tuning.jump_velocity()
            );
            commands.insert_resource(tuning);
            commands.insert_resource(smoothing);
        }
        Err(errors) => {
            for e in &errors {
                error!("Invalid movement.ron: {}", e);
            }
            warn!(
                "Ignoring movement.ron ({} errors), using default movement tuning",
                errors.len()
            );
        }
    }
}
