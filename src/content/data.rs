//! Serde definitions for the RON files under assets/data.

use serde::{Deserialize, Serialize};

use crate::movement::{AxisSmoothing, GameLayer, MovementTuning};

pub const SCHEMA_VERSION: u32 = 1;

/// Top-level contents of movement.ron.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementSettingsDef {
    pub schema_version: u32,
    pub movement: MovementDef,
    #[serde(default)]
    pub input: Option<InputDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementDef {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub jump_height: f32,
    pub gravity: f32,
    pub rotation_speed: f32,
    pub ground_distance: f32,
    pub ground_layers: Vec<GameLayer>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputDef {
    pub sensitivity: f32,
    pub gravity: f32,
    pub snap: bool,
}

impl From<&MovementDef> for MovementTuning {
    fn from(def: &MovementDef) -> Self {
        Self {
            walk_speed: def.walk_speed,
            sprint_speed: def.sprint_speed,
            jump_height: def.jump_height,
            gravity: def.gravity,
            rotation_speed: def.rotation_speed,
            ground_distance: def.ground_distance,
            ground_layers: def.ground_layers.clone(),
        }
    }
}

impl From<&InputDef> for AxisSmoothing {
    fn from(def: &InputDef) -> Self {
        Self {
            sensitivity: def.sensitivity,
            gravity: def.gravity,
            snap: def.snap,
        }
    }
}
