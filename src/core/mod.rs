//! Core domain: camera and lighting around the controlled character.

use bevy::prelude::*;

mod systems;

pub use systems::follow_target;

use crate::movement::MovementSystems;

/// Third-person camera rig. `offset` is in the player's local frame.
#[derive(Component, Debug, Clone)]
pub struct FollowCamera {
    pub offset: Vec3,
    /// Height above the player's origin the camera looks at
    pub look_height: f32,
    /// Exponential catch-up rate, per second
    pub decay_rate: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 3.0, 7.0),
            look_height: 1.0,
            decay_rate: 10.0,
        }
    }
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.55, 0.7, 0.85)))
            .add_systems(Startup, systems::setup_scene)
            .add_systems(
                Update,
                systems::follow_player.after(MovementSystems::Apply),
            );
    }
}
