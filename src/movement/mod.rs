//! Movement domain: per-frame character controller (ground probe, yaw,
//! walk/sprint, jump and gravity) on top of avian's kinematic mover.

use bevy::prelude::*;

mod bootstrap;
mod components;
mod dev;
pub mod kinematics;
mod resources;
mod systems;


pub use bootstrap::*;
pub use components::*;
pub use resources::*;

/// Ordering of the controller's per-frame work.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSystems {
    Input,
    Detect,
    Control,
    Apply,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<AxisSmoothing>()
            .configure_sets(
                Update,
                (
                    MovementSystems::Input,
                    MovementSystems::Detect,
                    MovementSystems::Control,
                    MovementSystems::Apply,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                (dev::spawn_test_level, bootstrap::spawn_player),
            )
            .add_systems(
                Update,
                (
                    systems::read_input.in_set(MovementSystems::Input),
                    systems::detect_ground.in_set(MovementSystems::Detect),
                    systems::update_controller.in_set(MovementSystems::Control),
                    systems::apply_motion.in_set(MovementSystems::Apply),
                ),
            );
    }
}
