//! Debug tooling for tuning the controller.
//!
//! Features:
//! - Ground probe gizmo (F2)
//! - Position / heading / vertical velocity / grounded readout (F1 or backtick)

use bevy::prelude::*;

mod state;
mod systems;
mod ui;

pub use state::DebugState;
pub use ui::{DebugInfoOverlay, format_readout, heading_degrees};

use crate::movement::MovementSystems;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                systems::handle_debug_hotkeys,
                systems::update_status_message,
                systems::draw_ground_probe,
                systems::update_debug_info_overlay,
            )
                .chain()
                .after(MovementSystems::Apply),
        );
    }
}
