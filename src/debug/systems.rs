//! Debug domain: debug systems for hotkeys, gizmos and the readout.

use bevy::math::Isometry3d;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, format_readout, spawn_debug_info_overlay};
use crate::movement::{GroundCheck, GroundCheckAnchor, MovementState, MovementTuning, Player};

/// F1 toggles the readout, F2 toggles the probe gizmo
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Readout {}", on_off(debug_state.show_info));
    }

    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_probe = !debug_state.show_probe;
        let msg = format!("Ground probe {}", on_off(debug_state.show_probe));
        info!("[DEBUG] {}", msg);
        debug_state.set_message(msg, 2.0);
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

/// Draw the ground probe sphere, green when grounded
pub(crate) fn draw_ground_probe(
    mut gizmos: Gizmos,
    debug_state: Res<DebugState>,
    tuning: Res<MovementTuning>,
    anchors: Query<&GlobalTransform, With<GroundCheckAnchor>>,
    player_query: Query<(&GroundCheck, &MovementState), With<Player>>,
) {
    if !debug_state.show_probe {
        return;
    }

    for (ground_check, state) in &player_query {
        let Ok(anchor) = anchors.get(ground_check.anchor) else {
            continue;
        };
        let color = if state.on_ground {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.3, 0.2)
        };
        gizmos.sphere(
            Isometry3d::from_translation(anchor.translation()),
            tuning.ground_distance,
            color,
        );
    }
}

/// Update the readout with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &MovementState), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, state)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let status = debug_state
            .status_message
            .as_ref()
            .map(|(msg, _)| msg.as_str());
        **text = format_readout(transform, state, status);
    }
}
