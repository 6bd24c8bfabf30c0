//! Debug domain: readout overlay.

use bevy::prelude::*;

use crate::movement::MovementState;

/// Marker for the controller readout
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

/// Yaw of `rotation` in degrees, positive to the right of -Z.
pub fn heading_degrees(rotation: Quat) -> f32 {
    let forward = rotation * Vec3::NEG_Z;
    forward.x.atan2(-forward.z).to_degrees()
}

pub fn format_readout(
    transform: &Transform,
    state: &MovementState,
    status: Option<&str>,
) -> String {
    let pos = transform.translation;
    let mut text = format!(
        "Pos: ({:.2}, {:.2}, {:.2})\nHeading: {:.1}\nVelocity Y: {:.3}\nGrounded: {}",
        pos.x,
        pos.y,
        pos.z,
        heading_degrees(transform.rotation),
        state.velocity.y,
        state.on_ground
    );
    if let Some(status) = status {
        text.push('\n');
        text.push_str(status);
    }
    text
}
