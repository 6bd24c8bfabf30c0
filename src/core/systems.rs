//! Core domain: scene setup and camera follow.

use bevy::prelude::*;

use crate::core::FollowCamera;
use crate::movement::{PLAYER_SPAWN, Player};

pub(crate) fn setup_scene(mut commands: Commands) {
    let rig = FollowCamera::default();
    let eye = follow_target(&Transform::from_translation(PLAYER_SPAWN), &rig);

    commands.spawn((
        Name::new("Camera"),
        Camera3d::default(),
        Transform::from_translation(eye)
            .looking_at(PLAYER_SPAWN + Vec3::Y * rig.look_height, Vec3::Y),
        rig,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Where the camera wants to be for a player at `player`.
pub fn follow_target(player: &Transform, rig: &FollowCamera) -> Vec3 {
    player.translation + player.rotation * rig.offset
}

pub(crate) fn follow_player(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut camera_query: Query<(&mut Transform, &FollowCamera), Without<Player>>,
) {
    let Some(player) = player_query.iter().next() else {
        return;
    };
    let dt = time.delta_secs();

    for (mut transform, rig) in &mut camera_query {
        let target = follow_target(player, rig);
        let t = 1.0 - (-rig.decay_rate * dt).exp();
        transform.translation = transform.translation.lerp(target, t);
        transform.look_at(player.translation + Vec3::Y * rig.look_height, Vec3::Y);
    }
}
