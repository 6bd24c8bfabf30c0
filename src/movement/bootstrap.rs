//! Movement domain: player bootstrap.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, GroundCheck, GroundCheckAnchor, MovementState, MovementTuning, PendingMotion,
    Player,
};

pub const PLAYER_RADIUS: f32 = 0.5;
/// Cylinder section of the capsule; total height is this plus both caps.
pub const PLAYER_CYLINDER_LENGTH: f32 = 1.0;
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Distance from the capsule centre down to the feet.
pub fn feet_offset() -> f32 {
    PLAYER_CYLINDER_LENGTH * 0.5 + PLAYER_RADIUS
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let player = commands
        .spawn((
            Name::new("Player"),
            Player,
            MovementState::default(),
            PendingMotion::default(),
            // Rendering
            Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_CYLINDER_LENGTH))),
            MeshMaterial3d(materials.add(Color::srgb(0.9, 0.85, 0.8))),
            Transform::from_translation(PLAYER_SPAWN),
            // Physics: kinematic, moved only through MoveAndSlide
            (
                RigidBody::Kinematic,
                Collider::capsule(PLAYER_RADIUS, PLAYER_CYLINDER_LENGTH),
                CollisionLayers::new(GameLayer::Player, tuning.collision_mask()),
            ),
        ))
        .id();

    let anchor = commands
        .spawn((
            Name::new("GroundCheck"),
            GroundCheckAnchor,
            Transform::from_xyz(0.0, -feet_offset(), 0.0),
            ChildOf(player),
        ))
        .id();

    commands.entity(player).insert(GroundCheck { anchor });

    info!("Spawned player at {:?}", PLAYER_SPAWN);
}
