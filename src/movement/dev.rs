//! Movement domain: test level for walking around.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

#[derive(Debug, Clone, Copy)]
enum BlockKind {
    Ground,
    Wall,
}

fn spawn_block(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: Handle<StandardMaterial>,
    kind: BlockKind,
    size: Vec3,
    transform: Transform,
) {
    let layer = match kind {
        BlockKind::Ground => GameLayer::Ground,
        BlockKind::Wall => GameLayer::Wall,
    };

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(material),
        transform,
        RigidBody::Static,
        Collider::cuboid(size.x, size.y, size.z),
        CollisionLayers::new(layer, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = materials.add(Color::srgb(0.4, 0.5, 0.4));
    let platform_color = materials.add(Color::srgb(0.5, 0.4, 0.3));
    let wall_color = materials.add(Color::srgb(0.3, 0.3, 0.4));

    // Floor
    spawn_block(
        &mut commands,
        &mut meshes,
        ground_color,
        BlockKind::Ground,
        Vec3::new(60.0, 1.0, 60.0),
        Transform::from_xyz(0.0, -0.5, 0.0),
    );

    // Steps of increasing height; the tallest one needs a sprint jump to reach
    for (i, height) in [0.75_f32, 1.5, 2.25].into_iter().enumerate() {
        spawn_block(
            &mut commands,
            &mut meshes,
            platform_color.clone(),
            BlockKind::Ground,
            Vec3::new(4.0, height, 4.0),
            Transform::from_xyz(-8.0 + i as f32 * 5.0, height * 0.5, -10.0),
        );
    }

    // Ramp
    spawn_block(
        &mut commands,
        &mut meshes,
        platform_color,
        BlockKind::Ground,
        Vec3::new(4.0, 0.5, 10.0),
        Transform::from_xyz(10.0, 1.2, 4.0).with_rotation(Quat::from_rotation_x(0.25)),
    );

    // Boundary walls
    for (size, position) in [
        (Vec3::new(60.0, 4.0, 1.0), Vec3::new(0.0, 2.0, -30.0)),
        (Vec3::new(60.0, 4.0, 1.0), Vec3::new(0.0, 2.0, 30.0)),
        (Vec3::new(1.0, 4.0, 60.0), Vec3::new(-30.0, 2.0, 0.0)),
        (Vec3::new(1.0, 4.0, 60.0), Vec3::new(30.0, 2.0, 0.0)),
    ] {
        spawn_block(
            &mut commands,
            &mut meshes,
            wall_color.clone(),
            BlockKind::Wall,
            size,
            Transform::from_translation(position),
        );
    }
}
