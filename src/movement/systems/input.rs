//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{AxisSmoothing, MovementInput};

pub(crate) fn read_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    smoothing: Res<AxisSmoothing>,
    mut input: ResMut<MovementInput>,
) {
    let dt = time.delta_secs();

    // Strafe axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Forward axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(
        smoothing.step(input.axis.x, x, dt),
        smoothing.step(input.axis.y, y, dt),
    );

    // Turning: E overrides Q when both are held
    input.rotate = if keyboard.pressed(KeyCode::KeyE) {
        1.0
    } else if keyboard.pressed(KeyCode::KeyQ) {
        -1.0
    } else {
        0.0
    };

    input.sprint_held = keyboard.pressed(KeyCode::ShiftLeft);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
}
