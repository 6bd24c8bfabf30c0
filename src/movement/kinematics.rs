//! Movement domain: frame kinematics, free of ECS access.
//!
//! Everything here is a plain function of controller state, tuning, input and
//! frame delta so the per-frame contract can be exercised without a physics
//! world.

use bevy::prelude::*;

use crate::movement::{GROUNDED_VERTICAL_VELOCITY, MovementInput, MovementState, MovementTuning};

/// Result of one controller step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMotion {
    /// Yaw applied this frame in degrees, positive turns right
    pub yaw_degrees: f32,
    /// Orientation after applying the yaw
    pub rotation: Quat,
    pub horizontal: Vec3,
    pub vertical: Vec3,
    pub jumped: bool,
}

/// Keep a resting character pressed into the floor.
pub fn settle_on_ground(state: &mut MovementState) {
    if state.on_ground && state.velocity.y < 0.0 {
        state.velocity.y = GROUNDED_VERTICAL_VELOCITY;
    }
}

pub fn yaw_delta(rotate: f32, rotation_speed: f32, dt: f32) -> f32 {
    rotate * rotation_speed * dt
}

/// Rotate `rotation` by `degrees` around world up. Positive is clockwise seen
/// from above, which in a right-handed Y-up world is a negative angle.
pub fn apply_yaw(rotation: Quat, degrees: f32) -> Quat {
    Quat::from_rotation_y(-degrees.to_radians()) * rotation
}

/// World-space horizontal displacement for this frame.
pub fn horizontal_motion(rotation: Quat, axis: Vec2, speed: f32, dt: f32) -> Vec3 {
    let right = rotation * Vec3::X;
    let forward = rotation * Vec3::NEG_Z;
    let direction = right * axis.x + forward * axis.y;
    direction * speed * dt
}

/// Launch if jump was pressed this frame while grounded. Returns whether a
/// jump happened.
pub fn try_jump(state: &mut MovementState, tuning: &MovementTuning, jump_just_pressed: bool) -> bool {
    if jump_just_pressed && state.on_ground {
        state.velocity.y = tuning.jump_velocity();
        true
    } else {
        false
    }
}

pub fn integrate_gravity(state: &mut MovementState, gravity: f32, dt: f32) {
    state.velocity.y += gravity * dt;
}

pub fn vertical_motion(state: &MovementState, dt: f32) -> Vec3 {
    Vec3::new(0.0, state.velocity.y, 0.0) * dt
}

/// Run the full per-frame contract. `state.on_ground` must already hold this
/// frame's ground query result.
pub fn step(
    state: &mut MovementState,
    tuning: &MovementTuning,
    input: &MovementInput,
    rotation: Quat,
    dt: f32,
) -> FrameMotion {
    settle_on_ground(state);

    let yaw_degrees = yaw_delta(input.rotate, tuning.rotation_speed, dt);
    let rotation = apply_yaw(rotation, yaw_degrees);

    let speed = tuning.speed(input.sprint_held);
    let horizontal = horizontal_motion(rotation, input.axis, speed, dt);

    let jumped = try_jump(state, tuning, input.jump_just_pressed);
    integrate_gravity(state, tuning.gravity, dt);
    let vertical = vertical_motion(state, dt);

    FrameMotion {
        yaw_degrees,
        rotation,
        horizontal,
        vertical,
        jumped,
    }
}
