//! Movement domain: tuning and input resources.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// Vertical velocity held while standing on ground, so the mover keeps
/// pressing into the floor instead of hovering above it.
pub const GROUNDED_VERTICAL_VELOCITY: f32 = -2.0;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    /// Apex height of a standing jump, in world units
    pub jump_height: f32,
    /// Signed vertical acceleration (negative is down)
    pub gravity: f32,
    /// Yaw rate in degrees per second
    pub rotation_speed: f32,
    /// Radius of the ground probe sphere
    pub ground_distance: f32,
    pub ground_layers: Vec<GameLayer>,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            sprint_speed: 9.0,
            jump_height: 2.0,
            gravity: -9.81,
            rotation_speed: 100.0,
            ground_distance: 0.4,
            ground_layers: vec![GameLayer::Ground],
        }
    }
}

impl MovementTuning {
    /// Launch velocity that reaches `jump_height` at the apex.
    /// Uses physics formula: v = sqrt(2gh)
    pub fn jump_velocity(&self) -> f32 {
        (2.0 * self.jump_height * self.gravity.abs()).sqrt()
    }

    pub fn speed(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.sprint_speed
        } else {
            self.walk_speed
        }
    }

    pub fn ground_mask(&self) -> LayerMask {
        LayerMask(
            self.ground_layers
                .iter()
                .fold(0, |bits, layer| bits | layer.to_bits()),
        )
    }

    /// Layers the mover collides with. Always covers `ground_mask`.
    pub fn collision_mask(&self) -> LayerMask {
        LayerMask(self.ground_mask().0 | GameLayer::Wall.to_bits())
    }
}

/// Snapshot of player input for the current frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    /// Smoothed axes: x is strafe (right positive), y is forward
    pub axis: Vec2,
    /// -1 turns left, +1 turns right
    pub rotate: f32,
    pub sprint_held: bool,
    pub jump_just_pressed: bool,
}

/// Keyboard axis ramping. Axes move toward the held direction at
/// `sensitivity` units/s and fall back to zero at `gravity` units/s.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AxisSmoothing {
    pub sensitivity: f32,
    pub gravity: f32,
    /// Jump straight to zero when the held direction reverses
    pub snap: bool,
}

impl Default for AxisSmoothing {
    fn default() -> Self {
        Self {
            sensitivity: 3.0,
            gravity: 3.0,
            snap: true,
        }
    }
}

impl AxisSmoothing {
    /// Immediate response, axes equal their key targets.
    pub fn raw() -> Self {
        Self {
            sensitivity: 0.0,
            gravity: 0.0,
            snap: true,
        }
    }

    /// Advance one axis value toward `target` over `dt` seconds.
    pub fn step(&self, current: f32, target: f32, dt: f32) -> f32 {
        if self.sensitivity <= 0.0 {
            return target;
        }

        if target == 0.0 {
            if self.gravity <= 0.0 {
                return 0.0;
            }
            let fall = self.gravity * dt;
            return if current > 0.0 {
                (current - fall).max(0.0)
            } else {
                (current + fall).min(0.0)
            };
        }

        let start = if self.snap && current != 0.0 && current.signum() != target.signum() {
            0.0
        } else {
            current
        };
        let rise = self.sensitivity * dt;
        if start < target {
            (start + rise).min(target)
        } else {
            (start - rise).max(target)
        }
    }
}
