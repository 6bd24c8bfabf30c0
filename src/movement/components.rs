//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, ramps)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-entity controller state. Only `velocity.y` is ever integrated;
/// horizontal motion is derived from input every frame.
#[derive(Component, Debug, Default, Clone)]
pub struct MovementState {
    pub velocity: Vec3,
    pub on_ground: bool,
}

/// Points at the child entity whose world position is the ground probe centre.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundCheck {
    pub anchor: Entity,
}

/// Marker for the ground probe anchor (sits at the character's feet).
#[derive(Component, Debug)]
pub struct GroundCheckAnchor;

/// Motion deltas produced by the controller this frame, consumed by the mover.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct PendingMotion {
    pub horizontal: Vec3,
    pub vertical: Vec3,
}

impl PendingMotion {
    pub fn clear(&mut self) {
        self.horizontal = Vec3::ZERO;
        self.vertical = Vec3::ZERO;
    }
}
