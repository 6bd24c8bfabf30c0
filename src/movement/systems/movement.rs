//! Movement domain: controller update and motion submission.

use avian3d::character_controller::move_and_slide::{MoveAndSlide, MoveAndSlideConfig, MoveAndSlideHitResponse};
use avian3d::prelude::*;
use bevy::prelude::*;
use std::time::Duration;

use crate::movement::kinematics;
use crate::movement::{MovementInput, MovementState, MovementTuning, PendingMotion, Player};

/// Deltas handed to the mover are already scaled by the frame time, so the
/// mover integrates them over one unit second.
const DISPLACEMENT_STEP: Duration = Duration::from_secs(1);

pub(crate) fn update_controller(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Transform, &mut MovementState, &mut PendingMotion), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut state, mut pending) in &mut query {
        let motion = kinematics::step(&mut state, &tuning, &input, transform.rotation, dt);

        if motion.yaw_degrees != 0.0 {
            transform.rotation = motion.rotation;
        }
        if motion.jumped {
            debug!("Jump: velocity_y={:.3}", state.velocity.y);
        }

        pending.horizontal = motion.horizontal;
        pending.vertical = motion.vertical;
    }
}

pub(crate) fn apply_motion(
    move_and_slide: MoveAndSlide,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &Collider, &mut Transform, &mut PendingMotion), With<Player>>,
) {
    let config = MoveAndSlideConfig::default();

    for (entity, collider, mut transform, mut pending) in &mut query {
        let filter =
            SpatialQueryFilter::from_mask(tuning.collision_mask()).with_excluded_entities([entity]);

        // Horizontal first, then vertical from wherever that left us
        for delta in [pending.horizontal, pending.vertical] {
            if delta == Vec3::ZERO {
                continue;
            }
            let out = move_and_slide.move_and_slide(
                collider,
                transform.translation,
                transform.rotation,
                delta,
                DISPLACEMENT_STEP,
                &config,
                &filter,
                |_| MoveAndSlideHitResponse::Accept,
            );
            transform.translation = out.position;
        }

        pending.clear();
    }
}
