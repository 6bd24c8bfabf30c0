//! Movement domain: ground detection.

use avian3d::prelude::*;
use bevy::log::error_once;
use bevy::prelude::*;

use crate::movement::{GroundCheck, GroundCheckAnchor, MovementState, MovementTuning, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    anchors: Query<&GlobalTransform, With<GroundCheckAnchor>>,
    mut probe: Local<Option<Collider>>,
    mut query: Query<(Entity, &GroundCheck, &mut MovementState), With<Player>>,
) {
    // Rebuild the probe shape only when the radius may have changed
    if tuning.is_changed() || probe.is_none() {
        *probe = Some(Collider::sphere(tuning.ground_distance));
    }
    let Some(probe) = probe.as_ref() else {
        return;
    };

    // Filter to only hit ground layers (not walls, other characters, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(tuning.ground_mask());

    for (entity, ground_check, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        let Ok(anchor) = anchors.get(ground_check.anchor) else {
            error_once!(
                "Player {:?} has no ground check anchor at {:?}; treating as airborne",
                entity, ground_check.anchor
            );
            state.on_ground = false;
            continue;
        };

        let hits = spatial_query.shape_intersections(
            probe,
            anchor.translation(),
            Quat::IDENTITY,
            &ground_filter,
        );

        state.on_ground = !hits.is_empty();

        if state.on_ground && !was_on_ground {
            debug!(
                "Landed: velocity_y={:.3}, contacts={}",
                state.velocity.y,
                hits.len()
            );
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground: velocity_y={:.3}", state.velocity.y);
        }
    }
}
