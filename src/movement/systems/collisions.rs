//! Movement domain: ground and wall detection systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    GroundedChangedEvent, MovementState, MovementTuning, Player, SurfaceProbes,
};

pub(crate) fn detect_surroundings(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &Transform, &SurfaceProbes, &mut MovementState), With<Player>>,
    mut grounded_events: MessageWriter<GroundedChangedEvent>,
) {
    let dt = time.delta_secs();

    for (entity, transform, probes, mut state) in &mut query {
        let center = transform.translation.truncate();

        let Some(grounded) = state.update_surroundings(&spatial_query, probes, center, &tuning, dt)
        else {
            continue;
        };

        if grounded {
            debug!(
                "Landed: on_wall={}, velocity={:?}",
                state.on_wall, state.velocity
            );
        } else {
            debug!(
                "Left ground: jump_count={}, coyote_timer={:.3}",
                state.jump_count, state.coyote_timer
            );
        }

        grounded_events.write(GroundedChangedEvent { entity, grounded });
    }
}
