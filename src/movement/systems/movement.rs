//! Movement domain: locomotion systems for timers and physics.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::JumpKind;
use crate::movement::{CharacterBody, MovementInput, MovementState, MovementTuning, Player};

pub(crate) fn update_timers(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        state.tick(&input, &tuning, dt);
    }
}

/// Steps running dashes once per rendered frame.
pub(crate) fn advance_dashes(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&CharacterBody, &mut Transform, &mut MovementState), With<Player>>,
) {
    let dt = time.delta_secs();

    for (body, mut transform, mut state) in &mut query {
        if !state.is_dashing() {
            continue;
        }

        let mut center = transform.translation.truncate();
        if state.advance_dash(&spatial_query, body, &mut center, &tuning, dt) {
            debug!("Dash finished at {:?}", center);
        }
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}

pub(crate) fn integrate_velocity(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        state.apply_inertia(&input, &tuning, dt);
        state.apply_gravity(&input, &tuning, dt);
    }
}

pub(crate) fn resolve_jumps(
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    for mut state in &mut query {
        match state.resolve_jump(&tuning) {
            Some(JumpKind::Wall) => debug!(
                "Wall jump: facing={:?}, velocity={:?}",
                state.facing, state.velocity
            ),
            Some(kind) => debug!("{:?} jump: jump_count={}", kind, state.jump_count),
            None => {}
        }
    }
}

pub(crate) fn trigger_dashes(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&CharacterBody, &mut Transform, &mut MovementState), With<Player>>,
) {
    let dt = time.delta_secs();

    for (body, mut transform, mut state) in &mut query {
        let mut center = transform.translation.truncate();
        if state.trigger_dash(&spatial_query, body, &mut center, &tuning, dt) {
            debug!("Dash started: facing={:?}", state.facing);
            transform.translation.x = center.x;
            transform.translation.y = center.y;
        }
    }
}

pub(crate) fn apply_motion(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&CharacterBody, &mut Transform, &mut MovementState), With<Player>>,
) {
    let dt = time.delta_secs();

    for (body, mut transform, mut state) in &mut query {
        let mut center = transform.translation.truncate();
        state.apply_motion(&spatial_query, body, &mut center, &tuning, dt);
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}
