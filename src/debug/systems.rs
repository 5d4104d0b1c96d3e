//! Debug domain: overlay gizmos and hotkeys.

use bevy::prelude::*;
use std::path::Path;

use crate::content::{DEFAULT_TUNING_PATH, load_tuning_or_default};
use crate::debug::state::DebugState;
use crate::movement::{CharacterBody, MovementState, MovementTuning, Player, SurfaceProbes};
use crate::weapons::{WeaponState, WeaponTuning};

/// F1 probes, F2 aim line, F3 state dump, F5 reload tuning from disk
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut movement_tuning: ResMut<MovementTuning>,
    mut weapon_tuning: ResMut<WeaponTuning>,
    mut players: Query<(&Transform, &MovementState, &mut WeaponState), With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_probes = !debug_state.show_probes;
        info!("[DEBUG] Probe gizmos: {}", debug_state.show_probes);
    }

    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_aim = !debug_state.show_aim;
        info!("[DEBUG] Aim gizmos: {}", debug_state.show_aim);
    }

    if keyboard.just_pressed(KeyCode::F3) {
        for (transform, movement, weapon) in &players {
            info!(
                "[DEBUG] pos={:?} vel={:?} ground={} wall={} jumps={} facing={:?} dash={:?}",
                transform.translation.truncate(),
                movement.velocity,
                movement.on_ground,
                movement.on_wall,
                movement.jump_count,
                movement.facing,
                movement.dash
            );
            info!(
                "[DEBUG] weapon={} ammo={:?} action={:?}",
                weapon.mode.name(),
                weapon.ammo(weapon.mode),
                weapon.action
            );
        }
    }

    if keyboard.just_pressed(KeyCode::F5) {
        let tuning = load_tuning_or_default(Path::new(DEFAULT_TUNING_PATH));
        *movement_tuning = tuning.movement;
        *weapon_tuning = tuning.weapons;
        for (_, _, mut weapon) in &mut players {
            weapon.apply_tuning(&weapon_tuning);
        }
        info!("[DEBUG] Tuning reloaded");
    }
}

pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<MovementTuning>,
    players: Query<(&Transform, &CharacterBody, &SurfaceProbes, &MovementState), With<Player>>,
) {
    for (transform, body, probes, state) in &players {
        let center = transform.translation.truncate();

        let ground_start = probes.ground_point(center);
        let ground_color = if state.on_ground {
            Color::srgb(0.2, 1.0, 0.2)
        } else {
            Color::srgb(1.0, 0.2, 0.2)
        };
        gizmos.line_2d(
            ground_start,
            ground_start - Vec2::Y * tuning.ground_check_distance,
            ground_color,
        );

        let wall_start = probes.wall_point(center, state.facing);
        let wall_color = if state.on_wall {
            Color::srgb(0.2, 0.6, 1.0)
        } else {
            Color::srgb(1.0, 0.6, 0.2)
        };
        gizmos.line_2d(
            wall_start,
            wall_start + state.facing.direction() * tuning.wall_check_distance,
            wall_color,
        );

        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            body.size * tuning.cast_scale,
            Color::srgba(1.0, 1.0, 1.0, 0.4),
        );
    }
}

pub(crate) fn draw_aim_gizmos(
    mut gizmos: Gizmos,
    players: Query<(&Transform, &WeaponState), With<Player>>,
) {
    for (transform, weapon) in &players {
        if !weapon.mode.is_ranged() {
            continue;
        }
        let origin = transform.translation.truncate();
        gizmos.line_2d(
            origin,
            origin + weapon.aim_direction * 3.0,
            Color::srgb(1.0, 1.0, 0.3),
        );
    }
}
