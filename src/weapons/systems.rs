//! Weapons domain: input, weapon state and projectile systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::CursorWorldPosition;
use crate::movement::{GroundedChangedEvent, Player};
use crate::weapons::controller::Shot;
use crate::weapons::spawn::ProjectileBundle;
use crate::weapons::view::{ModelQuery, WeaponRig};
use crate::weapons::{
    FirePoint, Projectile, ShotFiredEvent, WeaponInput, WeaponMode, WeaponModel, WeaponRng,
    WeaponState, WeaponTuning,
};

pub(crate) fn read_weapon_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorWorldPosition>,
    mut input: ResMut<WeaponInput>,
) {
    input.selected_mode = if keyboard.just_pressed(KeyCode::Digit1) {
        Some(WeaponMode::Melee)
    } else if keyboard.just_pressed(KeyCode::Digit2) {
        Some(WeaponMode::Rifle)
    } else if keyboard.just_pressed(KeyCode::Digit3) {
        Some(WeaponMode::Shotgun)
    } else {
        None
    };

    input.fire_just_pressed = mouse.just_pressed(MouseButton::Left);
    input.fire_held = mouse.pressed(MouseButton::Left);
    input.reload_just_pressed = keyboard.just_pressed(KeyCode::KeyR);
    input.aim_target = cursor.0;
}

/// Mirrors the movement domain's grounded signal into the weapon state.
pub(crate) fn track_grounded(
    mut events: MessageReader<GroundedChangedEvent>,
    mut query: Query<&mut WeaponState>,
) {
    for event in events.read() {
        if let Ok(mut state) = query.get_mut(event.entity) {
            state.grounded = event.grounded;
        }
    }
}

pub(crate) fn update_weapons(
    time: Res<Time>,
    input: Res<WeaponInput>,
    tuning: Res<WeaponTuning>,
    mut rng: ResMut<WeaponRng>,
    mut players: Query<(Entity, &Children, &mut WeaponState), With<Player>>,
    mut models: ModelQuery,
    mut shot_events: MessageWriter<ShotFiredEvent>,
) {
    let dt = time.delta_secs();
    let mut shots: Vec<Shot> = Vec::new();

    for (shooter, children, mut state) in &mut players {
        let mut rig = WeaponRig {
            children,
            models: &mut models,
        };

        let report = state.tick(&input, &tuning, dt, &mut rng.0, &mut rig, &mut shots);

        if let Some(mode) = report.switched_to {
            debug!("Weapon switched to {}", mode.name());
        }
        if report.reload_started {
            debug!("{} reload started", state.mode.name());
        }
        if report.reload_finished {
            debug!(
                "{} reloaded: ammo={:?}",
                state.mode.name(),
                state.ammo(state.mode)
            );
        }

        for shot in shots.drain(..) {
            shot_events.write(ShotFiredEvent { shooter, shot });
        }
    }
}

/// Fire points are posed from their parent model's pivot and the shot's aim,
/// so spawns match this frame's aim before transforms propagate.
pub(crate) fn spawn_projectiles(
    mut commands: Commands,
    tuning: Res<WeaponTuning>,
    mut events: MessageReader<ShotFiredEvent>,
    fire_points: Query<(&FirePoint, &Transform, &ChildOf)>,
    models: Query<&GlobalTransform, With<WeaponModel>>,
) {
    for event in events.read() {
        let Some((_, local, child_of)) = fire_points
            .iter()
            .find(|(point, ..)| point.owner == event.shooter && point.muzzle == event.shot.muzzle)
        else {
            warn!(
                "No {:?} fire point for shooter {:?}, shot dropped",
                event.shot.muzzle, event.shooter
            );
            continue;
        };
        let Ok(model) = models.get(child_of.parent()) else {
            warn!("{:?} fire point has no weapon model", event.shot.muzzle);
            continue;
        };

        commands.spawn(ProjectileBundle::from_shot(
            model.translation().truncate(),
            local.translation.x,
            &event.shot,
            &tuning,
        ));
    }
}

pub(crate) fn expire_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Projectile)>,
) {
    let dt = time.delta_secs();

    for (entity, mut projectile) in &mut query {
        if projectile.tick(dt) {
            commands.entity(entity).despawn();
        }
    }
}
