//! Movement domain: player bootstrap with weapon models.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CharacterBody, GameLayer, MovementState, Player, SurfaceProbes};
use crate::weapons::{FirePoint, Muzzle, WeaponModel, WeaponState, WeaponTuning};

/// Collision box of the player, in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.6);

const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 0.0, 0.0);
/// Shoulder height the weapon models pivot around
const WEAPON_PIVOT: Vec3 = Vec3::new(0.0, 0.2, 0.5);

pub fn spawn_player(mut commands: Commands, tuning: Res<WeaponTuning>) {
    let weapon_state = WeaponState::new(&tuning);
    let mode = weapon_state.mode;
    let active_model = mode.model();

    let player = commands
        .spawn((
            // Identity & Movement
            (
                Player,
                MovementState::default(),
                CharacterBody { size: PLAYER_SIZE },
                SurfaceProbes::for_body(PLAYER_SIZE),
                weapon_state,
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(SPAWN_POSITION),
            // Physics; the controller moves the body itself
            (
                RigidBody::Kinematic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
            ),
        ))
        .id();

    commands.entity(player).with_children(|parent| {
        for model in WeaponModel::ALL {
            let visibility = if model == active_model {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
            let (size, color, muzzle) = model_look(model);

            let mut model_entity = parent.spawn((
                model,
                Sprite {
                    color,
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_translation(WEAPON_PIVOT),
                visibility,
            ));

            if let Some(muzzle) = muzzle {
                model_entity.with_children(|weapon| {
                    weapon.spawn((
                        FirePoint {
                            owner: player,
                            muzzle,
                        },
                        Transform::from_xyz(size.x * 0.5, 0.0, 0.0),
                    ));
                });
            }
        }
    });

    info!(
        "Spawned player at {:?} with {}",
        SPAWN_POSITION.truncate(),
        mode.name()
    );
}

fn model_look(model: WeaponModel) -> (Vec2, Color, Option<Muzzle>) {
    match model {
        WeaponModel::Arms => (Vec2::new(0.5, 0.15), Color::srgb(0.85, 0.7, 0.6), None),
        WeaponModel::Rifle => (
            Vec2::new(1.0, 0.15),
            Color::srgb(0.3, 0.3, 0.35),
            Some(Muzzle::Rifle),
        ),
        WeaponModel::Shotgun => (
            Vec2::new(0.8, 0.22),
            Color::srgb(0.45, 0.3, 0.2),
            Some(Muzzle::Shotgun),
        ),
    }
}
