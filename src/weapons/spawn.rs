//! Weapons domain: projectile spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::weapons::{Projectile, Shot, WeaponTuning};

/// Bundle for a bullet or shotgun pellet
#[derive(Bundle)]
pub struct ProjectileBundle {
    pub projectile: Projectile,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
}

impl ProjectileBundle {
    pub const SIZE: Vec2 = Vec2::new(0.3, 0.1);

    /// `rotation` is the fire point's rotation; `velocity` is already scaled.
    pub fn new(position: Vec2, rotation: Quat, velocity: Vec2, lifetime: f32) -> Self {
        Self {
            projectile: Projectile::new(lifetime),
            sprite: Sprite {
                color: Color::srgb(1.0, 0.85, 0.3),
                custom_size: Some(Self::SIZE),
                ..default()
            },
            transform: Transform::from_translation(position.extend(1.0)).with_rotation(rotation),
            rigid_body: RigidBody::Kinematic,
            collider: Collider::rectangle(Self::SIZE.x, Self::SIZE.y),
            collision_layers: CollisionLayers::new(
                GameLayer::Projectile,
                [GameLayer::Ground, GameLayer::Wall],
            ),
            velocity: LinearVelocity(velocity),
        }
    }

    /// Projectile leaving the fire point that sits `muzzle_distance` along
    /// the aim from the weapon `pivot`, pushed out by the shot's offset.
    /// Rotation follows the aim so a mirrored model still fires forward.
    pub fn from_shot(
        pivot: Vec2,
        muzzle_distance: f32,
        shot: &Shot,
        tuning: &WeaponTuning,
    ) -> Self {
        let aim = shot.aim.normalize_or(Vec2::X);
        let position = pivot + aim * (muzzle_distance + shot.offset);
        let velocity = shot.direction.normalize_or_zero() * tuning.bullet_speed;

        Self::new(
            position,
            Quat::from_rotation_z(aim.to_angle()),
            velocity,
            tuning.projectile_lifetime,
        )
    }
}
