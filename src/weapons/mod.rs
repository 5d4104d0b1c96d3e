//! Weapons domain: weapon switching, firing loop and projectile plugin wiring.

mod components;
mod controller;
mod events;
mod resources;
mod spawn;
mod systems;
mod view;

#[cfg(test)]
mod tests;

pub use components::{
    Ammo, FirePoint, FireStep, Muzzle, Projectile, WeaponAction, WeaponMode, WeaponModel,
    WeaponState,
};
pub use controller::{AimPose, Shot, WeaponTickReport, spread_direction};
pub use events::ShotFiredEvent;
pub use resources::{Magazine, RifleTuning, ShotgunTuning, WeaponInput, WeaponRng, WeaponTuning};
pub use spawn::ProjectileBundle;
pub use view::WeaponView;

use bevy::prelude::*;

use crate::core::update_cursor_world_position;
use crate::weapons::systems::{
    expire_projectiles, read_weapon_input, spawn_projectiles, track_grounded, update_weapons,
};

pub struct WeaponsPlugin;

impl Plugin for WeaponsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WeaponTuning>()
            .init_resource::<WeaponInput>()
            .init_resource::<WeaponRng>()
            .add_message::<ShotFiredEvent>()
            .add_systems(
                Update,
                (
                    read_weapon_input,
                    track_grounded,
                    update_weapons,
                    spawn_projectiles,
                )
                    .chain()
                    .after(update_cursor_world_position),
            )
            .add_systems(Update, expire_projectiles);
    }
}
