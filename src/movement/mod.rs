//! Movement domain: locomotion plugin wiring and public exports.

mod bootstrap;
mod components;
mod controller;
mod events;
mod query;
mod resources;
mod systems;


pub use bootstrap::{PLAYER_SIZE, spawn_player};
pub use components::{
    CharacterBody, DashState, Facing, GameLayer, MovementState, Player, SurfaceProbes,
};
pub use controller::{Axis, JumpKind, move_towards};
pub use events::GroundedChangedEvent;
pub use query::{CollisionQuery, ground_mask, solid_mask, wall_mask};
pub use resources::{DashLatch, MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::systems::{
    advance_dashes, apply_motion, detect_surroundings, integrate_velocity, read_input,
    resolve_jumps, trigger_dashes, update_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<GroundedChangedEvent>()
            .add_systems(Update, (read_input, update_timers, advance_dashes).chain())
            .add_systems(
                FixedUpdate,
                (
                    detect_surroundings,
                    integrate_velocity,
                    resolve_jumps,
                    trigger_dashes,
                    apply_motion,
                )
                    .chain(),
            );
    }
}
