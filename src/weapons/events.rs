//! Weapons domain: shot events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::weapons::controller::Shot;

/// Emitted once per bullet or pellet; turned into a projectile entity
#[derive(Debug)]
pub struct ShotFiredEvent {
    pub shooter: Entity,
    pub shot: Shot,
}

impl Message for ShotFiredEvent {}
