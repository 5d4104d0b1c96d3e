//! Movement domain: locomotion events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted when a character lands or leaves the ground
#[derive(Debug)]
pub struct GroundedChangedEvent {
    pub entity: Entity,
    pub grounded: bool,
}

impl Message for GroundedChangedEvent {}
