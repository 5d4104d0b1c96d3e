//! Level domain: test room plugin wiring.

mod room;

use room::spawn_test_room;

use bevy::prelude::*;

use crate::movement::spawn_player;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_test_room, spawn_player));
    }
}
