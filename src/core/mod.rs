//! Core domain: camera, run seed and pointer projection plugin wiring.

mod resources;
mod systems;

pub use resources::{CursorWorldPosition, MainCamera, RunConfig};
pub use systems::update_cursor_world_position;

use bevy::prelude::*;

use crate::core::systems::{log_run_seed, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunConfig>()
            .init_resource::<CursorWorldPosition>()
            .add_systems(Startup, (setup_camera, log_run_seed))
            .add_systems(Update, update_cursor_world_position);
    }
}
