//! Developer overlays for tuning movement and weapons.
//!
//! Hotkeys:
//! - F1: ground/wall probe and collision box gizmos
//! - F2: aim direction gizmo
//! - F3: log player movement and weapon state
//! - F5: reload `assets/data/tuning.ron`

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{draw_aim_gizmos, draw_probe_gizmos, handle_debug_hotkeys};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, handle_debug_hotkeys)
            .add_systems(
                Update,
                (
                    draw_probe_gizmos.run_if(|state: Res<DebugState>| state.show_probes),
                    draw_aim_gizmos.run_if(|state: Res<DebugState>| state.show_aim),
                )
                    .after(handle_debug_hotkeys),
            );
    }
}
