//! Debug domain: toggles for developer overlays.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Draw the ground and wall probes and the collision box
    pub show_probes: bool,
    /// Draw the aim direction of the active weapon
    pub show_aim: bool,
}
