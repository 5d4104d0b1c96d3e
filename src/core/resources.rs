//! Core domain: shared resources for run configuration and pointer state.

use bevy::prelude::*;
use rand::Rng;

#[derive(Resource, Debug)]
pub struct RunConfig {
    /// Seeds every gameplay RNG so a run can be replayed
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Pointer position projected into world space, `None` while the cursor is
/// outside the window.
#[derive(Resource, Debug, Default)]
pub struct CursorWorldPosition(pub Option<Vec2>);

/// Marker for the gameplay camera
#[derive(Component, Debug)]
pub struct MainCamera;
