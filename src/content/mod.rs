//! Content domain: tuning file loading, validation and plugin wiring.

mod data;
mod loader;
mod validation;


pub use data::{CURRENT_SCHEMA_VERSION, TuningFile};
pub use loader::{ContentLoadError, load_tuning_file, parse_tuning_json, parse_tuning_ron};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

pub const DEFAULT_TUNING_PATH: &str = "assets/data/tuning.ron";

/// Loads the tuning file before any gameplay plugin initializes its
/// resources. Add it ahead of `MovementPlugin` and `WeaponsPlugin`.
pub struct ContentPlugin {
    pub tuning_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            tuning_path: PathBuf::from(DEFAULT_TUNING_PATH),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = load_tuning_or_default(&self.tuning_path);
        app.insert_resource(tuning.movement)
            .insert_resource(tuning.weapons);
    }
}

/// Loads and validates a tuning file. Any failure is logged and the built-in
/// defaults are returned instead, so the game always starts.
pub fn load_tuning_or_default(path: &Path) -> TuningFile {
    let tuning = match load_tuning_file(path) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return TuningFile::default();
        }
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for e in &errors {
            error!("Tuning validation: {}", e);
        }
        warn!(
            "{} has {} invalid value(s); using default tuning",
            path.display(),
            errors.len()
        );
        return TuningFile::default();
    }

    info!(
        "Loaded tuning from {} (single jump height {:.2})",
        path.display(),
        tuning.movement.single_jump_height()
    );
    tuning
}
