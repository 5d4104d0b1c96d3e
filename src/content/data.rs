//! Content domain: on-disk shape of the tuning file.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;
use crate::weapons::WeaponTuning;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Every tunable of the game. Missing fields fall back to their defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningFile {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub weapons: WeaponTuning,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            movement: MovementTuning::default(),
            weapons: WeaponTuning::default(),
        }
    }
}
