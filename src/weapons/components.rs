//! Weapons domain: weapon state, models, fire points and projectiles.

use bevy::prelude::*;

use crate::weapons::WeaponTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeaponMode {
    Melee,
    #[default]
    Rifle,
    Shotgun,
}

impl WeaponMode {
    pub fn name(&self) -> &'static str {
        match self {
            WeaponMode::Melee => "MELEE",
            WeaponMode::Rifle => "RIFLE",
            WeaponMode::Shotgun => "SHOTGUN",
        }
    }

    pub fn is_ranged(self) -> bool {
        !matches!(self, WeaponMode::Melee)
    }

    /// Model shown while this mode is selected.
    pub fn model(self) -> WeaponModel {
        match self {
            WeaponMode::Melee => WeaponModel::Arms,
            WeaponMode::Rifle => WeaponModel::Rifle,
            WeaponMode::Shotgun => WeaponModel::Shotgun,
        }
    }

    /// Model that tracks the aim point. Bare arms don't aim.
    pub fn aim_model(self) -> Option<WeaponModel> {
        match self {
            WeaponMode::Melee => None,
            WeaponMode::Rifle => Some(WeaponModel::Rifle),
            WeaponMode::Shotgun => Some(WeaponModel::Shotgun),
        }
    }
}

/// Visual sub-object of the player, one per weapon mode.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponModel {
    Arms,
    Rifle,
    Shotgun,
}

impl WeaponModel {
    pub const ALL: [WeaponModel; 3] = [WeaponModel::Arms, WeaponModel::Rifle, WeaponModel::Shotgun];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Muzzle {
    Rifle,
    Shotgun,
}

/// Spawn point for projectiles, attached to a weapon model.
#[derive(Component, Debug)]
pub struct FirePoint {
    pub owner: Entity,
    pub muzzle: Muzzle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ammo {
    pub rifle: u32,
    pub shotgun: u32,
}

/// The single timed action a weapon may be running.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WeaponAction {
    #[default]
    Idle,
    Firing(FireStep),
    Reloading {
        remaining: f32,
    },
}

impl WeaponAction {
    pub fn is_idle(&self) -> bool {
        matches!(self, WeaponAction::Idle)
    }
}

/// Where a firing loop is suspended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireStep {
    /// Waiting out the fire interval after a shot
    Cooldown { remaining: f32 },
    /// Reloading an empty magazine before the loop ends
    Reload { remaining: f32 },
}

#[derive(Component, Debug, Clone)]
pub struct WeaponState {
    pub mode: WeaponMode,
    pub ammo: Ammo,
    pub action: WeaponAction,
    /// Unit vector along the active weapon's right axis
    pub aim_direction: Vec2,
    /// Last grounded state reported by the movement domain
    pub grounded: bool,
}

impl WeaponState {
    /// Rifle selected with full magazines.
    pub fn new(tuning: &WeaponTuning) -> Self {
        Self {
            mode: WeaponMode::Rifle,
            ammo: Ammo {
                rifle: tuning.rifle.max_ammo,
                shotgun: tuning.shotgun.max_ammo,
            },
            action: WeaponAction::Idle,
            aim_direction: Vec2::X,
            grounded: true,
        }
    }

    pub fn ammo(&self, mode: WeaponMode) -> Option<u32> {
        match mode {
            WeaponMode::Melee => None,
            WeaponMode::Rifle => Some(self.ammo.rifle),
            WeaponMode::Shotgun => Some(self.ammo.shotgun),
        }
    }

    pub(crate) fn set_ammo(&mut self, mode: WeaponMode, value: u32) {
        match mode {
            WeaponMode::Melee => {}
            WeaponMode::Rifle => self.ammo.rifle = value,
            WeaponMode::Shotgun => self.ammo.shotgun = value,
        }
    }
}

#[derive(Component, Debug)]
pub struct Projectile {
    /// Seconds until the projectile is removed
    pub remaining: f32,
}

impl Projectile {
    pub fn new(lifetime: f32) -> Self {
        Self {
            remaining: lifetime,
        }
    }

    /// Counts down the lifetime. Returns true once it has expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}
