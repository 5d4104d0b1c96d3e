//! Weapons domain: mode switching, firing loop, reloads and aiming.
//!
//! `WeaponState::tick` is called once per frame. It handles, in order, the
//! mode switch, a fire press, a reload press and the aim update, then
//! resumes the timed action left over from earlier frames.

use bevy::prelude::*;
use rand::Rng;

use crate::weapons::view::WeaponView;
use crate::weapons::{
    FireStep, Muzzle, WeaponAction, WeaponInput, WeaponMode, WeaponModel, WeaponState,
    WeaponTuning,
};

/// A projectile request produced by the firing loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub muzzle: Muzzle,
    /// Unit aim before spread; the weapon's right axis ignoring mirroring
    pub aim: Vec2,
    /// Unit travel direction, spread already applied
    pub direction: Vec2,
    /// Spawn distance past the fire point along `aim`
    pub offset: f32,
}

/// What happened during one tick, for logging and messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeaponTickReport {
    pub switched_to: Option<WeaponMode>,
    pub shots_fired: u32,
    pub reload_started: bool,
    pub reload_finished: bool,
}

/// Rotation and facing of a weapon pointed at a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimPose {
    /// Radians, counter-clockwise from +X
    pub rotation: f32,
    /// True when aiming behind (|angle| > 90°)
    pub mirrored: bool,
    pub direction: Vec2,
}

impl AimPose {
    pub fn toward(origin: Vec2, target: Vec2) -> Self {
        let delta = target - origin;
        let rotation = delta.y.atan2(delta.x);
        Self {
            rotation,
            mirrored: rotation.to_degrees().abs() > 90.0,
            direction: Vec2::from_angle(rotation),
        }
    }
}

/// Rotates `aim` by a uniform random angle in [-spread, +spread] degrees.
pub fn spread_direction<R: Rng + ?Sized>(aim: Vec2, spread_degrees: f32, rng: &mut R) -> Vec2 {
    let offset = if spread_degrees > 0.0 {
        rng.random_range(-spread_degrees..=spread_degrees)
    } else {
        0.0
    };
    Vec2::from_angle(offset.to_radians()).rotate(aim)
}

impl WeaponState {
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        input: &WeaponInput,
        tuning: &WeaponTuning,
        dt: f32,
        rng: &mut R,
        view: &mut impl WeaponView,
        shots: &mut Vec<Shot>,
    ) -> WeaponTickReport {
        let mut report = WeaponTickReport::default();
        // Actions started this tick already ran their first step
        let mut started = false;

        if let Some(mode) = input.selected_mode {
            if self.switch_mode(mode, view) {
                report.switched_to = Some(mode);
            }
        }

        if input.fire_just_pressed && self.mode.is_ranged() && self.action.is_idle() {
            self.run_fire_loop(input.fire_held, tuning, rng, shots, &mut report);
            started = true;
        }

        if input.reload_just_pressed {
            started = self.start_reload(tuning, &mut report);
        }

        if let Some(target) = input.aim_target {
            self.update_aim(target, view);
        }

        if !started {
            self.advance_action(input, tuning, dt, rng, shots, &mut report);
        }

        report
    }

    /// Selects `mode`, cancelling any running action. Returns false if the
    /// mode was already selected.
    pub fn switch_mode(&mut self, mode: WeaponMode, view: &mut impl WeaponView) -> bool {
        if mode == self.mode {
            return false;
        }

        self.cancel_action();
        self.mode = mode;
        for model in WeaponModel::ALL {
            view.set_active(model, model == mode.model());
        }
        true
    }

    /// Drops the running action. Ammo already spent or zeroed stays as is.
    pub fn cancel_action(&mut self) {
        self.action = WeaponAction::Idle;
    }

    /// Adopts new tuning mid-run: drops the running action and clamps each
    /// magazine to its new capacity.
    pub fn apply_tuning(&mut self, tuning: &WeaponTuning) {
        self.cancel_action();
        for mode in [WeaponMode::Rifle, WeaponMode::Shotgun] {
            if let (Some(ammo), Some(magazine)) = (self.ammo(mode), tuning.magazine(mode)) {
                self.set_ammo(mode, ammo.min(magazine.max_ammo));
            }
        }
    }

    /// Cancels the running action and starts a reload if the magazine isn't
    /// full. Returns true when a reload started.
    pub fn start_reload(&mut self, tuning: &WeaponTuning, report: &mut WeaponTickReport) -> bool {
        self.cancel_action();

        let Some(magazine) = tuning.magazine(self.mode) else {
            return false;
        };
        let Some(ammo) = self.ammo(self.mode) else {
            return false;
        };
        if ammo >= magazine.max_ammo {
            return false;
        }

        self.set_ammo(self.mode, 0);
        self.action = WeaponAction::Reloading {
            remaining: magazine.reload_time,
        };
        report.reload_started = true;
        true
    }

    pub fn update_aim(&mut self, target: Vec2, view: &mut impl WeaponView) {
        let Some(model) = self.mode.aim_model() else {
            return;
        };
        let Some(origin) = view.weapon_origin(model) else {
            return;
        };

        let pose = AimPose::toward(origin, target);
        view.set_pose(model, pose.rotation, pose.mirrored);
        self.aim_direction = pose.direction;
    }

    /// One iteration of the firing loop: shoot and wait, or reload an empty
    /// magazine. Ends the loop when the trigger is no longer held.
    fn run_fire_loop<R: Rng + ?Sized>(
        &mut self,
        fire_held: bool,
        tuning: &WeaponTuning,
        rng: &mut R,
        shots: &mut Vec<Shot>,
        report: &mut WeaponTickReport,
    ) {
        let Some(magazine) = tuning.magazine(self.mode) else {
            self.action = WeaponAction::Idle;
            return;
        };
        if !fire_held {
            self.action = WeaponAction::Idle;
            return;
        }

        let ammo = self.ammo(self.mode).unwrap_or(0);
        if ammo > 0 {
            self.fire(tuning, rng, shots);
            self.set_ammo(self.mode, ammo - 1);
            report.shots_fired += 1;
            self.action = WeaponAction::Firing(FireStep::Cooldown {
                remaining: magazine.fire_interval,
            });
        } else {
            self.set_ammo(self.mode, 0);
            self.action = WeaponAction::Firing(FireStep::Reload {
                remaining: magazine.reload_time,
            });
            report.reload_started = true;
        }
    }

    fn advance_action<R: Rng + ?Sized>(
        &mut self,
        input: &WeaponInput,
        tuning: &WeaponTuning,
        dt: f32,
        rng: &mut R,
        shots: &mut Vec<Shot>,
        report: &mut WeaponTickReport,
    ) {
        match self.action {
            WeaponAction::Idle => {}
            WeaponAction::Firing(FireStep::Cooldown { remaining }) => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.action = WeaponAction::Firing(FireStep::Cooldown { remaining });
                } else {
                    self.run_fire_loop(input.fire_held, tuning, rng, shots, report);
                }
            }
            WeaponAction::Firing(FireStep::Reload { remaining }) => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.action = WeaponAction::Firing(FireStep::Reload { remaining });
                } else {
                    self.refill(tuning);
                    report.reload_finished = true;
                    if tuning.resume_fire_after_reload {
                        self.run_fire_loop(input.fire_held, tuning, rng, shots, report);
                    } else {
                        self.action = WeaponAction::Idle;
                    }
                }
            }
            WeaponAction::Reloading { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.action = WeaponAction::Reloading { remaining };
                } else {
                    self.refill(tuning);
                    report.reload_finished = true;
                    self.action = WeaponAction::Idle;
                }
            }
        }
    }

    fn refill(&mut self, tuning: &WeaponTuning) {
        if let Some(magazine) = tuning.magazine(self.mode) {
            self.set_ammo(self.mode, magazine.max_ammo);
        }
    }

    fn fire<R: Rng + ?Sized>(&self, tuning: &WeaponTuning, rng: &mut R, shots: &mut Vec<Shot>) {
        match self.mode {
            WeaponMode::Melee => {}
            WeaponMode::Rifle => {
                let mut spread = tuning.rifle.base_spread_degrees;
                if !self.grounded {
                    spread *= tuning.rifle.airborne_spread_multiplier;
                }
                shots.push(Shot {
                    muzzle: Muzzle::Rifle,
                    aim: self.aim_direction,
                    direction: spread_direction(self.aim_direction, spread, rng),
                    offset: tuning.rifle.muzzle_offset,
                });
            }
            WeaponMode::Shotgun => {
                for _ in 0..tuning.shotgun.pellet_count {
                    shots.push(Shot {
                        muzzle: Muzzle::Shotgun,
                        aim: self.aim_direction,
                        direction: spread_direction(
                            self.aim_direction,
                            tuning.shotgun.max_spread_degrees,
                            rng,
                        ),
                        offset: tuning.shotgun.muzzle_offset,
                    });
                }
            }
        }
    }
}
