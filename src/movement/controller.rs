//! Movement domain: the kinematic state machine behind player locomotion.
//!
//! `tick` runs once per rendered frame (input edges, timers, facing, dash
//! steps). The fixed-step phases run in order every physics step:
//! `update_surroundings`, `apply_inertia`, `apply_gravity`, `resolve_jump`,
//! `trigger_dash`, `apply_motion`.

use bevy::prelude::*;

use crate::movement::query::{CollisionQuery, ground_mask, solid_mask, wall_mask};
use crate::movement::{
    CharacterBody, DashLatch, DashState, Facing, MovementInput, MovementState, MovementTuning,
    SurfaceProbes,
};

/// Horizontal speed below which facing is left unchanged.
const FACING_DEAD_ZONE: f32 = 0.1;
/// Target speed below which the controller decelerates instead of accelerating.
const TARGET_DEAD_ZONE: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Jump from the ground or within coyote time
    Ground,
    /// Additional jump while airborne
    Double,
    /// Jump pushing away from a wall
    Wall,
}

/// Moves `current` toward `target` by at most `max_delta`.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

impl MovementState {
    /// Per-frame phase: input edges, leeway timers and facing.
    pub fn tick(&mut self, input: &MovementInput, tuning: &MovementTuning, dt: f32) {
        if input.jump_just_pressed {
            self.jump_buffer_timer = tuning.jump_buffer_time;
        } else {
            self.jump_buffer_timer = (self.jump_buffer_timer - dt).max(0.0);
        }

        if input.jump_just_released && self.velocity.y > 0.0 {
            self.is_jump_cutting = true;
        }

        if input.sprint_just_pressed {
            self.sprint_triggered = true;
        }

        if self.wall_jump_lock_timer > 0.0 {
            self.wall_jump_lock_timer = (self.wall_jump_lock_timer - dt).max(0.0);
        }

        if !self.is_wall_jump_locked() {
            if self.velocity.x < -FACING_DEAD_ZONE {
                self.facing = Facing::Left;
            } else if self.velocity.x > FACING_DEAD_ZONE {
                self.facing = Facing::Right;
            }
        }
    }

    pub fn is_wall_jump_locked(&self) -> bool {
        self.wall_jump_lock_timer > 0.0
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_active()
    }

    /// Probes ground and wall contact and refreshes coyote time.
    ///
    /// Returns the new grounded value when it changed.
    pub fn update_surroundings(
        &mut self,
        query: &impl CollisionQuery,
        probes: &SurfaceProbes,
        center: Vec2,
        tuning: &MovementTuning,
        dt: f32,
    ) -> Option<bool> {
        let was_on_ground = self.on_ground;

        self.on_ground = query
            .cast_ray(
                probes.ground_point(center),
                Dir2::NEG_Y,
                tuning.ground_check_distance,
                ground_mask(),
            )
            .is_some();

        self.on_wall = query
            .cast_ray(
                probes.wall_point(center, self.facing),
                self.facing.direction(),
                tuning.wall_check_distance,
                wall_mask(),
            )
            .is_some();

        if self.on_ground {
            self.coyote_timer = tuning.coyote_time;
            self.jump_count = 0;
        } else {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }

        (was_on_ground != self.on_ground).then_some(self.on_ground)
    }

    /// Moves horizontal velocity toward the input target speed.
    pub fn apply_inertia(&mut self, input: &MovementInput, tuning: &MovementTuning, dt: f32) {
        if self.is_dashing() {
            return;
        }

        let axis_x = if self.is_wall_jump_locked() {
            0.0
        } else {
            input.axis.x
        };

        let mut target_speed = axis_x * tuning.movement_speed;
        if input.sprint_held {
            target_speed *= tuning.sprint_multiplier;
        }

        let mut rate = if target_speed.abs() > TARGET_DEAD_ZONE {
            tuning.acceleration
        } else {
            tuning.deceleration
        };
        rate /= tuning.mass;
        if !self.on_ground {
            rate *= 0.5;
        }

        self.velocity.x = move_towards(self.velocity.x, target_speed, rate * dt);
    }

    pub fn apply_gravity(&mut self, input: &MovementInput, tuning: &MovementTuning, dt: f32) {
        if self.is_dashing() {
            return;
        }

        if self.on_ground {
            self.is_jump_cutting = false;
            if self.velocity.y < 0.0 {
                self.velocity.y = -tuning.resting_fall_speed;
            }
            return;
        }

        let mut gravity = tuning.gravity * tuning.mass;
        if self.velocity.y > 0.0 && self.is_jump_cutting {
            gravity *= tuning.jump_cut_gravity_scale;
        }
        self.velocity.y -= gravity * dt;

        let pressing_into_wall = input.axis.x * self.facing.sign() > TARGET_DEAD_ZONE;
        if self.on_wall && pressing_into_wall && self.velocity.y < 0.0 {
            self.velocity.y = self.velocity.y.max(-tuning.wall_slide_speed);
        } else {
            self.velocity.y = self.velocity.y.max(-tuning.terminal_fall_speed);
        }
    }

    /// Spends a buffered jump request on the highest-priority jump available.
    pub fn resolve_jump(&mut self, tuning: &MovementTuning) -> Option<JumpKind> {
        if self.jump_buffer_timer <= 0.0 {
            return None;
        }

        let can_coyote_jump = self.coyote_timer > 0.0 && self.jump_count == 0;
        let can_double_jump = self.jump_count > 0 && self.jump_count < tuning.max_jumps;

        if can_coyote_jump || self.on_ground {
            self.execute_jump(tuning);
            Some(JumpKind::Ground)
        } else if can_double_jump {
            self.execute_jump(tuning);
            Some(JumpKind::Double)
        } else if self.on_wall && !self.on_ground {
            self.execute_wall_jump(tuning);
            Some(JumpKind::Wall)
        } else {
            None
        }
    }

    fn execute_jump(&mut self, tuning: &MovementTuning) {
        self.velocity.y = tuning.jump_velocity();
        self.jump_count += 1;
        self.jump_buffer_timer = 0.0;
        self.coyote_timer = 0.0;
        self.is_jump_cutting = false;
    }

    fn execute_wall_jump(&mut self, tuning: &MovementTuning) {
        // The wall probe points along facing, so push the other way
        let push = -self.facing.sign();

        self.velocity.y = tuning.jump_velocity();
        self.velocity.x = tuning.movement_speed * tuning.wall_jump_push_multiplier * push;
        self.wall_jump_lock_timer = tuning.wall_jump_lock_time;
        self.jump_count = 1;
        self.jump_buffer_timer = 0.0;
        self.is_jump_cutting = false;
    }

    /// Consumes the sprint latch, starting a dash when none is running.
    ///
    /// The first dash step runs immediately with the fixed `dt`.
    pub fn trigger_dash(
        &mut self,
        query: &impl CollisionQuery,
        body: &CharacterBody,
        center: &mut Vec2,
        tuning: &MovementTuning,
        dt: f32,
    ) -> bool {
        let started = self.sprint_triggered && !self.is_dashing();
        if started {
            self.dash = DashState::Active {
                elapsed: 0.0,
                facing: self.facing,
            };
            self.advance_dash(query, body, center, tuning, dt);
        }

        match tuning.dash_latch {
            DashLatch::DropWhileDashing => self.sprint_triggered = false,
            DashLatch::QueueWhileDashing => {
                if started {
                    self.sprint_triggered = false;
                }
            }
        }

        started
    }

    /// Advances a running dash by one frame. Returns true when the dash ended.
    pub fn advance_dash(
        &mut self,
        query: &impl CollisionQuery,
        body: &CharacterBody,
        center: &mut Vec2,
        tuning: &MovementTuning,
        dt: f32,
    ) -> bool {
        let DashState::Active { elapsed, facing } = self.dash else {
            return false;
        };

        if elapsed >= tuning.dash_time {
            self.dash = DashState::Idle;
            return true;
        }

        self.dash = DashState::Active {
            elapsed: elapsed + dt,
            facing,
        };
        let step = facing.direction() * (tuning.dash_speed() * dt);
        self.move_along_axis(query, body, center, step, Axis::Horizontal, tuning);
        self.velocity.y = 0.0;
        false
    }

    /// Integrates velocity into position, one axis at a time.
    pub fn apply_motion(
        &mut self,
        query: &impl CollisionQuery,
        body: &CharacterBody,
        center: &mut Vec2,
        tuning: &MovementTuning,
        dt: f32,
    ) {
        if self.is_dashing() {
            return;
        }

        let step = self.velocity * dt;
        self.move_along_axis(
            query,
            body,
            center,
            Vec2::new(step.x, 0.0),
            Axis::Horizontal,
            tuning,
        );
        self.move_along_axis(
            query,
            body,
            center,
            Vec2::new(0.0, step.y),
            Axis::Vertical,
            tuning,
        );
    }

    /// Sweeps the body along `amount`, stopping `skin` short of any hit and
    /// zeroing the velocity on `axis` when blocked.
    pub fn move_along_axis(
        &mut self,
        query: &impl CollisionQuery,
        body: &CharacterBody,
        center: &mut Vec2,
        amount: Vec2,
        axis: Axis,
        tuning: &MovementTuning,
    ) {
        let distance = amount.length();
        if distance <= 0.0 {
            return;
        }
        let Ok(direction) = Dir2::new(amount) else {
            return;
        };

        let hit = query.cast_box(
            *center,
            body.size * tuning.cast_scale,
            direction,
            distance + tuning.skin,
            solid_mask(),
        );

        match hit {
            Some(hit_distance) => {
                *center += direction * (hit_distance - tuning.skin).max(0.0);
                match axis {
                    Axis::Horizontal => self.velocity.x = 0.0,
                    Axis::Vertical => self.velocity.y = 0.0,
                }
            }
            None => *center += amount,
        }
    }
}
