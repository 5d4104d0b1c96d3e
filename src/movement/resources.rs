//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// What happens to a sprint press made while a dash is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum DashLatch {
    /// The press is discarded at the end of the physics step.
    #[default]
    DropWhileDashing,
    /// The press is kept and starts a new dash once the current one ends.
    QueueWhileDashing,
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub movement_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Scales gravity up and acceleration/jump velocity down (0.1 to 10)
    pub mass: f32,
    /// Total jumps per airtime, ground jump included
    pub max_jumps: u32,
    pub gravity: f32,
    pub jump_force: f32,
    /// Gravity multiplier while ascending after an early jump release
    pub jump_cut_gravity_scale: f32,
    pub wall_slide_speed: f32,
    pub terminal_fall_speed: f32,
    /// Downward speed held while grounded so the ground probe stays in contact
    pub resting_fall_speed: f32,
    pub sprint_multiplier: f32,
    pub wall_jump_push_multiplier: f32,
    pub ground_check_distance: f32,
    pub wall_check_distance: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub wall_jump_lock_time: f32,
    pub dash_distance: f32,
    pub dash_time: f32,
    pub dash_latch: DashLatch,
    /// Gap kept between the body and whatever it collides with
    pub skin: f32,
    /// Body size multiplier for the swept movement cast
    pub cast_scale: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            movement_speed: 10.0,
            acceleration: 50.0,
            deceleration: 40.0,
            mass: 1.0,
            max_jumps: 2,
            gravity: 30.0,
            jump_force: 15.0,
            jump_cut_gravity_scale: 2.0,
            wall_slide_speed: 2.0,
            terminal_fall_speed: 25.0,
            resting_fall_speed: 1.0,
            sprint_multiplier: 1.5,
            wall_jump_push_multiplier: 1.5,
            ground_check_distance: 0.2,
            wall_check_distance: 0.4,
            coyote_time: 0.15,
            jump_buffer_time: 0.15,
            wall_jump_lock_time: 0.15,
            dash_distance: 5.0,
            dash_time: 0.2,
            dash_latch: DashLatch::DropWhileDashing,
            skin: 0.02,
            cast_scale: 0.95,
        }
    }
}

impl MovementTuning {
    /// Vertical velocity given by any jump.
    pub fn jump_velocity(&self) -> f32 {
        self.jump_force / self.mass
    }

    pub fn dash_speed(&self) -> f32 {
        self.dash_distance / self.dash_time
    }

    /// Apex height of a single jump under normal gravity: h = v² / 2g
    pub fn single_jump_height(&self) -> f32 {
        let v = self.jump_velocity();
        v * v / (2.0 * self.gravity * self.mass)
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub sprint_just_pressed: bool,
    pub sprint_held: bool,
}
