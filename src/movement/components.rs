//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Bullets and pellets
    Projectile,
}

#[derive(Component, Debug)]
pub struct Player;

/// Kinematic locomotion state, advanced by `tick` every frame and by the
/// fixed-step phases every physics step.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub velocity: Vec2,
    pub jump_count: u32,
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
    pub wall_jump_lock_timer: f32,
    pub facing: Facing,
    pub on_ground: bool,
    pub on_wall: bool,
    pub is_jump_cutting: bool,
    /// One-shot sprint press, consumed by the next fixed step.
    pub sprint_triggered: bool,
    pub dash: DashState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn direction(self) -> Dir2 {
        match self {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        }
    }
}

/// Resumable dash sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashState {
    #[default]
    Idle,
    Active {
        /// Time spent dashing so far
        elapsed: f32,
        /// Direction captured when the dash started
        facing: Facing,
    },
}

impl DashState {
    pub fn is_active(&self) -> bool {
        matches!(self, DashState::Active { .. })
    }
}

/// Collision box used for swept movement casts.
#[derive(Component, Debug, Clone, Copy)]
pub struct CharacterBody {
    pub size: Vec2,
}

/// Check points for ground and wall detection, relative to the body centre.
///
/// The wall check x offset is authored for a right-facing character and is
/// mirrored when facing left.
#[derive(Component, Debug, Clone, Copy)]
pub struct SurfaceProbes {
    pub ground_offset: Vec2,
    pub wall_offset: Vec2,
}

impl SurfaceProbes {
    /// Probes placed at the feet and at the leading side of a body.
    pub fn for_body(size: Vec2) -> Self {
        Self {
            ground_offset: Vec2::new(0.0, -size.y * 0.5),
            wall_offset: Vec2::new(size.x * 0.5, 0.0),
        }
    }

    pub fn ground_point(&self, center: Vec2) -> Vec2 {
        center + self.ground_offset
    }

    pub fn wall_point(&self, center: Vec2, facing: Facing) -> Vec2 {
        center + Vec2::new(self.wall_offset.x * facing.sign(), self.wall_offset.y)
    }
}
