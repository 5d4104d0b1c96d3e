//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_surroundings;
pub(crate) use input::read_input;
pub(crate) use movement::{
    advance_dashes, apply_motion, integrate_velocity, resolve_jumps, trigger_dashes, update_timers,
};
