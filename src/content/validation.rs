//! Validation for value ranges in the tuning file.

use super::data::{CURRENT_SCHEMA_VERSION, TuningFile};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{} {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a value satisfies a condition
macro_rules! check {
    ($errors:expr, $section:expr, $field:ident, $value:expr, $ok:expr, $expected:expr) => {
        if !$ok {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                message: format!("must be {}, got {}", $expected, $value),
            });
        }
    };
}

macro_rules! check_positive {
    ($errors:expr, $section:expr, $parent:expr, $field:ident) => {
        check!(
            $errors,
            $section,
            $field,
            $parent.$field,
            $parent.$field > 0.0,
            "positive"
        )
    };
}

macro_rules! check_non_negative {
    ($errors:expr, $section:expr, $parent:expr, $field:ident) => {
        check!(
            $errors,
            $section,
            $field,
            $parent.$field,
            $parent.$field >= 0.0,
            "zero or more"
        )
    };
}

/// Validate all value ranges in the tuning file.
/// Returns a list of validation errors, empty if every value is usable.
pub fn validate_tuning(tuning: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if tuning.schema_version != CURRENT_SCHEMA_VERSION {
        errors.push(ValidationError {
            section: "tuning",
            field: "schema_version",
            message: format!(
                "must be {}, got {}",
                CURRENT_SCHEMA_VERSION, tuning.schema_version
            ),
        });
    }

    // Validate movement
    let movement = &tuning.movement;
    check_non_negative!(errors, "movement", movement, movement_speed);
    check_positive!(errors, "movement", movement, acceleration);
    check_positive!(errors, "movement", movement, deceleration);
    check!(
        errors,
        "movement",
        mass,
        movement.mass,
        (0.1..=10.0).contains(&movement.mass),
        "between 0.1 and 10"
    );
    check!(
        errors,
        "movement",
        max_jumps,
        movement.max_jumps,
        movement.max_jumps >= 1,
        "at least 1"
    );
    check_positive!(errors, "movement", movement, gravity);
    check_positive!(errors, "movement", movement, jump_force);
    check!(
        errors,
        "movement",
        jump_cut_gravity_scale,
        movement.jump_cut_gravity_scale,
        movement.jump_cut_gravity_scale >= 1.0,
        "at least 1"
    );
    check_non_negative!(errors, "movement", movement, wall_slide_speed);
    check_positive!(errors, "movement", movement, terminal_fall_speed);
    check_non_negative!(errors, "movement", movement, resting_fall_speed);
    check_positive!(errors, "movement", movement, sprint_multiplier);
    check_non_negative!(errors, "movement", movement, wall_jump_push_multiplier);
    check_positive!(errors, "movement", movement, ground_check_distance);
    check_positive!(errors, "movement", movement, wall_check_distance);
    check_non_negative!(errors, "movement", movement, coyote_time);
    check_non_negative!(errors, "movement", movement, jump_buffer_time);
    check_non_negative!(errors, "movement", movement, wall_jump_lock_time);
    check_non_negative!(errors, "movement", movement, dash_distance);
    check_positive!(errors, "movement", movement, dash_time);
    check_non_negative!(errors, "movement", movement, skin);
    check!(
        errors,
        "movement",
        cast_scale,
        movement.cast_scale,
        movement.cast_scale > 0.0 && movement.cast_scale <= 1.0,
        "in (0, 1]"
    );

    // Validate rifle
    let rifle = &tuning.weapons.rifle;
    check_positive!(errors, "weapons.rifle", rifle, fire_interval);
    check_positive!(errors, "weapons.rifle", rifle, reload_time);
    check!(
        errors,
        "weapons.rifle",
        max_ammo,
        rifle.max_ammo,
        rifle.max_ammo > 0,
        "positive"
    );
    check_non_negative!(errors, "weapons.rifle", rifle, base_spread_degrees);
    check_non_negative!(errors, "weapons.rifle", rifle, airborne_spread_multiplier);
    check_non_negative!(errors, "weapons.rifle", rifle, muzzle_offset);

    // Validate shotgun
    let shotgun = &tuning.weapons.shotgun;
    check_positive!(errors, "weapons.shotgun", shotgun, fire_interval);
    check_positive!(errors, "weapons.shotgun", shotgun, reload_time);
    check!(
        errors,
        "weapons.shotgun",
        max_ammo,
        shotgun.max_ammo,
        shotgun.max_ammo > 0,
        "positive"
    );
    check!(
        errors,
        "weapons.shotgun",
        pellet_count,
        shotgun.pellet_count,
        shotgun.pellet_count > 0,
        "positive"
    );
    check_non_negative!(errors, "weapons.shotgun", shotgun, max_spread_degrees);
    check_non_negative!(errors, "weapons.shotgun", shotgun, muzzle_offset);

    // Validate projectiles
    let weapons = &tuning.weapons;
    check_positive!(errors, "weapons", weapons, bullet_speed);
    check_positive!(errors, "weapons", weapons, projectile_lifetime);

    errors
}
