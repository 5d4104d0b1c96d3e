//! Weapons domain: tests for the firing loop, reloads, aiming and projectiles.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use super::systems::{expire_projectiles, spawn_projectiles, track_grounded};
use super::{
    AimPose, FirePoint, FireStep, Muzzle, Projectile, ProjectileBundle, Shot, ShotFiredEvent,
    WeaponAction, WeaponInput, WeaponMode, WeaponModel, WeaponState, WeaponTickReport,
    WeaponTuning, WeaponView, spread_direction,
};
use crate::movement::GroundedChangedEvent;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

/// Records every call the state machine makes on the visuals.
#[derive(Default)]
struct FakeView {
    origin: Vec2,
    active: Vec<(WeaponModel, bool)>,
    poses: Vec<(WeaponModel, f32, bool)>,
}

impl WeaponView for FakeView {
    fn set_active(&mut self, model: WeaponModel, active: bool) {
        self.active.push((model, active));
    }

    fn weapon_origin(&self, _model: WeaponModel) -> Option<Vec2> {
        Some(self.origin)
    }

    fn set_pose(&mut self, model: WeaponModel, rotation: f32, mirrored: bool) {
        self.poses.push((model, rotation, mirrored));
    }
}

/// Short, power-of-two timings so accumulated time stays exact.
fn tuning() -> WeaponTuning {
    let mut tuning = WeaponTuning::default();
    tuning.rifle.fire_interval = 0.125;
    tuning.rifle.reload_time = 0.5;
    tuning.rifle.max_ammo = 3;
    tuning.shotgun.fire_interval = 0.5;
    tuning.shotgun.reload_time = 1.0;
    tuning.shotgun.max_ammo = 2;
    tuning
}

/// Test harness around one weapon.
struct Rig {
    state: WeaponState,
    tuning: WeaponTuning,
    rng: ChaCha8Rng,
    view: FakeView,
    shots: Vec<Shot>,
}

impl Rig {
    fn new(tuning: WeaponTuning) -> Self {
        Self {
            state: WeaponState::new(&tuning),
            tuning,
            rng: ChaCha8Rng::seed_from_u64(7),
            view: FakeView::default(),
            shots: Vec::new(),
        }
    }

    fn tick(&mut self, input: &WeaponInput, dt: f32) -> WeaponTickReport {
        self.state.tick(
            input,
            &self.tuning,
            dt,
            &mut self.rng,
            &mut self.view,
            &mut self.shots,
        )
    }

    fn press_fire(&mut self) -> WeaponTickReport {
        self.tick(&fire_press(), 0.0)
    }

    fn hold(&mut self, dt: f32) -> WeaponTickReport {
        self.tick(&fire_held(), dt)
    }

    fn idle(&mut self, dt: f32) -> WeaponTickReport {
        self.tick(&WeaponInput::default(), dt)
    }

    fn select(&mut self, mode: WeaponMode) -> WeaponTickReport {
        let input = WeaponInput {
            selected_mode: Some(mode),
            ..default()
        };
        self.tick(&input, 0.0)
    }

    fn reload(&mut self) -> WeaponTickReport {
        let input = WeaponInput {
            reload_just_pressed: true,
            ..default()
        };
        self.tick(&input, 0.0)
    }
}

fn fire_press() -> WeaponInput {
    WeaponInput {
        fire_just_pressed: true,
        fire_held: true,
        ..default()
    }
}

fn fire_held() -> WeaponInput {
    WeaponInput {
        fire_held: true,
        ..default()
    }
}

fn angle_between(a: Vec2, b: Vec2) -> f32 {
    a.angle_to(b).to_degrees().abs()
}

// -----------------------------------------------------------------------------
// Initial state
// -----------------------------------------------------------------------------

#[test]
fn test_weapon_state_defaults() {
    let tuning = WeaponTuning::default();
    let state = WeaponState::new(&tuning);

    assert_eq!(state.mode, WeaponMode::Rifle);
    assert_eq!(state.ammo(WeaponMode::Rifle), Some(30));
    assert_eq!(state.ammo(WeaponMode::Shotgun), Some(6));
    assert_eq!(state.ammo(WeaponMode::Melee), None);
    assert_eq!(state.action, WeaponAction::Idle);
    assert_eq!(state.aim_direction, Vec2::X);
    assert!(state.grounded);
}

#[test]
fn test_melee_has_no_magazine() {
    let tuning = WeaponTuning::default();
    assert!(tuning.magazine(WeaponMode::Melee).is_none());
    assert_eq!(
        tuning.magazine(WeaponMode::Shotgun).map(|m| m.max_ammo),
        Some(6)
    );
}

// -----------------------------------------------------------------------------
// Firing loop
// -----------------------------------------------------------------------------

#[test]
fn test_fire_press_shoots_immediately() {
    let mut rig = Rig::new(tuning());

    let report = rig.press_fire();

    assert_eq!(report.shots_fired, 1);
    assert_eq!(rig.shots.len(), 1);
    assert_eq!(rig.shots[0].muzzle, Muzzle::Rifle);
    assert_eq!(rig.shots[0].offset, rig.tuning.rifle.muzzle_offset);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(2));
    assert_eq!(
        rig.state.action,
        WeaponAction::Firing(FireStep::Cooldown { remaining: 0.125 })
    );
}

#[test]
fn test_held_trigger_fires_at_fire_interval() {
    let mut rig = Rig::new(tuning());
    rig.press_fire();

    assert_eq!(rig.hold(0.0625).shots_fired, 0);
    assert_eq!(rig.hold(0.0625).shots_fired, 1);
    assert_eq!(rig.hold(0.0625).shots_fired, 0);
    assert_eq!(rig.hold(0.0625).shots_fired, 1);

    assert_eq!(rig.shots.len(), 3);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(0));
}

#[test]
fn test_releasing_trigger_stops_firing() {
    let mut rig = Rig::new(tuning());
    rig.press_fire();

    let report = rig.idle(0.125);

    assert_eq!(report.shots_fired, 0);
    assert_eq!(rig.state.action, WeaponAction::Idle);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(2));

    // Holding again without a new press does nothing
    assert_eq!(rig.hold(0.125).shots_fired, 0);
}

#[test]
fn test_fire_press_ignored_while_firing() {
    let mut rig = Rig::new(tuning());
    rig.press_fire();

    let report = rig.tick(&fire_press(), 0.0);

    assert_eq!(report.shots_fired, 0);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(2));
}

#[test]
fn test_empty_magazine_reloads_then_halts() {
    let mut rig = Rig::new(tuning());
    rig.press_fire();
    rig.hold(0.125);
    rig.hold(0.125);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(0));

    let report = rig.hold(0.125);
    assert!(report.reload_started);
    assert_eq!(
        rig.state.action,
        WeaponAction::Firing(FireStep::Reload { remaining: 0.5 })
    );

    assert!(!rig.hold(0.25).reload_finished);
    let report = rig.hold(0.25);
    assert!(report.reload_finished);
    assert_eq!(report.shots_fired, 0);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(3));
    assert_eq!(rig.state.action, WeaponAction::Idle);

    // Still holding: a fresh press is needed
    assert_eq!(rig.hold(0.125).shots_fired, 0);
    assert_eq!(rig.press_fire().shots_fired, 1);
    assert_eq!(rig.shots.len(), 4);
}

#[test]
fn test_resume_fire_after_reload_when_configured() {
    let mut tuning = tuning();
    tuning.resume_fire_after_reload = true;
    let mut rig = Rig::new(tuning);
    rig.press_fire();
    rig.hold(0.125);
    rig.hold(0.125);
    rig.hold(0.125);

    let report = rig.hold(0.5);

    assert!(report.reload_finished);
    assert_eq!(report.shots_fired, 1);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(2));
}

#[test]
fn test_fire_with_empty_magazine_reloads_without_shooting() {
    let mut rig = Rig::new(tuning());
    rig.state.set_ammo(WeaponMode::Rifle, 0);

    let report = rig.press_fire();

    assert_eq!(report.shots_fired, 0);
    assert!(report.reload_started);
    assert!(rig.shots.is_empty());
}

#[test]
fn test_melee_does_not_fire() {
    let mut rig = Rig::new(tuning());
    rig.select(WeaponMode::Melee);

    let report = rig.press_fire();

    assert_eq!(report.shots_fired, 0);
    assert_eq!(rig.state.action, WeaponAction::Idle);
    assert!(rig.shots.is_empty());
}

// -----------------------------------------------------------------------------
// Reload
// -----------------------------------------------------------------------------

#[test]
fn test_reload_zeroes_ammo_then_refills() {
    let mut rig = Rig::new(tuning());
    rig.press_fire();
    rig.idle(0.125);

    let report = rig.reload();
    assert!(report.reload_started);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(0));
    assert_eq!(rig.state.action, WeaponAction::Reloading { remaining: 0.5 });

    assert!(!rig.idle(0.25).reload_finished);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(0));

    assert!(rig.idle(0.25).reload_finished);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(3));
    assert_eq!(rig.state.action, WeaponAction::Idle);
}

#[test]
fn test_reload_with_full_magazine_does_nothing() {
    let mut rig = Rig::new(tuning());

    let report = rig.reload();

    assert!(!report.reload_started);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(3));
    assert_eq!(rig.state.action, WeaponAction::Idle);
}

#[test]
fn test_reload_with_melee_does_nothing() {
    let mut rig = Rig::new(tuning());
    rig.select(WeaponMode::Melee);

    assert!(!rig.reload().reload_started);
    assert_eq!(rig.state.action, WeaponAction::Idle);
}

#[test]
fn test_reload_cancels_firing() {
    let mut rig = Rig::new(tuning());
    rig.press_fire();

    let input = WeaponInput {
        fire_held: true,
        reload_just_pressed: true,
        ..default()
    };
    let report = rig.tick(&input, 0.125);

    assert!(report.reload_started);
    assert_eq!(report.shots_fired, 0);
    assert!(matches!(rig.state.action, WeaponAction::Reloading { .. }));
    assert_eq!(rig.hold(0.25).shots_fired, 0);
}

#[test]
fn test_new_tuning_clamps_ammo_to_smaller_magazine() {
    let mut rig = Rig::new(tuning());
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(3));

    let mut smaller = tuning();
    smaller.rifle.max_ammo = 1;
    rig.state.apply_tuning(&smaller);
    rig.tuning = smaller;

    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(1));
    assert_eq!(rig.state.ammo(WeaponMode::Shotgun), Some(2));
    assert!(!rig.reload().reload_started);
}

#[test]
fn test_new_tuning_keeps_ammo_under_larger_magazine_and_allows_reload() {
    let mut rig = Rig::new(tuning());

    let mut larger = tuning();
    larger.rifle.max_ammo = 10;
    rig.state.apply_tuning(&larger);
    rig.tuning = larger;

    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(3));
    assert!(rig.reload().reload_started);
    rig.idle(0.5);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(10));
}

#[test]
fn test_new_tuning_cancels_running_action() {
    let mut rig = Rig::new(tuning());
    rig.press_fire();
    assert!(!rig.state.action.is_idle());

    rig.state.apply_tuning(&tuning());

    assert_eq!(rig.state.action, WeaponAction::Idle);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(2));
}

// -----------------------------------------------------------------------------
// Mode switching
// -----------------------------------------------------------------------------

#[test]
fn test_switch_shows_only_selected_model() {
    let mut rig = Rig::new(tuning());

    let report = rig.select(WeaponMode::Melee);

    assert_eq!(report.switched_to, Some(WeaponMode::Melee));
    assert_eq!(
        rig.view.active,
        vec![
            (WeaponModel::Arms, true),
            (WeaponModel::Rifle, false),
            (WeaponModel::Shotgun, false),
        ]
    );
}

#[test]
fn test_selecting_current_mode_is_a_no_op() {
    let mut rig = Rig::new(tuning());
    rig.press_fire();

    let report = rig.select(WeaponMode::Rifle);

    assert_eq!(report.switched_to, None);
    assert!(rig.view.active.is_empty());
    assert!(!rig.state.action.is_idle());
}

#[test]
fn test_switch_during_reload_leaves_ammo_at_zero() {
    let mut rig = Rig::new(tuning());
    rig.press_fire();
    rig.idle(0.125);
    rig.reload();

    rig.select(WeaponMode::Shotgun);
    assert_eq!(rig.state.action, WeaponAction::Idle);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(0));

    // No stale reload finishes later
    for _ in 0..8 {
        assert!(!rig.idle(0.25).reload_finished);
    }
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(0));
    assert_eq!(rig.state.ammo(WeaponMode::Shotgun), Some(2));

    rig.select(WeaponMode::Rifle);
    let report = rig.press_fire();
    assert_eq!(report.shots_fired, 0);
    assert!(report.reload_started);
}

#[test]
fn test_switch_cancels_firing_loop() {
    let mut rig = Rig::new(tuning());
    rig.press_fire();

    rig.select(WeaponMode::Shotgun);

    assert_eq!(rig.state.action, WeaponAction::Idle);
    assert_eq!(rig.hold(0.125).shots_fired, 0);
    assert_eq!(rig.state.ammo(WeaponMode::Rifle), Some(2));
}

#[test]
fn test_ammo_stays_within_bounds() {
    let mut rig = Rig::new(tuning());
    let modes = [WeaponMode::Rifle, WeaponMode::Shotgun, WeaponMode::Melee];

    for step in 0..400_u32 {
        let input = WeaponInput {
            selected_mode: (step % 37 == 0).then(|| modes[(step / 37) as usize % modes.len()]),
            fire_just_pressed: step % 5 == 0,
            fire_held: step % 11 != 0,
            reload_just_pressed: step % 23 == 0,
            aim_target: None,
        };
        let report = rig.tick(&input, 0.0625);

        assert!(rig.state.ammo.rifle <= rig.tuning.rifle.max_ammo);
        assert!(rig.state.ammo.shotgun <= rig.tuning.shotgun.max_ammo);
        if report.reload_finished {
            let max = rig
                .tuning
                .magazine(rig.state.mode)
                .map(|magazine| magazine.max_ammo);
            assert_eq!(rig.state.ammo(rig.state.mode), max);
        }
    }

    assert!(!rig.shots.is_empty());
}

// -----------------------------------------------------------------------------
// Spread
// -----------------------------------------------------------------------------

#[test]
fn test_zero_spread_keeps_aim() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let aim = Vec2::new(0.6, 0.8);

    assert_eq!(spread_direction(aim, 0.0, &mut rng), aim);
}

#[test]
fn test_spread_stays_within_cone() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let aim = Vec2::new(0.0, 1.0);

    for _ in 0..200 {
        let direction = spread_direction(aim, 10.0, &mut rng);
        assert!(angle_between(aim, direction) <= 10.0 + 1e-3);
        assert_close(direction.length(), 1.0);
    }
}

#[test]
fn test_shotgun_fires_pellet_cone() {
    let mut rig = Rig::new(tuning());
    rig.select(WeaponMode::Shotgun);

    let report = rig.press_fire();

    assert_eq!(report.shots_fired, 1);
    assert_eq!(rig.shots.len(), 6);
    assert_eq!(rig.state.ammo(WeaponMode::Shotgun), Some(1));
    for shot in &rig.shots {
        assert_eq!(shot.muzzle, Muzzle::Shotgun);
        assert_eq!(shot.offset, rig.tuning.shotgun.muzzle_offset);
        assert!(angle_between(Vec2::X, shot.direction) <= 15.0 + 1e-3);
    }
    assert!(
        rig.shots
            .windows(2)
            .any(|pair| pair[0].direction != pair[1].direction)
    );
}

#[test]
fn test_airborne_rifle_spread_is_wider() {
    let mut grounded = Rig::new(tuning());
    let mut airborne = Rig::new(tuning());
    airborne.state.grounded = false;

    for _ in 0..100 {
        for rig in [&mut grounded, &mut airborne] {
            rig.press_fire();
            rig.state.cancel_action();
            rig.state.set_ammo(WeaponMode::Rifle, 3);
        }
    }

    let widest = |rig: &Rig| {
        rig.shots
            .iter()
            .map(|shot| angle_between(Vec2::X, shot.direction))
            .fold(0.0_f32, f32::max)
    };
    assert!(widest(&grounded) <= 2.0 + 1e-3);
    assert!(widest(&airborne) <= 6.0 + 1e-3);
    assert!(widest(&airborne) > 2.0);
}

// -----------------------------------------------------------------------------
// Aim
// -----------------------------------------------------------------------------

#[test]
fn test_aim_pose_toward_target() {
    let pose = AimPose::toward(Vec2::ZERO, Vec2::new(1.0, 1.0));
    assert_close(pose.rotation, std::f32::consts::FRAC_PI_4);
    assert!(!pose.mirrored);
    assert_close(pose.direction.x, std::f32::consts::FRAC_1_SQRT_2);
    assert_close(pose.direction.y, std::f32::consts::FRAC_1_SQRT_2);

    let behind = AimPose::toward(Vec2::ZERO, Vec2::new(-1.0, 0.5));
    assert!(behind.mirrored);

    let below_behind = AimPose::toward(Vec2::ZERO, Vec2::new(-1.0, -0.5));
    assert!(below_behind.mirrored);
}

#[test]
fn test_aim_rotates_active_model_and_caches_direction() {
    let mut rig = Rig::new(tuning());
    rig.view.origin = Vec2::new(1.0, 1.0);

    let input = WeaponInput {
        aim_target: Some(Vec2::new(3.0, 3.0)),
        ..default()
    };
    rig.tick(&input, 0.0);

    assert_eq!(rig.view.poses.len(), 1);
    let (model, rotation, mirrored) = rig.view.poses[0];
    assert_eq!(model, WeaponModel::Rifle);
    assert_close(rotation, std::f32::consts::FRAC_PI_4);
    assert!(!mirrored);
    assert_close(rig.state.aim_direction.x, std::f32::consts::FRAC_1_SQRT_2);
    assert_close(rig.state.aim_direction.y, std::f32::consts::FRAC_1_SQRT_2);

    // Shots follow the cached aim
    rig.tuning.rifle.base_spread_degrees = 0.0;
    rig.press_fire();
    assert_close(rig.shots[0].direction.x, std::f32::consts::FRAC_1_SQRT_2);
    assert_close(rig.shots[0].direction.y, std::f32::consts::FRAC_1_SQRT_2);
}

#[test]
fn test_aiming_behind_mirrors_model() {
    let mut rig = Rig::new(tuning());
    rig.select(WeaponMode::Shotgun);

    let input = WeaponInput {
        aim_target: Some(Vec2::new(-2.0, 2.0)),
        ..default()
    };
    rig.tick(&input, 0.0);

    let (model, rotation, mirrored) = rig.view.poses[0];
    assert_eq!(model, WeaponModel::Shotgun);
    assert_close(rotation, 3.0 * std::f32::consts::FRAC_PI_4);
    assert!(mirrored);
}

#[test]
fn test_melee_does_not_aim() {
    let mut rig = Rig::new(tuning());
    rig.select(WeaponMode::Melee);

    let input = WeaponInput {
        aim_target: Some(Vec2::new(-3.0, 0.0)),
        ..default()
    };
    rig.tick(&input, 0.0);

    assert!(rig.view.poses.is_empty());
    assert_eq!(rig.state.aim_direction, Vec2::X);
}

// -----------------------------------------------------------------------------
// Projectiles
// -----------------------------------------------------------------------------

#[test]
fn test_projectile_launch_from_fire_point() {
    let tuning = WeaponTuning::default();
    let shot = Shot {
        muzzle: Muzzle::Rifle,
        aim: Vec2::Y,
        direction: Vec2::new(0.0, 2.0),
        offset: 0.5,
    };

    let bundle = ProjectileBundle::from_shot(Vec2::new(2.0, 1.0), 0.5, &shot, &tuning);

    assert_close(bundle.transform.translation.x, 2.0);
    assert_close(bundle.transform.translation.y, 2.0);
    let right = bundle.transform.rotation * Vec3::X;
    assert_close(right.x, 0.0);
    assert_close(right.y, 1.0);
    assert_close(bundle.velocity.0.x, 0.0);
    assert_close(bundle.velocity.0.y, tuning.bullet_speed);
    assert_eq!(bundle.projectile.remaining, tuning.projectile_lifetime);
}

#[test]
fn test_projectile_launch_ahead_when_aiming_behind() {
    let tuning = WeaponTuning::default();
    let aim = Vec2::from_angle(170f32.to_radians());
    let shot = Shot {
        muzzle: Muzzle::Rifle,
        aim,
        direction: aim,
        offset: 0.2,
    };

    let bundle = ProjectileBundle::from_shot(Vec2::ZERO, 0.5, &shot, &tuning);

    let position = bundle.transform.translation.truncate();
    assert_close(position.dot(aim), 0.7);
    let right = (bundle.transform.rotation * Vec3::X).truncate();
    assert_close(right.dot(aim), 1.0);
}

/// Spawns a player with one rifle model posed the way `WeaponRig::set_pose`
/// leaves it. Returns the player.
fn spawn_posed_rifle(world: &mut World, pivot: Vec2, rotation: f32, mirrored: bool) -> Entity {
    let player = world.spawn_empty().id();
    let mut model = Transform::from_translation(pivot.extend(0.5))
        .with_rotation(Quat::from_rotation_z(rotation));
    if mirrored {
        model.scale.y = -1.0;
    }
    let model = world
        .spawn((WeaponModel::Rifle, model, GlobalTransform::from(model)))
        .id();
    world.spawn((
        FirePoint {
            owner: player,
            muzzle: Muzzle::Rifle,
        },
        Transform::from_xyz(0.5, 0.0, 0.0),
        ChildOf(model),
    ));
    player
}

#[test]
fn test_mirrored_weapon_spawns_projectile_in_front_of_muzzle() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<WeaponTuning>()
        .add_message::<ShotFiredEvent>()
        .add_systems(Update, spawn_projectiles);

    let pivot = Vec2::new(1.0, 2.0);
    let aim = Vec2::from_angle(170f32.to_radians());
    let player = spawn_posed_rifle(app.world_mut(), pivot, aim.to_angle(), true);

    app.world_mut().write_message(ShotFiredEvent {
        shooter: player,
        shot: Shot {
            muzzle: Muzzle::Rifle,
            aim,
            direction: aim,
            offset: 0.2,
        },
    });
    app.update();

    let world = app.world_mut();
    let mut projectiles = world.query_filtered::<&Transform, With<Projectile>>();
    let transforms: Vec<Transform> = projectiles.iter(world).copied().collect();
    assert_eq!(transforms.len(), 1);

    let from_pivot = transforms[0].translation.truncate() - pivot;
    assert_close(from_pivot.dot(aim), 0.7);
    assert_close(from_pivot.perp_dot(aim), 0.0);
    let right = (transforms[0].rotation * Vec3::X).truncate();
    assert_close(right.dot(aim), 1.0);
}

#[test]
fn test_shot_without_fire_point_is_dropped() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<WeaponTuning>()
        .add_message::<ShotFiredEvent>()
        .add_systems(Update, spawn_projectiles);

    let player = spawn_posed_rifle(app.world_mut(), Vec2::ZERO, 0.0, false);
    app.world_mut().write_message(ShotFiredEvent {
        shooter: player,
        shot: Shot {
            muzzle: Muzzle::Shotgun,
            aim: Vec2::X,
            direction: Vec2::X,
            offset: 0.2,
        },
    });
    app.update();

    let world = app.world_mut();
    let mut projectiles = world.query_filtered::<Entity, With<Projectile>>();
    assert_eq!(projectiles.iter(world).count(), 0);
}

#[test]
fn test_projectile_tick_expires() {
    let mut projectile = Projectile::new(0.5);
    assert!(!projectile.tick(0.25));
    assert!(projectile.tick(0.25));
}

#[test]
fn test_projectiles_despawn_after_lifetime() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(125)))
        .add_systems(Update, expire_projectiles);

    let projectile = app.world_mut().spawn(Projectile::new(0.5)).id();

    // The first update only starts the clock
    app.update();
    for _ in 0..3 {
        app.update();
        assert!(app.world().get_entity(projectile).is_ok());
    }

    app.update();
    assert!(app.world().get_entity(projectile).is_err());
}

#[test]
fn test_grounded_signal_reaches_weapon_state() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<GroundedChangedEvent>()
        .add_systems(Update, track_grounded);

    let player = app
        .world_mut()
        .spawn(WeaponState::new(&WeaponTuning::default()))
        .id();

    app.world_mut().write_message(GroundedChangedEvent {
        entity: player,
        grounded: false,
    });
    app.update();

    let state = app
        .world()
        .get::<WeaponState>(player)
        .expect("player keeps its weapon state");
    assert!(!state.grounded);
}
