mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod weapons;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics steps per second for the movement integrator
const FIXED_HZ: f64 = 50.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Gunrunner".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
    // Content first so tuning is in place before the domains init defaults
    .add_plugins((
        content::ContentPlugin::default(),
        core::CorePlugin,
        movement::MovementPlugin,
        weapons::WeaponsPlugin,
        level::LevelPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
