//! Core domain: camera setup and pointer projection.

use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::resources::{CursorWorldPosition, MainCamera, RunConfig};

/// World units visible from the bottom to the top of the window
const VIEW_HEIGHT: f32 = 18.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEW_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn log_run_seed(run_config: Res<RunConfig>) {
    info!("Starting run with seed: {}", run_config.seed);
}

pub fn update_cursor_world_position(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut cursor: ResMut<CursorWorldPosition>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    cursor.0 = window
        .cursor_position()
        .and_then(|position| camera.viewport_to_world_2d(camera_transform, position).ok());
}
