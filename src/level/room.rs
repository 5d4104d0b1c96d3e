//! Level domain: a small room for trying out movement and weapons.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// A static block of the test room, in world units.
#[derive(Debug, Clone, Copy)]
pub struct RoomBlock {
    pub center: Vec2,
    pub size: Vec2,
}

impl RoomBlock {
    const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }
}

const FLOOR: RoomBlock = RoomBlock::new(0.0, -5.0, 40.0, 1.0);
const PLATFORMS: [RoomBlock; 3] = [
    // Left side
    RoomBlock::new(-12.0, -1.5, 4.0, 0.5),
    // Right side, higher
    RoomBlock::new(12.0, 1.0, 4.0, 0.5),
    // Center, highest
    RoomBlock::new(0.0, 4.0, 3.0, 0.5),
];
const WALLS: [RoomBlock; 3] = [
    RoomBlock::new(-20.5, 2.0, 1.0, 15.0),
    RoomBlock::new(20.5, 2.0, 1.0, 15.0),
    // Pillar for wall jumping practice
    RoomBlock::new(-5.0, -2.0, 0.8, 5.0),
];

pub fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(
        GameLayer::Ground,
        [GameLayer::Player, GameLayer::Projectile],
    );
    let wall_layers =
        CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Projectile]);

    let mut spawn_block = |block: RoomBlock, color: Color, layers: CollisionLayers| {
        commands.spawn((
            Sprite {
                color,
                custom_size: Some(block.size),
                ..default()
            },
            Transform::from_translation(block.center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            layers,
        ));
    };

    spawn_block(FLOOR, ground_color, ground_layers);
    for platform in PLATFORMS {
        spawn_block(platform, platform_color, ground_layers);
    }
    for wall in WALLS {
        spawn_block(wall, wall_color, wall_layers);
    }

    info!(
        "Spawned test room: {} ground blocks, {} walls",
        PLATFORMS.len() + 1,
        WALLS.len()
    );
}
