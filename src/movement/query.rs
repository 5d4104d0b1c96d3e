//! Movement domain: narrow collision query capability used by the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// Read-only geometry queries the movement controller needs from the world.
///
/// Both casts return the travelled distance to the first hit, if any.
pub trait CollisionQuery {
    fn cast_ray(&self, origin: Vec2, direction: Dir2, max_distance: f32, mask: LayerMask)
    -> Option<f32>;

    fn cast_box(
        &self,
        center: Vec2,
        size: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<f32>;
}

impl CollisionQuery for SpatialQuery<'_, '_> {
    fn cast_ray(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<f32> {
        let filter = SpatialQueryFilter::from_mask(mask);
        SpatialQuery::cast_ray(self, origin, direction, max_distance, true, &filter)
            .map(|hit| hit.distance)
    }

    fn cast_box(
        &self,
        center: Vec2,
        size: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<f32> {
        let filter = SpatialQueryFilter::from_mask(mask);
        let shape = Collider::rectangle(size.x, size.y);
        let config = ShapeCastConfig::from_max_distance(max_distance);
        self.cast_shape(&shape, center, 0.0, direction, &config, &filter)
            .map(|hit| hit.distance)
    }
}

pub fn ground_mask() -> LayerMask {
    GameLayer::Ground.into()
}

pub fn wall_mask() -> LayerMask {
    GameLayer::Wall.into()
}

/// Everything that blocks the character's body.
pub fn solid_mask() -> LayerMask {
    [GameLayer::Ground, GameLayer::Wall].into()
}
