//! Weapons domain: visual side of the weapon state machine.

use bevy::prelude::*;

use crate::weapons::WeaponModel;

/// What the weapon state machine needs from the weapon visuals.
pub trait WeaponView {
    fn set_active(&mut self, model: WeaponModel, active: bool);

    /// World position the model aims from, if the model exists.
    fn weapon_origin(&self, model: WeaponModel) -> Option<Vec2>;

    /// Rotates the model to `rotation` (radians) and mirrors it vertically
    /// when `mirrored` so it never renders upside down.
    fn set_pose(&mut self, model: WeaponModel, rotation: f32, mirrored: bool);
}

pub(crate) type ModelQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static WeaponModel,
        &'static mut Visibility,
        &'static mut Transform,
        &'static GlobalTransform,
    ),
>;

/// The weapon models parented to one character.
pub(crate) struct WeaponRig<'a, 'w, 's> {
    pub children: &'a Children,
    pub models: &'a mut ModelQuery<'w, 's>,
}

impl WeaponRig<'_, '_, '_> {
    fn find(&self, model: WeaponModel) -> Option<Entity> {
        self.children.iter().find(|child| {
            self.models
                .get(*child)
                .is_ok_and(|(candidate, ..)| *candidate == model)
        })
    }
}

impl WeaponView for WeaponRig<'_, '_, '_> {
    fn set_active(&mut self, model: WeaponModel, active: bool) {
        let Some(entity) = self.find(model) else {
            return;
        };
        if let Ok((_, mut visibility, _, _)) = self.models.get_mut(entity) {
            *visibility = if active {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }

    fn weapon_origin(&self, model: WeaponModel) -> Option<Vec2> {
        let entity = self.find(model)?;
        self.models
            .get(entity)
            .ok()
            .map(|(_, _, _, global)| global.translation().truncate())
    }

    fn set_pose(&mut self, model: WeaponModel, rotation: f32, mirrored: bool) {
        let Some(entity) = self.find(model) else {
            return;
        };
        if let Ok((_, _, mut transform, _)) = self.models.get_mut(entity) {
            transform.rotation = Quat::from_rotation_z(rotation);
            let scale_y = transform.scale.y.abs();
            transform.scale.y = if mirrored { -scale_y } else { scale_y };
        }
    }
}
