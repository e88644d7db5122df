//! Movement domain: maps the stage-unit simulation onto world-space
//! transforms.

use bevy::prelude::*;

use crate::movement::components::{Facing, Kinematics, Player, Stature, CHARACTER_HEIGHT};

/// World pixels per stage unit; the stage spans 1000 px.
pub const PIXELS_PER_UNIT: f32 = 10.0;
/// World y of the ground line.
pub const GROUND_Y_PX: f32 = -280.0;
/// Character draws in front of scene objects except while inside the
/// pipe.
pub const CHARACTER_Z: f32 = 10.0;

pub const CROUCH_SQUASH: f32 = 0.65;

/// Stage coordinates (x across, y up from the ground line) to world
/// space.
pub fn stage_to_world(x: f32, y: f32) -> Vec2 {
    Vec2::new((x - 50.0) * PIXELS_PER_UNIT, GROUND_Y_PX + y * PIXELS_PER_UNIT)
}

/// Step 7: writes transform and tint from the kinematic record. Stands
/// down while a ride owns the character so the ride driver and this
/// system never fight over the transform.
pub(crate) fn sync_presentation(
    mut players: Query<(&Kinematics, &mut Transform, &mut Sprite), With<Player>>,
) {
    let Ok((kin, mut transform, mut sprite)) = players.single_mut() else {
        return;
    };
    if kin.phase.is_riding() {
        return;
    }

    let scale = kin.stature.scale();
    let squash = if kin.crouching { CROUCH_SQUASH } else { 1.0 };
    let anchor = stage_to_world(kin.x, kin.y);

    transform.translation.x = anchor.x;
    transform.translation.y =
        anchor.y + CHARACTER_HEIGHT * scale * squash * PIXELS_PER_UNIT / 2.0;
    transform.translation.z = CHARACTER_Z;
    transform.rotation = Quat::IDENTITY;
    let mirror = if kin.facing == Facing::Left { -1.0 } else { 1.0 };
    transform.scale = Vec3::new(mirror * scale, scale * squash, 1.0);

    sprite.color = stature_tint(kin.stature);
}

fn stature_tint(stature: Stature) -> Color {
    match stature {
        Stature::Normal => Color::srgb(0.95, 0.35, 0.3),
        Stature::Grown => Color::srgb(1.0, 0.55, 0.25),
        Stature::Shrunk => Color::srgb(0.7, 0.55, 0.75),
    }
}
