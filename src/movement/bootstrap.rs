//! Movement domain: character spawn.

use bevy::prelude::*;

use crate::content::StageContent;
use crate::core::StageEntity;
use crate::movement::components::{Kinematics, Player, CHARACTER_HEIGHT, CHARACTER_WIDTH};
use crate::movement::systems::presentation::{stage_to_world, CHARACTER_Z, PIXELS_PER_UNIT};

pub(crate) fn spawn_character(
    mut commands: Commands,
    content: Res<StageContent>,
    existing: Query<Entity, With<Player>>,
) {
    if !existing.is_empty() {
        return;
    }

    let kin = Kinematics {
        x: content.0.character_start_x,
        ..default()
    };
    let anchor = stage_to_world(kin.x, kin.y);

    info!("Spawning character at x={}", kin.x);
    commands.spawn((
        Player,
        StageEntity,
        kin,
        Sprite {
            color: Color::srgb(0.95, 0.35, 0.3),
            custom_size: Some(Vec2::new(
                CHARACTER_WIDTH * PIXELS_PER_UNIT,
                CHARACTER_HEIGHT * PIXELS_PER_UNIT,
            )),
            ..default()
        },
        Transform::from_xyz(
            anchor.x,
            anchor.y + CHARACTER_HEIGHT * PIXELS_PER_UNIT / 2.0,
            CHARACTER_Z,
        ),
    ));
}
