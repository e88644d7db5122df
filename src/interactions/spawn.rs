//! Interactions domain: stage object spawn from the loaded layout.

use bevy::prelude::*;

use crate::content::StageContent;
use crate::core::StageEntity;
use crate::interactions::components::{
    Collectible, CollectibleKind, ItemBlock, Pipe, Portal, StagePlacement, Standable, BLOCK_SIZE,
    COLLECTIBLE_SIZE, PIPE_HEIGHT, PIPE_WIDTH, PORTAL_HEIGHT, PORTAL_WIDTH,
};
use crate::movement::systems::presentation::{stage_to_world, PIXELS_PER_UNIT};

const OBJECT_Z: f32 = 5.0;
const COLLECTIBLE_Z: f32 = 6.0;
const PORTAL_Z: f32 = 3.0;
const GROUND_Z: f32 = 1.0;

pub(crate) fn block_translation(placement: &StagePlacement) -> Vec3 {
    let anchor = stage_to_world(placement.x, placement.bottom);
    Vec3::new(
        anchor.x,
        anchor.y + placement.height * PIXELS_PER_UNIT / 2.0,
        OBJECT_Z,
    )
}

fn object_translation(placement: &StagePlacement, z: f32) -> Vec3 {
    let anchor = stage_to_world(placement.x, placement.bottom);
    Vec3::new(
        anchor.x,
        anchor.y + placement.height * PIXELS_PER_UNIT / 2.0,
        z,
    )
}

fn placement_sprite(placement: &StagePlacement, color: Color) -> Sprite {
    Sprite {
        color,
        custom_size: Some(Vec2::new(
            placement.width * PIXELS_PER_UNIT,
            placement.height * PIXELS_PER_UNIT,
        )),
        ..default()
    }
}

pub(crate) fn spawn_stage_objects(
    mut commands: Commands,
    content: Res<StageContent>,
    existing: Query<Entity, With<StagePlacement>>,
) {
    if !existing.is_empty() {
        return;
    }
    let layout = &content.0;

    // Decorative ground strip; the ground clamp is what actually stops
    // the character.
    commands.spawn((
        StageEntity,
        Sprite {
            color: Color::srgb(0.35, 0.25, 0.18),
            custom_size: Some(Vec2::new(120.0 * PIXELS_PER_UNIT, 4.0 * PIXELS_PER_UNIT)),
            ..default()
        },
        Transform::from_xyz(0.0, stage_to_world(50.0, 0.0).y - 2.0 * PIXELS_PER_UNIT, GROUND_Z),
    ));

    for block in &layout.blocks {
        let placement = StagePlacement {
            x: block.x,
            bottom: block.bottom,
            width: BLOCK_SIZE,
            height: BLOCK_SIZE,
        };
        commands.spawn((
            StageEntity,
            ItemBlock::new(block.reveals.clone()),
            Standable,
            placement,
            placement_sprite(&placement, Color::srgb(0.9, 0.7, 0.2)),
            Transform::from_translation(block_translation(&placement)),
        ));
    }

    for collectible in &layout.collectibles {
        let placement = StagePlacement {
            x: collectible.x,
            bottom: collectible.bottom,
            width: COLLECTIBLE_SIZE,
            height: COLLECTIBLE_SIZE,
        };
        let color = match collectible.kind {
            CollectibleKind::PowerUp => Color::srgb(0.95, 0.3, 0.25),
            CollectibleKind::Hazard => Color::srgb(0.55, 0.3, 0.65),
        };
        commands.spawn((
            StageEntity,
            Collectible {
                id: collectible.id.clone(),
                kind: collectible.kind,
                revealed: collectible.revealed,
                collected: false,
            },
            placement,
            placement_sprite(&placement, color),
            Transform::from_translation(object_translation(&placement, COLLECTIBLE_Z)),
            if collectible.revealed {
                Visibility::Visible
            } else {
                Visibility::Hidden
            },
        ));
    }

    if let Some(pipe) = &layout.pipe {
        let placement = StagePlacement {
            x: pipe.x,
            bottom: 0.0,
            width: PIPE_WIDTH,
            height: PIPE_HEIGHT,
        };
        commands.spawn((
            StageEntity,
            Pipe,
            Standable,
            placement,
            placement_sprite(&placement, Color::srgb(0.2, 0.65, 0.25)),
            Transform::from_translation(object_translation(&placement, OBJECT_Z)),
        ));
    } else {
        // Tolerated: the pipe branch of the engine simply never fires.
        warn!("Stage layout has no pipe");
    }

    if let Some(portal) = &layout.portal {
        let placement = StagePlacement {
            x: portal.x,
            bottom: portal.bottom,
            width: PORTAL_WIDTH,
            height: PORTAL_HEIGHT,
        };
        commands.spawn((
            StageEntity,
            Portal,
            placement,
            placement_sprite(&placement, Color::srgba(0.35, 0.55, 0.95, 0.65)),
            Transform::from_translation(object_translation(&placement, PORTAL_Z)),
        ));
    } else {
        warn!("Stage layout has no portal");
    }

    info!(
        "Stage spawned: {} blocks, {} collectibles, pipe: {}, portal: {}",
        layout.blocks.len(),
        layout.collectibles.len(),
        layout.pipe.is_some(),
        layout.portal.is_some()
    );
}
