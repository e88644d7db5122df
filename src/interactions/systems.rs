//! Interactions domain: the per-tick checks against the fixed scene
//! objects. Each check is independent and works on rectangles computed
//! this frame.

use bevy::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};

use crate::audio::{Cue, CueEvent};
use crate::core::{BackdropSelectedEvent, StageSection};
use crate::interactions::components::{
    BouncePulse, Collectible, CollectibleKind, ItemBlock, Pipe, Portal, StagePlacement,
};
use crate::interactions::events::{
    BlockBumpedEvent, CollectedEvent, PipeEnteredEvent, WarpStartedEvent,
};
use crate::interactions::geometry::{
    character_hitbox, character_rect, classify_contact, ContactSide,
};
use crate::interactions::spawn::block_translation;
use crate::movement::{DirectionalInput, Kinematics, Phase, Player, StageTuning};

const EXHAUSTED_BLOCK_COLOR: Color = Color::srgb(0.45, 0.38, 0.3);
const BOUNCE_SECS: f32 = 0.25;
const BOUNCE_HEIGHT_PX: f32 = 8.0;

/// True when the character's hit-box is bonking the block from below at
/// an eligible vertical velocity.
pub fn block_bump_eligible(
    hitbox: &crate::interactions::geometry::Rect,
    block: &crate::interactions::geometry::Rect,
    vel_y: f32,
    bump_tolerance: f32,
) -> bool {
    classify_contact(hitbox, block) == Some(ContactSide::Bottom) && vel_y >= -bump_tolerance
}

/// True when a grounded, pipe-aligned character holding Down may start
/// the descent.
pub fn pipe_entry_eligible(
    x: f32,
    pipe_x: f32,
    tolerance: f32,
    down_held: bool,
    vel_y: f32,
    phase: &Phase,
) -> bool {
    (x - pipe_x).abs() <= tolerance && down_held && vel_y.abs() < 1.0 && *phase == Phase::Grounded
}

pub(crate) fn check_item_blocks(
    mut commands: Commands,
    tuning: Res<StageTuning>,
    mut players: Query<&mut Kinematics, With<Player>>,
    mut blocks: Query<(Entity, &StagePlacement, &mut ItemBlock, &mut Sprite)>,
    mut collectibles: Query<(&mut Collectible, &mut Visibility)>,
    mut bumps: MessageWriter<BlockBumpedEvent>,
    mut cues: MessageWriter<CueEvent>,
) {
    let Ok(mut kin) = players.single_mut() else {
        return;
    };
    if kin.phase.is_riding() {
        return;
    }
    let hitbox = character_hitbox(&character_rect(&kin));

    for (entity, placement, mut block, mut sprite) in &mut blocks {
        if block.exhausted {
            continue;
        }
        if !block_bump_eligible(&hitbox, &placement.rect(), kin.vel_y, tuning.bump_tolerance) {
            continue;
        }
        if !block.try_exhaust() {
            continue;
        }

        sprite.color = EXHAUSTED_BLOCK_COLOR;
        commands.entity(entity).insert(BouncePulse::default());

        if let Some(id) = block.reveals.clone() {
            for (mut collectible, mut visibility) in &mut collectibles {
                if collectible.id == id && !collectible.revealed {
                    collectible.revealed = true;
                    *visibility = Visibility::Visible;
                    info!("Block revealed collectible '{}'", id);
                }
            }
        }

        kin.vel_y = tuning.bonk_velocity;
        bumps.write(BlockBumpedEvent { block: entity });
        cues.write(CueEvent { cue: Cue::Bump });
    }
}

pub(crate) fn check_collectibles(
    mut players: Query<&mut Kinematics, With<Player>>,
    mut collectibles: Query<(&StagePlacement, &mut Collectible, &mut Visibility)>,
    mut collected: MessageWriter<CollectedEvent>,
    mut cues: MessageWriter<CueEvent>,
) {
    let Ok(mut kin) = players.single_mut() else {
        return;
    };
    if kin.phase.is_riding() {
        return;
    }
    let hitbox = character_hitbox(&character_rect(&kin));

    for (placement, mut collectible, mut visibility) in &mut collectibles {
        if !hitbox.overlaps(&placement.rect()) {
            continue;
        }
        if !collectible.try_collect() {
            continue;
        }

        *visibility = Visibility::Hidden;
        // The two cosmetic states replace each other.
        kin.stature = collectible.kind.stature();
        info!("Collected '{}' ({:?})", collectible.id, collectible.kind);
        collected.write(CollectedEvent {
            kind: collectible.kind,
        });
        cues.write(CueEvent {
            cue: match collectible.kind {
                CollectibleKind::PowerUp => Cue::PowerUp,
                CollectibleKind::Hazard => Cue::Pickup,
            },
        });
    }
}

pub(crate) fn check_portal(
    mut players: Query<&mut Kinematics, With<Player>>,
    portals: Query<&StagePlacement, With<Portal>>,
    mut warps: MessageWriter<WarpStartedEvent>,
    mut cues: MessageWriter<CueEvent>,
) {
    let Ok(mut kin) = players.single_mut() else {
        return;
    };
    let hitbox = character_hitbox(&character_rect(&kin));

    for placement in &portals {
        if !hitbox.overlaps(&placement.rect()) {
            continue;
        }
        // begin_warp refuses while any ride is in flight, so re-overlap
        // during the animation is a no-op.
        if kin.phase.begin_warp() {
            info!("Portal warp started");
            warps.write(WarpStartedEvent);
            cues.write(CueEvent { cue: Cue::Warp });
        }
    }
}

pub(crate) fn check_pipe_entry(
    tuning: Res<StageTuning>,
    input: Res<DirectionalInput>,
    mut players: Query<&mut Kinematics, With<Player>>,
    pipes: Query<&StagePlacement, With<Pipe>>,
    mut entries: MessageWriter<PipeEnteredEvent>,
    mut cues: MessageWriter<CueEvent>,
) {
    let Ok(mut kin) = players.single_mut() else {
        return;
    };
    let Ok(pipe) = pipes.single() else {
        return;
    };

    if !pipe_entry_eligible(
        kin.x,
        pipe.x,
        tuning.pipe_alignment_tolerance,
        input.down_held(),
        kin.vel_y,
        &kin.phase,
    ) {
        return;
    }
    if kin.phase.begin_pipe_entry() {
        kin.x = pipe.x;
        info!("Pipe descent started");
        entries.write(PipeEnteredEvent);
        cues.write(CueEvent { cue: Cue::Warp });
    }
}

/// Map-marker selection: apply the backdrop, scroll home, and send the
/// character back up through the pipe.
pub(crate) fn handle_backdrop_selected(
    mut events: MessageReader<BackdropSelectedEvent>,
    mut section: ResMut<StageSection>,
    mut clear_color: ResMut<ClearColor>,
    mut players: Query<&mut Kinematics, With<Player>>,
) {
    for event in events.read() {
        info!("Backdrop selected: {}", event.backdrop.label());
        section.backdrop = event.backdrop;
        section.current = 0;
        clear_color.0 = event.backdrop.clear_color();

        if let Ok(mut kin) = players.single_mut() {
            kin.phase.begin_pipe_exit();
        }
    }
}

pub(crate) fn animate_bounce_pulses(
    mut commands: Commands,
    time: Res<Time>,
    mut blocks: Query<(Entity, &StagePlacement, &mut BouncePulse, &mut Transform), With<ItemBlock>>,
) {
    let dt = time.delta_secs();
    for (entity, placement, mut pulse, mut transform) in &mut blocks {
        pulse.elapsed += dt;
        let base = block_translation(placement);
        if pulse.elapsed >= BOUNCE_SECS {
            transform.translation = base;
            commands.entity(entity).remove::<BouncePulse>();
            continue;
        }
        let u = pulse.elapsed / BOUNCE_SECS;
        transform.translation.y = base.y + (u * std::f32::consts::PI).sin() * BOUNCE_HEIGHT_PX;
    }
}
