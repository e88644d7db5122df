//! Interactions domain: the scripted pipe and portal rides.
//!
//! Each ride is a phase of the character state machine advanced by
//! elapsed frame time inside the normal schedule. There are no detached
//! timers, so overwriting the phase aborts a ride cleanly and nothing
//! fires afterwards.

use bevy::prelude::*;
use bevy::ecs::message::MessageWriter;

use crate::core::{GameState, StageSection};
use crate::interactions::components::{Pipe, StagePlacement, PIPE_HEIGHT};
use crate::interactions::events::PipeTravelCompletedEvent;
use crate::movement::systems::presentation::{stage_to_world, PIXELS_PER_UNIT};
use crate::movement::{Facing, Kinematics, Phase, PipeRide, Player, WarpRide, CHARACTER_HEIGHT};

/// Portal ride: shrink/spin/fade for half a second, navigate at 0.8 s.
pub const WARP_SHRINK_SECS: f32 = 0.5;
pub const WARP_NAVIGATE_SECS: f32 = 0.8;

/// Pipe ride: squash first, then slide for the rest of the stage.
pub const PIPE_SQUASH_SECS: f32 = 0.3;
pub const PIPE_RIDE_SECS: f32 = 1.2;
/// Exit ride rises first and unsquashes at the end.
pub const PIPE_EXIT_RISE_SECS: f32 = 0.9;

/// How far the character sinks below the pipe top, in stage units.
const PIPE_SINK_DEPTH: f32 = CHARACTER_HEIGHT * 1.2;
const PIPE_SQUASH_MIN: f32 = 0.65;
/// Character renders behind the pipe while inside it.
const CHARACTER_Z_IN_PIPE: f32 = 4.0;

/// Dark tint of the map room the pipe travels down to.
const MAP_ROOM_COLOR: Color = Color::srgb(0.09, 0.09, 0.14);

/// One frame of the portal ride.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpFrame {
    pub scale: f32,
    pub spin: f32,
    pub alpha: f32,
    /// True on exactly the frame the navigation boundary is crossed.
    pub navigate: bool,
}

pub fn tick_warp(ride: &mut WarpRide, dt: f32) -> WarpFrame {
    ride.elapsed += dt;
    let u = (ride.elapsed / WARP_SHRINK_SECS).min(1.0);
    let navigate = ride.elapsed >= WARP_NAVIGATE_SECS && !ride.navigated;
    if navigate {
        ride.navigated = true;
    }
    WarpFrame {
        scale: 1.0 - 0.9 * u,
        spin: u * std::f32::consts::TAU * 2.0,
        alpha: 1.0 - u,
        navigate,
    }
}

/// One frame of a pipe ride, shared by entry and exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeFrame {
    /// Vertical squash factor applied to the sprite.
    pub squash: f32,
    /// Stage units below the pipe top.
    pub sink: f32,
    pub done: bool,
}

pub fn tick_pipe_entry(ride: &mut PipeRide, dt: f32) -> PipeFrame {
    ride.elapsed += dt;
    let squash_u = (ride.elapsed / PIPE_SQUASH_SECS).min(1.0);
    let slide_u =
        ((ride.elapsed - PIPE_SQUASH_SECS) / (PIPE_RIDE_SECS - PIPE_SQUASH_SECS)).clamp(0.0, 1.0);
    PipeFrame {
        squash: 1.0 - (1.0 - PIPE_SQUASH_MIN) * squash_u,
        sink: slide_u * PIPE_SINK_DEPTH,
        done: ride.elapsed >= PIPE_RIDE_SECS,
    }
}

pub fn tick_pipe_exit(ride: &mut PipeRide, dt: f32) -> PipeFrame {
    ride.elapsed += dt;
    let rise_u = (ride.elapsed / PIPE_EXIT_RISE_SECS).min(1.0);
    let unsquash_u = ((ride.elapsed - PIPE_EXIT_RISE_SECS)
        / (PIPE_RIDE_SECS - PIPE_EXIT_RISE_SECS))
        .clamp(0.0, 1.0);
    PipeFrame {
        squash: PIPE_SQUASH_MIN + (1.0 - PIPE_SQUASH_MIN) * unsquash_u,
        sink: (1.0 - rise_u) * PIPE_SINK_DEPTH,
        done: ride.elapsed >= PIPE_RIDE_SECS,
    }
}

pub(crate) fn drive_rides(
    time: Res<Time>,
    mut next_state: ResMut<NextState<GameState>>,
    mut section: ResMut<StageSection>,
    mut clear_color: ResMut<ClearColor>,
    pipes: Query<&StagePlacement, With<Pipe>>,
    mut players: Query<(&mut Kinematics, &mut Transform, &mut Sprite), With<Player>>,
    mut completions: MessageWriter<PipeTravelCompletedEvent>,
) {
    let dt = time.delta_secs();
    let Ok((mut kin, mut transform, mut sprite)) = players.single_mut() else {
        return;
    };
    let pipe_top = pipes
        .single()
        .map(|p| p.bottom + PIPE_HEIGHT)
        .unwrap_or(0.0);
    let scale = kin.stature.scale();
    let mirror = if kin.facing == Facing::Left { -1.0 } else { 1.0 };

    match kin.phase {
        Phase::Warping(mut ride) => {
            let frame = tick_warp(&mut ride, dt);
            let anchor = stage_to_world(kin.x, kin.y);
            transform.translation.x = anchor.x;
            transform.translation.y =
                anchor.y + CHARACTER_HEIGHT * scale * frame.scale * PIXELS_PER_UNIT / 2.0;
            transform.rotation = Quat::from_rotation_z(frame.spin);
            transform.scale = Vec3::new(mirror * scale * frame.scale, scale * frame.scale, 1.0);
            sprite.color = sprite.color.with_alpha(frame.alpha);

            if frame.navigate {
                info!("Portal warp complete, leaving the stage");
                next_state.set(GameState::Gallery);
            }
            kin.phase = Phase::Warping(ride);
        }
        Phase::EnteringPipe(mut ride) => {
            let frame = tick_pipe_entry(&mut ride, dt);
            place_in_pipe(&mut transform, kin.x, pipe_top, frame, scale, mirror);

            if frame.done {
                section.current = 1;
                clear_color.0 = MAP_ROOM_COLOR;
                kin.settle_at(0.0);
                info!("Pipe travel complete, scrolling to the map room");
                completions.write(PipeTravelCompletedEvent);
            } else {
                kin.phase = Phase::EnteringPipe(ride);
            }
        }
        Phase::ExitingPipe(mut ride) => {
            let frame = tick_pipe_exit(&mut ride, dt);
            place_in_pipe(&mut transform, kin.x, pipe_top, frame, scale, mirror);

            if frame.done {
                // Emerge standing on the pipe.
                kin.settle_at(pipe_top);
                info!("Pipe exit complete, control returned");
            } else {
                kin.phase = Phase::ExitingPipe(ride);
            }
        }
        _ => {}
    }
}

fn place_in_pipe(
    transform: &mut Transform,
    x: f32,
    pipe_top: f32,
    frame: PipeFrame,
    scale: f32,
    mirror: f32,
) {
    let anchor = stage_to_world(x, pipe_top - frame.sink);
    transform.translation.x = anchor.x;
    transform.translation.y =
        anchor.y + CHARACTER_HEIGHT * scale * frame.squash * PIXELS_PER_UNIT / 2.0;
    transform.translation.z = CHARACTER_Z_IN_PIPE;
    transform.rotation = Quat::IDENTITY;
    transform.scale = Vec3::new(mirror * scale, scale * frame.squash, 1.0);
}
