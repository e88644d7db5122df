//! Movement domain: the per-tick physics step.
//!
//! The whole step works in stage units per tick with no delta-time
//! compensation. Step order is load-bearing: horizontal, jump, gravity,
//! platform probe, vertical integration, ground clamp.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::movement::components::{Facing, Kinematics, Phase, Player};
use crate::movement::resources::{DirectionalInput, StageTuning};
use crate::interactions::{StagePlacement, Standable};

/// A standable surface in stage units, rebuilt from the scene each tick
/// rather than cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSurface {
    pub left: f32,
    pub right: f32,
    pub top: f32,
}

impl PlatformSurface {
    pub fn from_placement(placement: &StagePlacement) -> Self {
        let rect = placement.rect();
        Self {
            left: rect.left,
            right: rect.right,
            top: rect.top,
        }
    }
}

pub(crate) fn step_character(
    windows: Query<&Window, With<PrimaryWindow>>,
    tuning: Res<StageTuning>,
    input: Res<DirectionalInput>,
    surfaces: Query<&StagePlacement, With<Standable>>,
    mut players: Query<&mut Kinematics, With<Player>>,
) {
    let Ok(mut kin) = players.single_mut() else {
        return;
    };
    // A scripted ride owns the character; the normal step stands down.
    if kin.phase.is_riding() {
        return;
    }

    let viewport_width = windows.single().map(|w| w.width()).unwrap_or(1280.0);
    let jump_force = tuning.effective_jump_force(viewport_width);

    let platforms: Vec<PlatformSurface> = surfaces
        .iter()
        .map(PlatformSurface::from_placement)
        .collect();

    tick(&mut kin, &input, &tuning, jump_force, &platforms);
}

/// One full physics tick.
pub fn tick(
    kin: &mut Kinematics,
    input: &DirectionalInput,
    tuning: &StageTuning,
    jump_force: f32,
    platforms: &[PlatformSurface],
) {
    apply_horizontal(kin, input, tuning);
    apply_jump(kin, input, jump_force);
    apply_gravity(kin, tuning);
    let snapped = probe_platforms(kin, platforms, tuning);
    if !snapped {
        kin.y += kin.vel_y;
    }
    clamp_to_ground(kin);
    kin.crouching = input.down_held() && kin.phase == Phase::Grounded;
}

/// Step 1: horizontal movement at half speed per tick, then the [0, 100]
/// clamp. The clamp runs unconditionally so an out-of-range position is
/// repaired within one tick regardless of input.
pub fn apply_horizontal(kin: &mut Kinematics, input: &DirectionalInput, tuning: &StageTuning) {
    if input.left_held() {
        kin.x -= tuning.speed / 2.0;
        kin.facing = Facing::Left;
    }
    if input.right_held() {
        kin.x += tuning.speed / 2.0;
        kin.facing = Facing::Right;
    }
    kin.x = kin.x.clamp(0.0, 100.0);
}

/// Step 2: jump impulse, only from the ground.
pub fn apply_jump(kin: &mut Kinematics, input: &DirectionalInput, jump_force: f32) {
    if input.up_held() && kin.phase == Phase::Grounded {
        kin.vel_y = jump_force;
        kin.phase = Phase::Airborne;
    }
}

/// Step 3: constant per-tick deceleration while above the ground line.
/// Velocity written here moves the character at this tick's integration,
/// so position trails the impulse by one tick.
pub fn apply_gravity(kin: &mut Kinematics, tuning: &StageTuning) {
    if kin.y > 0.0 {
        kin.vel_y -= tuning.gravity;
    }
}

/// Step 4: landing-only probe against standable surfaces. Never runs
/// while rising, so a platform can always be passed through from below.
/// Returns true when the character snapped this tick.
pub fn probe_platforms(
    kin: &mut Kinematics,
    platforms: &[PlatformSurface],
    tuning: &StageTuning,
) -> bool {
    if kin.vel_y > 0.0 {
        return false;
    }
    let half_width = kin.half_width() + tuning.probe_inset;
    for platform in platforms {
        let overlaps_horizontally =
            kin.x + half_width > platform.left && kin.x - half_width < platform.right;
        if overlaps_horizontally && (kin.y - platform.top).abs() <= tuning.platform_tolerance {
            kin.y = platform.top;
            kin.vel_y = 0.0;
            kin.phase = Phase::Grounded;
            return true;
        }
    }
    false
}

/// Step 6: the ground line is a hard floor.
pub fn clamp_to_ground(kin: &mut Kinematics) {
    if kin.y <= 0.0 {
        kin.y = 0.0;
        kin.vel_y = 0.0;
        kin.phase = Phase::Grounded;
    }
}
