//! Movement domain: the character's kinematic record and its phase
//! state machine.

use bevy::prelude::*;

/// Character sprite footprint in stage units.
pub const CHARACTER_WIDTH: f32 = 6.0;
pub const CHARACTER_HEIGHT: f32 = 8.0;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Elapsed-time payload for a pipe ride (entry or exit).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PipeRide {
    pub elapsed: f32,
}

/// Elapsed-time payload for the portal warp. `navigated` latches once the
/// navigation boundary has fired so it cannot fire twice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WarpRide {
    pub elapsed: f32,
    pub navigated: bool,
}

/// What currently owns the character. The scripted rides are variants
/// here rather than separate boolean flags, so two rides can never be
/// active at once and a reset aborts a ride by overwriting the phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Grounded,
    Airborne,
    EnteringPipe(PipeRide),
    ExitingPipe(PipeRide),
    Warping(WarpRide),
}

impl Phase {
    /// True while a scripted ride owns the character. Normal physics and
    /// presentation sync are suspended for the duration.
    pub fn is_riding(&self) -> bool {
        matches!(
            self,
            Phase::EnteringPipe(_) | Phase::ExitingPipe(_) | Phase::Warping(_)
        )
    }

    /// Starts the portal warp. Returns false without touching the phase
    /// when a ride is already in flight.
    pub fn begin_warp(&mut self) -> bool {
        if self.is_riding() {
            return false;
        }
        *self = Phase::Warping(WarpRide::default());
        true
    }

    /// Starts the pipe descent. Only a grounded character can sink into
    /// the pipe.
    pub fn begin_pipe_entry(&mut self) -> bool {
        if *self != Phase::Grounded {
            return false;
        }
        *self = Phase::EnteringPipe(PipeRide::default());
        true
    }

    /// Starts the reverse ride out of the pipe (map-marker triggered).
    pub fn begin_pipe_exit(&mut self) -> bool {
        if self.is_riding() {
            return false;
        }
        *self = Phase::ExitingPipe(PipeRide::default());
        true
    }
}

/// Cosmetic size state from collectibles. `Grown` and `Shrunk` replace
/// each other; neither feeds back into the physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stature {
    #[default]
    Normal,
    Grown,
    Shrunk,
}

impl Stature {
    pub fn scale(&self) -> f32 {
        match self {
            Stature::Normal => 1.0,
            Stature::Grown => 1.25,
            Stature::Shrunk => 0.7,
        }
    }
}

/// The character's simulation record, in stage units, mutated in place
/// once per tick.
#[derive(Component, Debug, Clone)]
pub struct Kinematics {
    /// Horizontal position, clamped to [0, 100].
    pub x: f32,
    /// Height above the ground line, never negative after a tick.
    pub y: f32,
    /// Vertical velocity in stage units per tick.
    pub vel_y: f32,
    pub facing: Facing,
    pub phase: Phase,
    pub stature: Stature,
    /// Down held while grounded; squashes the sprite, nothing else.
    pub crouching: bool,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            x: 10.0,
            y: 0.0,
            vel_y: 0.0,
            facing: Facing::Right,
            phase: Phase::Grounded,
            stature: Stature::Normal,
            crouching: false,
        }
    }
}

impl Kinematics {
    /// Half the visual footprint at the current stature.
    pub fn half_width(&self) -> f32 {
        CHARACTER_WIDTH * self.stature.scale() / 2.0
    }

    pub fn height(&self) -> f32 {
        CHARACTER_HEIGHT * self.stature.scale()
    }

    /// Returns control after a scripted ride: standing at `y` with no
    /// vertical motion.
    pub fn settle_at(&mut self, y: f32) {
        self.y = y;
        self.vel_y = 0.0;
        self.phase = Phase::Grounded;
    }
}
