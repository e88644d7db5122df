//! Movement domain: tuning constants and the shared input record.

use bevy::prelude::*;
use serde::Deserialize;

/// Every constant the simulation reads, loaded from the stage file so
/// tolerances and forces stay tunable in one place. Units are stage
/// units per tick unless noted.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StageTuning {
    /// Full run speed; the horizontal step applies half of it per tick.
    pub speed: f32,
    pub jump_force: f32,
    /// Jump force on narrow viewports, where the stage is visually
    /// shorter.
    pub jump_force_compact: f32,
    /// Window width (logical pixels) below which the compact jump force
    /// applies.
    pub compact_viewport_width: f32,
    /// Per-tick velocity decrement while above the ground line.
    pub gravity: f32,
    /// Vertical slack for snapping onto a standable surface.
    pub platform_tolerance: f32,
    /// Horizontal slack for entering the pipe.
    pub pipe_alignment_tolerance: f32,
    /// Extra half-width added to the character box for the platform
    /// probe's horizontal overlap test.
    pub probe_inset: f32,
    /// A block bump still counts while falling no faster than this.
    pub bump_tolerance: f32,
    /// Downward velocity applied when the character's head hits a block.
    pub bonk_velocity: f32,
}

impl Default for StageTuning {
    fn default() -> Self {
        Self {
            speed: 1.2,
            jump_force: 3.0,
            jump_force_compact: 2.4,
            compact_viewport_width: 768.0,
            gravity: 0.18,
            platform_tolerance: 6.0,
            pipe_alignment_tolerance: 4.0,
            probe_inset: 1.0,
            bump_tolerance: 0.5,
            bonk_velocity: -0.8,
        }
    }
}

impl StageTuning {
    pub fn effective_jump_force(&self, viewport_width: f32) -> f32 {
        if viewport_width < self.compact_viewport_width {
            self.jump_force_compact
        } else {
            self.jump_force
        }
    }
}

/// Swipe recognition thresholds (logical pixels) and pulse durations.
pub const SWIPE_UP_PULSE_SECS: f32 = 0.3;
pub const SWIPE_DOWN_PULSE_SECS: f32 = 0.5;
pub const SWIPE_HORIZONTAL_THRESHOLD: f32 = 30.0;
pub const SWIPE_VERTICAL_THRESHOLD: f32 = 50.0;

/// Held state per logical direction, rebuilt every frame from keyboard,
/// on-screen buttons, and swipes. The pulse timers keep Up/Down asserted
/// for a fixed window after the swipe that produced them.
#[derive(Resource, Debug, Default)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub up_pulse: f32,
    pub down_pulse: f32,
}

impl DirectionalInput {
    pub fn up_held(&self) -> bool {
        self.up || self.up_pulse > 0.0
    }

    pub fn down_held(&self) -> bool {
        self.down || self.down_pulse > 0.0
    }

    pub fn left_held(&self) -> bool {
        self.left
    }

    pub fn right_held(&self) -> bool {
        self.right
    }
}
