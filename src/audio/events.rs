//! Audio domain: cue events fired by gameplay.

use bevy::ecs::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Head hitting an item block.
    Bump,
    /// Hazard item pickup.
    Pickup,
    /// Power-up pickup.
    PowerUp,
    /// Pipe or portal entry.
    Warp,
}

#[derive(Debug)]
pub struct CueEvent {
    pub cue: Cue,
}

impl Message for CueEvent {}
