//! Interactions domain: fixed scene objects, overlap checks, and the
//! scripted pipe/portal rides.

pub mod components;
mod events;
pub mod geometry;
mod spawn;
mod systems;
pub mod transitions;

#[cfg(test)]
mod tests;

pub use components::{
    BouncePulse, Collectible, CollectibleKind, ItemBlock, Pipe, Portal, StagePlacement, Standable,
};
pub use events::{
    BlockBumpedEvent, CollectedEvent, PipeEnteredEvent, PipeTravelCompletedEvent, WarpStartedEvent,
};

use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::interactions::spawn::spawn_stage_objects;
use crate::interactions::systems::{
    animate_bounce_pulses, check_collectibles, check_item_blocks, check_pipe_entry, check_portal,
    handle_backdrop_selected,
};
use crate::interactions::transitions::drive_rides;

pub struct InteractionsPlugin;

impl Plugin for InteractionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BlockBumpedEvent>()
            .add_message::<CollectedEvent>()
            .add_message::<WarpStartedEvent>()
            .add_message::<PipeEnteredEvent>()
            .add_message::<PipeTravelCompletedEvent>()
            .add_systems(OnEnter(GameState::Playing), spawn_stage_objects)
            .add_systems(
                Update,
                (
                    check_item_blocks,
                    check_collectibles,
                    check_portal,
                    check_pipe_entry,
                    handle_backdrop_selected,
                    drive_rides,
                    animate_bounce_pulses,
                )
                    .chain()
                    .in_set(TickSet::Interactions),
            );
    }
}
