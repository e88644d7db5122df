//! Movement domain: character state, input collection, and the per-tick
//! physics step.

mod bootstrap;
pub mod components;
pub mod resources;
pub mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    Facing, Kinematics, Phase, PipeRide, Player, Stature, WarpRide, CHARACTER_HEIGHT,
    CHARACTER_WIDTH,
};
pub use resources::{DirectionalInput, StageTuning};

use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::movement::bootstrap::spawn_character;
use crate::movement::systems::{collect_input, step_character, sync_presentation};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DirectionalInput>()
            .add_systems(OnEnter(GameState::Playing), spawn_character)
            .add_systems(Update, collect_input.in_set(TickSet::Input))
            .add_systems(Update, step_character.in_set(TickSet::Physics))
            .add_systems(Update, sync_presentation.in_set(TickSet::Presentation));
    }
}
