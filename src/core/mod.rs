//! Core domain: session flow, tick ordering, and camera plumbing.

mod components;
mod events;
mod resources;
mod state;
mod systems;

pub use components::StageEntity;
pub use events::BackdropSelectedEvent;
pub use resources::{SessionFlags, StageSection, SECTION_PIXELS};
pub use state::{Backdrop, GameState};

use bevy::prelude::*;

use crate::core::systems::{despawn_stage, finish_boot, scroll_camera, setup_camera};

/// Per-frame ordering of the simulation. Later sets read what earlier
/// sets wrote this frame, so the chain must not be reordered.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Input,
    Physics,
    Presentation,
    Interactions,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SessionFlags>()
            .init_resource::<StageSection>()
            .insert_resource(ClearColor(Backdrop::default().clear_color()))
            .add_message::<BackdropSelectedEvent>()
            .configure_sets(
                Update,
                (
                    TickSet::Input,
                    TickSet::Physics,
                    TickSet::Presentation,
                    TickSet::Interactions,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)))
            .add_systems(Update, scroll_camera)
            .add_systems(OnExit(GameState::Playing), despawn_stage);
    }
}
