//! Content domain: stage layout and tuning from RON.

pub mod data;
mod loader;

pub use data::{BlockDef, CollectibleDef, PipeDef, PortalDef, StageLayout};
pub use loader::{load_stage, StageLoadError};

use bevy::prelude::*;
use std::path::Path;

/// The loaded stage layout, inserted at startup.
#[derive(Resource, Debug)]
pub struct StageContent(pub StageLayout);

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_stage_content);
    }
}

const STAGE_PATH: &str = "assets/data/stage.ron";

fn load_stage_content(mut commands: Commands) {
    let layout = match load_stage(Path::new(STAGE_PATH)) {
        Ok(layout) => {
            info!("Loaded stage layout from {}", STAGE_PATH);
            layout
        }
        Err(err) => {
            warn!("{err}; using the built-in stage");
            StageLayout::default()
        }
    };
    commands.insert_resource(layout.tuning.clone());
    commands.insert_resource(StageContent(layout));
}
