//! Audio domain: procedurally synthesized cues and the background loop.

mod events;
pub mod synth;
mod systems;

pub use events::{Cue, CueEvent};

use bevy::prelude::*;

use crate::audio::systems::{apply_music_mute, play_cues, setup_audio};

/// Session-wide mute flag, toggled from the UI. Starts unmuted; flips to
/// muted if the device turns out to be unusable.
#[derive(Resource, Debug, Default)]
pub struct AudioSettings {
    pub muted: bool,
}

/// Handles for the synthesized one-shot cues.
#[derive(Resource, Debug)]
pub struct CueBank {
    pub bump: Handle<AudioSource>,
    pub pickup: Handle<AudioSource>,
    pub power_up: Handle<AudioSource>,
    pub warp: Handle<AudioSource>,
}

impl CueBank {
    pub fn handle(&self, cue: Cue) -> Handle<AudioSource> {
        match cue {
            Cue::Bump => self.bump.clone(),
            Cue::Pickup => self.pickup.clone(),
            Cue::PowerUp => self.power_up.clone(),
            Cue::Warp => self.warp.clone(),
        }
    }
}

/// Marker for the looping background track entity.
#[derive(Component, Debug)]
pub struct MusicTrack;

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AudioSettings>()
            .add_message::<CueEvent>()
            .add_systems(Startup, setup_audio)
            .add_systems(Update, (play_cues, apply_music_mute));
    }
}
