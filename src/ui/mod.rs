//! UI domain: start overlay, on-screen controls, music toggle, map
//! markers, and the terminal gallery screen.

mod controls;
mod gallery;
mod map;
mod music;
mod overlay;

pub use controls::{ControlButton, ControlDir};

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::controls::spawn_controls;
use crate::ui::gallery::{click_replay, despawn_gallery, spawn_gallery};
use crate::ui::map::{click_map_markers, spawn_map_panel, sync_map_panel_visibility};
use crate::ui::music::{spawn_music_toggle, toggle_music, update_music_label};
use crate::ui::overlay::{despawn_overlay, dismiss_overlay, spawn_overlay};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Title), spawn_overlay)
            .add_systems(OnExit(GameState::Title), despawn_overlay)
            .add_systems(
                Update,
                dismiss_overlay.run_if(in_state(GameState::Title)),
            )
            .add_systems(
                OnEnter(GameState::Playing),
                (spawn_controls, spawn_music_toggle, spawn_map_panel),
            )
            .add_systems(
                Update,
                (
                    toggle_music,
                    update_music_label,
                    click_map_markers,
                    sync_map_panel_visibility,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnEnter(GameState::Gallery), spawn_gallery)
            .add_systems(Update, click_replay.run_if(in_state(GameState::Gallery)))
            .add_systems(OnExit(GameState::Gallery), despawn_gallery);
    }
}
