//! UI domain: background music toggle.

use bevy::prelude::*;

use crate::audio::{AudioSettings, MusicTrack};
use crate::core::StageEntity;

#[derive(Component)]
pub struct MusicToggle;

#[derive(Component)]
pub struct MusicToggleLabel;

pub(crate) fn spawn_music_toggle(mut commands: Commands) {
    commands
        .spawn((
            StageEntity,
            MusicToggle,
            Button,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Px(16.0),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.7)),
            BorderColor::all(Color::srgba(0.8, 0.8, 0.85, 0.4)),
        ))
        .with_child((
            MusicToggleLabel,
            Text::new("Sound: on"),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.95)),
        ));
}

pub(crate) fn toggle_music(
    toggles: Query<&Interaction, (With<MusicToggle>, Changed<Interaction>)>,
    music: Query<&AudioSink, With<MusicTrack>>,
    mut settings: ResMut<AudioSettings>,
) {
    for interaction in &toggles {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if music.is_empty() {
            // Playback never came up (no device, or the platform refused
            // it); stay muted instead of pretending.
            warn!("Audio output unavailable, staying muted");
            settings.muted = true;
            continue;
        }
        settings.muted = !settings.muted;
        info!("Music {}", if settings.muted { "muted" } else { "unmuted" });
    }
}

pub(crate) fn update_music_label(
    settings: Res<AudioSettings>,
    music: Query<&AudioSink, With<MusicTrack>>,
    mut labels: Query<&mut Text, With<MusicToggleLabel>>,
) {
    let audible = !settings.muted && !music.is_empty();
    for mut text in &mut labels {
        let wanted = if audible { "Sound: on" } else { "Sound: off" };
        if text.0 != wanted {
            text.0 = wanted.to_string();
        }
    }
}
