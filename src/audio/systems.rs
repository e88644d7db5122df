//! Audio domain: playback systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::audio::synth;
use crate::audio::{AudioSettings, CueBank, CueEvent, MusicTrack};

/// Four-bar background loop, a simple square-wave arpeggio.
const MELODY: [(f32, f32); 16] = [
    (262.0, 0.22),
    (330.0, 0.22),
    (392.0, 0.22),
    (523.0, 0.22),
    (392.0, 0.22),
    (330.0, 0.22),
    (262.0, 0.44),
    (0.0, 0.22),
    (294.0, 0.22),
    (370.0, 0.22),
    (440.0, 0.22),
    (587.0, 0.22),
    (440.0, 0.22),
    (370.0, 0.22),
    (294.0, 0.44),
    (0.0, 0.22),
];

pub(crate) fn setup_audio(mut commands: Commands, mut sources: ResMut<Assets<AudioSource>>) {
    let bank = CueBank {
        bump: sources.add(AudioSource {
            bytes: synth::tone_sweep(180.0, 90.0, 0.1, 0.5).into(),
        }),
        pickup: sources.add(AudioSource {
            bytes: synth::tone_sweep(660.0, 330.0, 0.15, 0.4).into(),
        }),
        power_up: sources.add(AudioSource {
            bytes: synth::tone_sweep(440.0, 1760.0, 0.3, 0.4).into(),
        }),
        warp: sources.add(AudioSource {
            bytes: synth::tone_sweep(1200.0, 200.0, 0.5, 0.4).into(),
        }),
    };
    commands.insert_resource(bank);

    let music = sources.add(AudioSource {
        bytes: synth::square_melody(&MELODY, 0.18).into(),
    });
    commands.spawn((MusicTrack, AudioPlayer(music), PlaybackSettings::LOOP));
    info!("Synthesized audio bank ready");
}

pub(crate) fn play_cues(
    mut commands: Commands,
    mut events: MessageReader<CueEvent>,
    bank: Option<Res<CueBank>>,
    settings: Res<AudioSettings>,
) {
    let Some(bank) = bank else {
        events.clear();
        return;
    };
    for event in events.read() {
        if settings.muted {
            continue;
        }
        // Slight pitch jitter so repeated cues do not sound stamped out.
        let speed = 0.96 + rand::rng().random::<f32>() * 0.08;
        commands.spawn((
            AudioPlayer(bank.handle(event.cue)),
            PlaybackSettings::DESPAWN.with_speed(speed),
        ));
    }
}

pub(crate) fn apply_music_mute(
    settings: Res<AudioSettings>,
    music: Query<&AudioSink, With<MusicTrack>>,
) {
    if !settings.is_changed() {
        return;
    }
    for sink in &music {
        if settings.muted {
            sink.pause();
        } else {
            sink.play();
        }
    }
}
