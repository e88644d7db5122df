//! Debug domain: dev-tools overlay with live character state.

use bevy::prelude::*;

use crate::core::StageSection;
use crate::movement::{Kinematics, Player, StageTuning};

#[derive(Resource, Debug, Default)]
struct DebugVisible(bool);

#[derive(Component)]
struct DebugOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugVisible>()
            .add_systems(Startup, spawn_debug_overlay)
            .add_systems(Update, (toggle_debug_overlay, update_debug_overlay));
    }
}

fn spawn_debug_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlay,
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(16.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        Visibility::Hidden,
        ZIndex(500),
    ));
}

fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut visible: ResMut<DebugVisible>,
    mut overlays: Query<&mut Visibility, With<DebugOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }
    visible.0 = !visible.0;
    for mut visibility in &mut overlays {
        *visibility = if visible.0 {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

fn update_debug_overlay(
    visible: Res<DebugVisible>,
    section: Res<StageSection>,
    tuning: Option<Res<StageTuning>>,
    players: Query<&Kinematics, With<Player>>,
    mut overlays: Query<&mut Text, With<DebugOverlay>>,
) {
    if !visible.0 {
        return;
    }
    let Ok(mut text) = overlays.single_mut() else {
        return;
    };
    let Ok(kin) = players.single() else {
        text.0 = "no character".to_string();
        return;
    };

    let mut out = format!(
        "x {:6.2}  y {:6.2}  vel_y {:6.3}\nphase {:?}\nstature {:?}  facing {:?}  crouch {}\nsection {}  backdrop {}",
        kin.x,
        kin.y,
        kin.vel_y,
        kin.phase,
        kin.stature,
        kin.facing,
        kin.crouching,
        section.current,
        section.backdrop.label(),
    );
    if let Some(tuning) = tuning {
        out.push_str(&format!(
            "\ngravity {}  jump {}  plat_tol {}  pipe_tol {}",
            tuning.gravity,
            tuning.jump_force,
            tuning.platform_tolerance,
            tuning.pipe_alignment_tolerance
        ));
    }
    text.0 = out;
}
