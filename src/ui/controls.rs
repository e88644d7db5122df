//! UI domain: fixed-position on-screen direction buttons. The input
//! collector reads their Interaction state directly every frame.

use bevy::prelude::*;

use crate::core::StageEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlDir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ControlButton(pub ControlDir);

const BUTTON_SIZE: f32 = 64.0;
const BUTTON_PAD: f32 = 18.0;

pub(crate) fn spawn_controls(mut commands: Commands) {
    // Movement pair, bottom-left.
    spawn_button(&mut commands, ControlDir::Left, "<", BUTTON_PAD, BUTTON_PAD);
    spawn_button(
        &mut commands,
        ControlDir::Right,
        ">",
        BUTTON_PAD + BUTTON_SIZE + 10.0,
        BUTTON_PAD,
    );
    // Jump and crouch, bottom-right (spawned right-anchored below).
    spawn_action_button(
        &mut commands,
        ControlDir::Up,
        "A",
        BUTTON_PAD + BUTTON_SIZE + 10.0,
    );
    spawn_action_button(&mut commands, ControlDir::Down, "v", BUTTON_PAD);
}

fn button_bundle(left: Option<f32>, right: Option<f32>, bottom: f32) -> (Button, Node, BackgroundColor, BorderColor) {
    (
        Button,
        Node {
            position_type: PositionType::Absolute,
            left: left.map_or(Val::Auto, Val::Px),
            right: right.map_or(Val::Auto, Val::Px),
            bottom: Val::Px(bottom),
            width: Val::Px(BUTTON_SIZE),
            height: Val::Px(BUTTON_SIZE),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.55)),
        BorderColor::all(Color::srgba(0.8, 0.8, 0.85, 0.4)),
    )
}

fn spawn_button(commands: &mut Commands, dir: ControlDir, label: &str, left: f32, bottom: f32) {
    commands
        .spawn((
            StageEntity,
            ControlButton(dir),
            button_bundle(Some(left), None, bottom),
        ))
        .with_child((
            Text::new(label),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.95)),
        ));
}

fn spawn_action_button(commands: &mut Commands, dir: ControlDir, label: &str, right: f32) {
    commands
        .spawn((
            StageEntity,
            ControlButton(dir),
            button_bundle(None, Some(right), BUTTON_PAD),
        ))
        .with_child((
            Text::new(label),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.95)),
        ));
}
