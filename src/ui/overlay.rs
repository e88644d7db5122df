//! UI domain: the start overlay. The simulation stays gated off until
//! the first interaction dismisses it.

use bevy::prelude::*;

use crate::core::{GameState, SessionFlags};

#[derive(Component)]
pub struct StartOverlay;

pub(crate) fn spawn_overlay(mut commands: Commands) {
    commands
        .spawn((
            StartOverlay,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.06, 0.92)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PIPEWORLD"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.4)),
            ));
            parent.spawn((
                Text::new("press any key, click, or tap to start"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
            ));
        });
}

pub(crate) fn dismiss_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut session: ResMut<SessionFlags>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let interacted = keyboard.get_just_pressed().next().is_some()
        || mouse.just_pressed(MouseButton::Left)
        || touches.any_just_pressed();
    if !interacted {
        return;
    }

    info!("Start overlay dismissed");
    session.intro_dismissed = true;
    next_state.set(GameState::Playing);
}

pub(crate) fn despawn_overlay(
    mut commands: Commands,
    overlays: Query<Entity, With<StartOverlay>>,
) {
    for entity in &overlays {
        commands.entity(entity).despawn();
    }
}
