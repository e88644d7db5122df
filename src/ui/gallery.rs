//! UI domain: the screen the portal warps to, with a replay button that
//! reboots the session.

use bevy::prelude::*;

use crate::core::{GameState, StageSection};

#[derive(Component)]
pub struct GalleryScreen;

#[derive(Component)]
pub struct ReplayButton;

pub(crate) fn spawn_gallery(mut commands: Commands, mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = Color::srgb(0.05, 0.05, 0.08);
    commands
        .spawn((
            GalleryScreen,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(10.0),
                ..default()
            },
            ZIndex(50),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GALLERY"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.8, 0.95)),
            ));
            parent.spawn((
                Text::new("The portal dropped you off here. Thanks for playing."),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.68)),
            ));
            parent
                .spawn((
                    ReplayButton,
                    Button,
                    Node {
                        margin: UiRect::top(Val::Px(16.0)),
                        padding: UiRect::axes(Val::Px(24.0), Val::Px(10.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.2, 0.2, 0.3, 0.8)),
                    BorderColor::all(Color::srgba(0.9, 0.9, 0.95, 0.5)),
                ))
                .with_child((
                    Text::new("Play again"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.95, 0.95, 1.0)),
                ));
        });
}

/// Replay re-enters Boot; the session flag set on the first dismissal
/// skips the start overlay and drops straight back into play.
pub(crate) fn click_replay(
    buttons: Query<&Interaction, (With<ReplayButton>, Changed<Interaction>)>,
    mut section: ResMut<StageSection>,
    mut clear_color: ResMut<ClearColor>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for interaction in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        info!("Replay requested, rebooting the session");
        section.current = 0;
        clear_color.0 = section.backdrop.clear_color();
        next_state.set(GameState::Boot);
    }
}

pub(crate) fn despawn_gallery(
    mut commands: Commands,
    screens: Query<Entity, With<GalleryScreen>>,
) {
    for entity in &screens {
        commands.entity(entity).despawn();
    }
}
