//! UI domain: map markers in the lower section. Clicking one picks the
//! play-area backdrop and sends the character back up through the pipe.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{BackdropSelectedEvent, Backdrop, StageEntity, StageSection};

#[derive(Component)]
pub struct MapPanel;

#[derive(Component, Debug, Clone, Copy)]
pub struct MapMarker(pub Backdrop);

pub(crate) fn spawn_map_panel(mut commands: Commands) {
    commands
        .spawn((
            StageEntity,
            MapPanel,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Where to next?"),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.95)),
            ));
            for backdrop in [Backdrop::Plains, Backdrop::Forest, Backdrop::City] {
                parent
                    .spawn((
                        MapMarker(backdrop),
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(24.0), Val::Px(10.0)),
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(backdrop.clear_color().with_alpha(0.8)),
                        BorderColor::all(Color::srgba(0.9, 0.9, 0.95, 0.5)),
                    ))
                    .with_child((
                        Text::new(backdrop.label()),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.95, 0.95, 1.0)),
                    ));
            }
        });
}

/// The panel only shows while the camera is down in the map room.
pub(crate) fn sync_map_panel_visibility(
    section: Res<StageSection>,
    mut panels: Query<&mut Visibility, With<MapPanel>>,
) {
    if !section.is_changed() {
        return;
    }
    for mut visibility in &mut panels {
        *visibility = if section.current == 1 {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

pub(crate) fn click_map_markers(
    markers: Query<(&MapMarker, &Interaction), Changed<Interaction>>,
    mut selections: MessageWriter<BackdropSelectedEvent>,
) {
    for (marker, interaction) in &markers {
        if *interaction == Interaction::Pressed {
            selections.write(BackdropSelectedEvent {
                backdrop: marker.0,
            });
        }
    }
}
