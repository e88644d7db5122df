//! Core domain: boot flow, camera, and session teardown.

use bevy::prelude::*;

use crate::core::components::StageEntity;
use crate::core::resources::{SessionFlags, StageSection};
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Where Boot resolves to: the overlay on a fresh session, straight back
/// into play when it was already dismissed (a gallery replay re-enters
/// Boot with the flag set).
pub(crate) fn boot_target(session: &SessionFlags) -> GameState {
    if session.intro_dismissed {
        GameState::Playing
    } else {
        GameState::Title
    }
}

/// Leaves Boot once the first update runs.
pub(crate) fn finish_boot(
    session: Res<SessionFlags>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let target = boot_target(&session);
    if target == GameState::Playing {
        info!("Start overlay already dismissed this session, resuming play");
    }
    next_state.set(target);
}

/// Eases the camera toward the current section.
pub(crate) fn scroll_camera(
    time: Res<Time>,
    section: Res<StageSection>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let target = section.target_camera_y();
    let blend = (6.0 * time.delta_secs()).min(1.0);

    for mut transform in &mut cameras {
        let dy = target - transform.translation.y;
        if dy.abs() < 0.5 {
            transform.translation.y = target;
        } else {
            transform.translation.y += dy * blend;
        }
    }
}

pub(crate) fn despawn_stage(mut commands: Commands, stage: Query<Entity, With<StageEntity>>) {
    for entity in &stage {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_resumes_play_once_the_overlay_was_dismissed() {
        assert_eq!(boot_target(&SessionFlags::default()), GameState::Title);

        let dismissed = SessionFlags {
            intro_dismissed: true,
        };
        assert_eq!(boot_target(&dismissed), GameState::Playing);
    }
}
