//! Movement domain: folds every input source into the shared
//! directional record.

use bevy::prelude::*;

use crate::movement::resources::{
    DirectionalInput, SWIPE_DOWN_PULSE_SECS, SWIPE_HORIZONTAL_THRESHOLD, SWIPE_UP_PULSE_SECS,
    SWIPE_VERTICAL_THRESHOLD,
};
use crate::ui::{ControlButton, ControlDir};

/// Vertical swipe direction, if the displacement crossed the threshold.
/// Screen y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VerticalSwipe {
    Up,
    Down,
}

pub(crate) fn vertical_swipe(delta_y: f32) -> Option<VerticalSwipe> {
    if delta_y <= -SWIPE_VERTICAL_THRESHOLD {
        Some(VerticalSwipe::Up)
    } else if delta_y >= SWIPE_VERTICAL_THRESHOLD {
        Some(VerticalSwipe::Down)
    } else {
        None
    }
}

/// One pulse per gesture: true only the first time a touch id is seen.
pub(crate) fn latch_swipe(fired: &mut Vec<u64>, id: u64) -> bool {
    if fired.contains(&id) {
        return false;
    }
    fired.push(id);
    true
}

/// Rebuilds the directional state each frame from keyboard arrows, the
/// on-screen buttons, and live swipe gestures. Sources that are absent
/// this frame simply contribute nothing.
pub(crate) fn collect_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    buttons: Query<(&ControlButton, &Interaction)>,
    mut input: ResMut<DirectionalInput>,
    mut pulsed: Local<Vec<u64>>,
) {
    let dt = time.delta_secs();
    input.up_pulse = (input.up_pulse - dt).max(0.0);
    input.down_pulse = (input.down_pulse - dt).max(0.0);

    let mut up = keyboard.pressed(KeyCode::ArrowUp);
    let mut down = keyboard.pressed(KeyCode::ArrowDown);
    let mut left = keyboard.pressed(KeyCode::ArrowLeft);
    let mut right = keyboard.pressed(KeyCode::ArrowRight);

    for (button, interaction) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button.0 {
            ControlDir::Up => up = true,
            ControlDir::Down => down = true,
            ControlDir::Left => left = true,
            ControlDir::Right => right = true,
        }
    }

    // Swipe recognition: horizontal displacement holds a direction for
    // the life of the gesture; vertical displacement fires one fixed
    // pulse per gesture, latched by touch id.
    pulsed.retain(|id| touches.get_pressed(*id).is_some());
    for touch in touches.iter() {
        let delta = touch.position() - touch.start_position();
        if delta.x <= -SWIPE_HORIZONTAL_THRESHOLD {
            left = true;
        }
        if delta.x >= SWIPE_HORIZONTAL_THRESHOLD {
            right = true;
        }
        if let Some(swipe) = vertical_swipe(delta.y) {
            if latch_swipe(&mut pulsed, touch.id()) {
                match swipe {
                    VerticalSwipe::Up => input.up_pulse = SWIPE_UP_PULSE_SECS,
                    VerticalSwipe::Down => input.down_pulse = SWIPE_DOWN_PULSE_SECS,
                }
            }
        }
    }

    input.up = up;
    input.down = down;
    input.left = left;
    input.right = right;
}
