//! Core domain: session-level events.

use bevy::ecs::message::Message;

use crate::core::state::Backdrop;

/// Fired when a map marker in the lower section is clicked. Applies the
/// backdrop, scrolls back to the play area, and sends the character up
/// through the pipe.
#[derive(Debug)]
pub struct BackdropSelectedEvent {
    pub backdrop: Backdrop,
}

impl Message for BackdropSelectedEvent {}
