//! Core domain: shared markers.

use bevy::prelude::*;

/// Marker for every entity that belongs to the play session (scene
/// objects, the character, gameplay UI). All of it is despawned when the
/// portal ends the session.
#[derive(Component, Debug)]
pub struct StageEntity;
