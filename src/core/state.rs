//! Core domain: session states and backdrop variants.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    /// Start overlay is up; the stage is not simulated yet.
    Title,
    Playing,
    /// Screen the portal warps to. Replaying from here re-enters Boot,
    /// which skips the start overlay for the rest of the session.
    Gallery,
}

/// Backdrop themes selectable from the map markers in the lower section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backdrop {
    #[default]
    Plains,
    Forest,
    City,
}

impl Backdrop {
    pub fn clear_color(&self) -> Color {
        match self {
            Backdrop::Plains => Color::srgb(0.38, 0.58, 0.92),
            Backdrop::Forest => Color::srgb(0.16, 0.35, 0.22),
            Backdrop::City => Color::srgb(0.15, 0.16, 0.26),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Backdrop::Plains => "Plains",
            Backdrop::Forest => "Forest",
            Backdrop::City => "City",
        }
    }
}
