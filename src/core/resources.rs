//! Core domain: session-scoped resources.

use bevy::prelude::*;

use crate::core::state::Backdrop;

/// World-space distance between the two stage sections the camera can
/// scroll between.
pub const SECTION_PIXELS: f32 = 800.0;

/// Flags that live for the process lifetime. Nothing here survives a
/// restart.
#[derive(Resource, Debug, Default)]
pub struct SessionFlags {
    /// Set the first time the start overlay is dismissed; a later pass
    /// through Boot skips straight to Playing.
    pub intro_dismissed: bool,
}

/// Which vertical section of the stage the camera should be showing:
/// 0 = the play area, 1 = the map room the pipe travels down to.
#[derive(Resource, Debug, Default)]
pub struct StageSection {
    pub current: u32,
    /// Backdrop applied to the play area, chosen by the last map marker
    /// clicked.
    pub backdrop: Backdrop,
}

impl StageSection {
    pub fn target_camera_y(&self) -> f32 {
        -(self.current as f32) * SECTION_PIXELS
    }
}
