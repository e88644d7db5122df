//! Interactions domain: scene object components. The set is fixed at
//! stage spawn; nothing here is created or destroyed mid-session.

use bevy::prelude::*;
use serde::Deserialize;

use crate::interactions::geometry::Rect;

/// Scene object footprints in stage units.
pub const BLOCK_SIZE: f32 = 5.0;
pub const COLLECTIBLE_SIZE: f32 = 4.0;
pub const PIPE_WIDTH: f32 = 12.0;
pub const PIPE_HEIGHT: f32 = 14.0;
pub const PORTAL_WIDTH: f32 = 8.0;
pub const PORTAL_HEIGHT: f32 = 12.0;

/// Where an object sits in stage space. Rectangles are derived on demand,
/// never cached.
#[derive(Component, Debug, Clone, Copy)]
pub struct StagePlacement {
    /// Horizontal center.
    pub x: f32,
    /// Bottom edge, up from the ground line.
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl StagePlacement {
    pub fn rect(&self) -> Rect {
        Rect::from_bottom_center(self.x, self.bottom, self.width, self.height)
    }
}

/// Marker for surfaces the platform probe can land on (pipe top, item
/// blocks).
#[derive(Component, Debug)]
pub struct Standable;

#[derive(Component, Debug)]
pub struct ItemBlock {
    pub exhausted: bool,
    /// Collectible id revealed on the first bump, if any.
    pub reveals: Option<String>,
}

impl ItemBlock {
    pub fn new(reveals: Option<String>) -> Self {
        Self {
            exhausted: false,
            reveals,
        }
    }

    /// One-shot: true on the first call only.
    pub fn try_exhaust(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        self.exhausted = true;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CollectibleKind {
    PowerUp,
    Hazard,
}

impl CollectibleKind {
    /// The cosmetic size state this pickup leaves the character in.
    pub fn stature(self) -> crate::movement::Stature {
        match self {
            CollectibleKind::PowerUp => crate::movement::Stature::Grown,
            CollectibleKind::Hazard => crate::movement::Stature::Shrunk,
        }
    }
}

#[derive(Component, Debug)]
pub struct Collectible {
    pub id: String,
    pub kind: CollectibleKind,
    pub revealed: bool,
    pub collected: bool,
}

impl Collectible {
    /// One-shot: true exactly once, and only after the collectible has
    /// been revealed.
    pub fn try_collect(&mut self) -> bool {
        if !self.revealed || self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}

#[derive(Component, Debug)]
pub struct Portal;

#[derive(Component, Debug)]
pub struct Pipe;

/// Short vertical hop a block plays when bumped from below.
#[derive(Component, Debug, Default)]
pub struct BouncePulse {
    pub elapsed: f32,
}
