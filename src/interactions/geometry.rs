//! Interactions domain: axis-aligned overlap tests in stage units.

use crate::movement::components::Kinematics;

/// Axis-aligned rectangle in stage units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl Rect {
    pub fn from_bottom_center(center_x: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            left: center_x - width / 2.0,
            bottom,
            right: center_x + width / 2.0,
            top: bottom + height,
        }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.bottom < other.top
            && self.top > other.bottom
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.bottom + self.top) / 2.0
    }
}

/// Which side of an object the character is contacting. The axis with
/// the smaller penetration depth decides; the sign of the center offset
/// on that axis picks top versus bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSide {
    /// Character above the object (a landing).
    Top,
    /// Character's head hitting the underside.
    Bottom,
    Side,
}

pub fn classify_contact(character: &Rect, object: &Rect) -> Option<ContactSide> {
    let depth_x = character.right.min(object.right) - character.left.max(object.left);
    let depth_y = character.top.min(object.top) - character.bottom.max(object.bottom);
    if depth_x <= 0.0 || depth_y <= 0.0 {
        return None;
    }
    if depth_x < depth_y {
        Some(ContactSide::Side)
    } else if character.center_y() >= object.center_y() {
        Some(ContactSide::Top)
    } else {
        Some(ContactSide::Bottom)
    }
}

/// Fraction of the visual width removed from the hit-box (split across
/// both sides) to compensate for sprite whitespace.
const HITBOX_SHRINK_X: f32 = 0.4;
/// Fraction of the visual height removed, biased toward the top.
const HITBOX_SHRINK_TOP: f32 = 0.15;
const HITBOX_SHRINK_BOTTOM: f32 = 0.05;

/// The character's visual rectangle at its current position and stature.
pub fn character_rect(kin: &Kinematics) -> Rect {
    Rect::from_bottom_center(kin.x, kin.y, kin.half_width() * 2.0, kin.height())
}

/// Shrinks a visual rectangle down to the collision box.
pub fn character_hitbox(visual: &Rect) -> Rect {
    let width = visual.right - visual.left;
    let height = visual.top - visual.bottom;
    Rect {
        left: visual.left + width * HITBOX_SHRINK_X / 2.0,
        right: visual.right - width * HITBOX_SHRINK_X / 2.0,
        bottom: visual.bottom + height * HITBOX_SHRINK_BOTTOM,
        top: visual.top - height * HITBOX_SHRINK_TOP,
    }
}
