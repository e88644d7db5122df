//! Movement domain: system modules for the per-frame step.

pub(crate) mod input;
pub mod physics;
pub mod presentation;

pub(crate) use input::collect_input;
pub(crate) use physics::step_character;
pub(crate) use presentation::sync_presentation;
