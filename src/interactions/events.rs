//! Interactions domain: events emitted by the per-tick checks.

use bevy::ecs::message::Message;
use bevy::prelude::Entity;

use crate::interactions::components::CollectibleKind;

#[derive(Debug)]
pub struct BlockBumpedEvent {
    pub block: Entity,
}

impl Message for BlockBumpedEvent {}

#[derive(Debug)]
pub struct CollectedEvent {
    pub kind: CollectibleKind,
}

impl Message for CollectedEvent {}

/// The portal warp began; navigation follows after the staged delay.
#[derive(Debug)]
pub struct WarpStartedEvent;

impl Message for WarpStartedEvent {}

#[derive(Debug)]
pub struct PipeEnteredEvent;

impl Message for PipeEnteredEvent {}

/// The downward pipe ride finished and the camera is headed to the map
/// room.
#[derive(Debug)]
pub struct PipeTravelCompletedEvent;

impl Message for PipeTravelCompletedEvent {}
