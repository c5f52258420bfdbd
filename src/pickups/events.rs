//! Pickups domain: carrot and goal events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired when the player picks up a carrot
#[derive(Debug)]
pub struct CarrotGrabbedEvent {
    pub player: Entity,
    pub carrot: Entity,
}

impl Message for CarrotGrabbedEvent {}

/// Fired once when the player brings a carrot to the goal
#[derive(Debug)]
pub struct LevelCompletedEvent {
    pub player: Entity,
}

impl Message for LevelCompletedEvent {}
