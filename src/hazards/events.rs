//! Hazards domain: push-back events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::PushDirection;

/// Fired when an obstacle pushes an entity
#[derive(Debug, Clone)]
pub struct PushBackEvent {
    pub source: Entity,
    pub target: Entity,
    pub magnitude: f32,
    pub direction: PushDirection,
}

impl Message for PushBackEvent {}
