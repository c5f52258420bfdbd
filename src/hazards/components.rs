//! Hazards domain: obstacle components.

use bevy::prelude::*;

use crate::content::ObstacleKind;
use crate::hazards::PushBackEvent;
use crate::movement::PushDirection;

/// Sensor that shoves the player when they start touching it.
#[derive(Component, Debug, Clone, Copy)]
pub struct PushBackZone {
    pub kind: ObstacleKind,
    pub magnitude: f32,
    pub direction: PushDirection,
}

impl PushBackZone {
    /// The push this zone gives `target`.
    pub fn push_event(&self, source: Entity, target: Entity) -> PushBackEvent {
        PushBackEvent {
            source,
            target,
            magnitude: self.magnitude,
            direction: self.direction,
        }
    }
}
