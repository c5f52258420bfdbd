//! Hazards domain: contact detection for push-back zones.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::match_pair;
use crate::hazards::{PushBackEvent, PushBackZone};
use crate::movement::Player;

pub(crate) fn detect_push_back_contacts(
    mut collision_events: MessageReader<CollisionStart>,
    mut push_events: MessageWriter<PushBackEvent>,
    zone_query: Query<&PushBackZone>,
    player_query: Query<(), With<Player>>,
) {
    for event in collision_events.read() {
        let Some((zone_entity, other)) = match_pair(event.collider1, event.collider2, |e| {
            zone_query.contains(e)
        }) else {
            continue;
        };

        if !player_query.contains(other) {
            continue;
        }

        let Ok(zone) = zone_query.get(zone_entity) else {
            continue;
        };

        debug!(
            "{:?} pushed player: magnitude={}, direction={:?}",
            zone.kind, zone.magnitude, zone.direction
        );

        push_events.write(zone.push_event(zone_entity, other));
    }
}
