//! Hazards domain: obstacles that push the player back on contact.

mod components;
mod events;
mod systems;
#[cfg(test)]
mod tests;

pub use components::PushBackZone;
pub use events::PushBackEvent;

use bevy::prelude::*;

use crate::hazards::systems::detect_push_back_contacts;

pub struct HazardsPlugin;

impl Plugin for HazardsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PushBackEvent>().add_systems(
            Update,
            detect_push_back_contacts.before(crate::movement::receive_push_back),
        );
    }
}
