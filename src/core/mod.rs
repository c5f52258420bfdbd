//! Core domain: camera, pause state, and shared helpers.

mod contacts;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use contacts::match_pair;
pub use resources::{GameplayPaused, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{setup_camera, sync_physics_pause, toggle_pause};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .insert_resource(ClearColor(Color::srgb(0.55, 0.75, 0.9)))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (toggle_pause, sync_physics_pause).chain());
    }
}
