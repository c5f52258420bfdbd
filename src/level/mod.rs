//! Level domain: static layout built from the loaded level definition.

mod spawn;

pub(crate) use spawn::spawn_level;

use bevy::prelude::*;

/// Where the player appears at startup.
#[derive(Component, Debug)]
pub struct SpawnPoint;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level);
    }
}
