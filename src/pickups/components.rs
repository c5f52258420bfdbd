//! Pickups domain: pickup components and level progress.

use bevy::prelude::*;

/// Carrot sensor; despawns when the player touches it.
#[derive(Component, Debug)]
pub struct Carrot;

/// Burrow the player must reach while holding a carrot.
#[derive(Component, Debug)]
pub struct Goal;

/// Added to the player while touching the goal sensor.
#[derive(Component, Debug)]
pub struct InGoalZone {
    pub goal_entity: Entity,
}

#[derive(Resource, Debug, Default)]
pub struct LevelProgress {
    pub carrots_collected: u32,
    pub completed: bool,
}

impl LevelProgress {
    /// The goal only accepts a player holding a carrot, and only once.
    pub fn can_complete(&self, has_carrot: bool) -> bool {
        has_carrot && !self.completed
    }
}
