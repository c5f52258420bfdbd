//! Pickups domain: the carrot and the goal burrow that wants it.

mod components;
mod events;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Carrot, Goal, InGoalZone, LevelProgress};
pub use events::{CarrotGrabbedEvent, LevelCompletedEvent};

use bevy::prelude::*;

use crate::pickups::systems::{check_goal_completion, collect_carrots, track_goal_zone};

pub struct PickupsPlugin;

impl Plugin for PickupsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelProgress>()
            .add_message::<CarrotGrabbedEvent>()
            .add_message::<LevelCompletedEvent>()
            .add_systems(
                Update,
                (collect_carrots, track_goal_zone, check_goal_completion).chain(),
            );
    }
}
