//! Pickups domain: carrot collection and goal tracking.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{GameplayPaused, match_pair};
use crate::movement::{Player, PlayerController};
use crate::pickups::{
    Carrot, CarrotGrabbedEvent, Goal, InGoalZone, LevelCompletedEvent, LevelProgress,
};

pub(crate) const PAUSE_SOURCE_LEVEL_COMPLETE: &str = "level_complete";

/// Hand carrots to the player on contact and remove them from the level.
pub(crate) fn collect_carrots(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut grabbed_events: MessageWriter<CarrotGrabbedEvent>,
    mut progress: ResMut<LevelProgress>,
    carrot_query: Query<(), With<Carrot>>,
    mut player_query: Query<&mut PlayerController, With<Player>>,
) {
    let mut collected: Vec<Entity> = Vec::new();

    for event in collision_events.read() {
        let Some((carrot, other)) = match_pair(event.collider1, event.collider2, |e| {
            carrot_query.contains(e)
        }) else {
            continue;
        };

        if collected.contains(&carrot) {
            continue;
        }

        let Ok(mut controller) = player_query.get_mut(other) else {
            continue;
        };

        controller.grab_carrot();
        progress.carrots_collected += 1;
        collected.push(carrot);

        grabbed_events.write(CarrotGrabbedEvent {
            player: other,
            carrot,
        });
        commands.entity(carrot).try_despawn();

        info!(
            "Carrot grabbed: carrots_collected={}",
            progress.carrots_collected
        );
    }
}

/// Adds InGoalZone to the player while touching the goal sensor.
pub(crate) fn track_goal_zone(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    goal_query: Query<(), With<Goal>>,
    player_query: Query<(&PlayerController, Option<&InGoalZone>), With<Player>>,
) {
    for event in collision_start_events.read() {
        let Some((goal_entity, other)) = match_pair(event.collider1, event.collider2, |e| {
            goal_query.contains(e)
        }) else {
            continue;
        };

        let Ok((controller, _)) = player_query.get(other) else {
            continue;
        };

        if !controller.has_carrot() {
            info!("Reached the burrow without a carrot");
        }

        commands.entity(other).insert(InGoalZone { goal_entity });
    }

    for event in collision_end_events.read() {
        let Some((goal_entity, other)) = match_pair(event.collider1, event.collider2, |e| {
            goal_query.contains(e)
        }) else {
            continue;
        };

        let Ok((_, Some(zone))) = player_query.get(other) else {
            continue;
        };

        if zone.goal_entity == goal_entity {
            commands.entity(other).remove::<InGoalZone>();
        }
    }
}

/// Completes the level when a carrot-holding player stands in the goal.
pub(crate) fn check_goal_completion(
    mut completed_events: MessageWriter<LevelCompletedEvent>,
    mut progress: ResMut<LevelProgress>,
    mut paused: ResMut<GameplayPaused>,
    player_query: Query<(Entity, &PlayerController), (With<Player>, With<InGoalZone>)>,
) {
    for (player, controller) in &player_query {
        if !progress.can_complete(controller.has_carrot()) {
            continue;
        }

        progress.completed = true;
        paused.pause(PAUSE_SOURCE_LEVEL_COMPLETE);
        completed_events.write(LevelCompletedEvent { player });

        info!("Level complete!");
    }
}
