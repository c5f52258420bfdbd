//! Pickups domain: tests for carrot collection, goal tracking and level progress.

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::systems::{check_goal_completion, collect_carrots, track_goal_zone};
use super::{Carrot, CarrotGrabbedEvent, Goal, InGoalZone, LevelCompletedEvent, LevelProgress};
use crate::core::GameplayPaused;
use crate::movement::{Player, PlayerController};

fn goal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<LevelProgress>()
        .init_resource::<GameplayPaused>()
        .add_message::<LevelCompletedEvent>()
        .add_systems(Update, check_goal_completion);
    app
}

fn spawn_player_in_goal(app: &mut App, has_carrot: bool) -> Entity {
    let mut controller = PlayerController::default();
    if has_carrot {
        controller.grab_carrot();
    }
    let goal = app.world_mut().spawn_empty().id();
    app.world_mut()
        .spawn((Player, controller, InGoalZone { goal_entity: goal }))
        .id()
}

fn completed_event_count(app: &App) -> usize {
    app.world()
        .resource::<Messages<LevelCompletedEvent>>()
        .len()
}

#[test]
fn test_level_progress_can_complete() {
    let mut progress = LevelProgress::default();
    assert!(!progress.can_complete(false));
    assert!(progress.can_complete(true));

    progress.completed = true;
    assert!(!progress.can_complete(true));
}

#[test]
fn test_goal_completes_with_carrot() {
    let mut app = goal_app();
    spawn_player_in_goal(&mut app, true);

    app.update();

    assert!(app.world().resource::<LevelProgress>().completed);
    assert!(app.world().resource::<GameplayPaused>().is_paused());
    assert_eq!(completed_event_count(&app), 1);
}

#[test]
fn test_goal_ignores_player_without_carrot() {
    let mut app = goal_app();
    spawn_player_in_goal(&mut app, false);

    app.update();

    assert!(!app.world().resource::<LevelProgress>().completed);
    assert!(!app.world().resource::<GameplayPaused>().is_paused());
    assert_eq!(completed_event_count(&app), 0);
}

#[test]
fn test_goal_completes_only_once() {
    let mut app = goal_app();
    spawn_player_in_goal(&mut app, true);

    app.update();
    app.update();

    assert!(app.world().resource::<LevelProgress>().completed);
    // Messages live for two updates, so the first completion is still readable
    assert_eq!(completed_event_count(&app), 1);
}

fn contact(collider1: Entity, collider2: Entity) -> CollisionStart {
    CollisionStart {
        collider1,
        collider2,
        body1: Some(collider1),
        body2: Some(collider2),
    }
}

fn contact_end(collider1: Entity, collider2: Entity) -> CollisionEnd {
    CollisionEnd {
        collider1,
        collider2,
        body1: Some(collider1),
        body2: Some(collider2),
    }
}

fn carrot_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<LevelProgress>()
        .add_message::<CollisionStart>()
        .add_message::<CarrotGrabbedEvent>()
        .add_systems(Update, collect_carrots);
    app
}

fn has_carrot(app: &App, player: Entity) -> bool {
    app.world()
        .get::<PlayerController>(player)
        .map(|controller| controller.has_carrot())
        .expect("player controller")
}

#[test]
fn test_touching_carrot_grabs_it() {
    let mut app = carrot_app();
    let player = app
        .world_mut()
        .spawn((Player, PlayerController::default()))
        .id();
    let carrot = app.world_mut().spawn(Carrot).id();

    app.world_mut().write_message(contact(carrot, player));
    app.update();

    assert!(has_carrot(&app, player));
    assert_eq!(app.world().resource::<LevelProgress>().carrots_collected, 1);
    assert!(app.world().get::<Carrot>(carrot).is_none());
    assert_eq!(
        app.world().resource::<Messages<CarrotGrabbedEvent>>().len(),
        1
    );
}

#[test]
fn test_carrot_touched_twice_in_one_frame_counts_once() {
    let mut app = carrot_app();
    let player = app
        .world_mut()
        .spawn((Player, PlayerController::default()))
        .id();
    let carrot = app.world_mut().spawn(Carrot).id();

    // Collider order is not guaranteed
    app.world_mut().write_message(contact(player, carrot));
    app.world_mut().write_message(contact(carrot, player));
    app.update();

    assert!(has_carrot(&app, player));
    assert_eq!(app.world().resource::<LevelProgress>().carrots_collected, 1);
    assert_eq!(
        app.world().resource::<Messages<CarrotGrabbedEvent>>().len(),
        1
    );
}

#[test]
fn test_carrot_ignores_non_player_contacts() {
    let mut app = carrot_app();
    let carrot = app.world_mut().spawn(Carrot).id();
    let platform = app.world_mut().spawn_empty().id();

    app.world_mut().write_message(contact(carrot, platform));
    app.update();

    assert_eq!(app.world().resource::<LevelProgress>().carrots_collected, 0);
    assert!(app.world().get::<Carrot>(carrot).is_some());
}

fn goal_zone_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<CollisionStart>()
        .add_message::<CollisionEnd>()
        .add_systems(Update, track_goal_zone);
    app
}

#[test]
fn test_goal_zone_tracks_enter_and_exit() {
    let mut app = goal_zone_app();
    let player = app
        .world_mut()
        .spawn((Player, PlayerController::default()))
        .id();
    let goal = app.world_mut().spawn(Goal).id();

    app.world_mut().write_message(contact(goal, player));
    app.update();

    assert_eq!(
        app.world().get::<InGoalZone>(player).map(|zone| zone.goal_entity),
        Some(goal)
    );

    app.world_mut().write_message(contact_end(player, goal));
    app.update();

    assert!(app.world().get::<InGoalZone>(player).is_none());
}
