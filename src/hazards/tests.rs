//! Hazards domain: tests for push-back zones and their delivery to the player.

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::systems::detect_push_back_contacts;
use super::{PushBackEvent, PushBackZone};
use crate::content::ObstacleKind;
use crate::movement::{Player, PlayerController, PushDirection, receive_push_back};

fn push_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<PushBackEvent>()
        .add_systems(Update, receive_push_back);
    app
}

#[test]
fn test_zone_builds_push_event() {
    let zone = PushBackZone {
        kind: ObstacleKind::Paddle,
        magnitude: 250.0,
        direction: PushDirection::Right,
    };
    let mut world = World::new();
    let source = world.spawn_empty().id();
    let target = world.spawn_empty().id();

    let event = zone.push_event(source, target);

    assert_eq!(event.source, source);
    assert_eq!(event.target, target);
    assert_eq!(event.magnitude, 250.0);
    assert_eq!(event.direction, PushDirection::Right);
}

#[test]
fn test_push_event_queues_force_on_player() {
    let mut app = push_app();
    let player = app
        .world_mut()
        .spawn((Player, PlayerController::default()))
        .id();
    let zone = app.world_mut().spawn_empty().id();

    app.world_mut().write_message(PushBackEvent {
        source: zone,
        target: player,
        magnitude: 400.0,
        direction: PushDirection::Up,
    });
    app.update();

    let controller = app
        .world()
        .get::<PlayerController>(player)
        .expect("player controller");
    assert_eq!(controller.pending_force(), Vec2::new(0.0, 400.0));
}

#[test]
fn test_push_event_for_non_player_is_ignored() {
    let mut app = push_app();
    let player = app
        .world_mut()
        .spawn((Player, PlayerController::default()))
        .id();
    let bystander = app.world_mut().spawn(PlayerController::default()).id();

    app.world_mut().write_message(PushBackEvent {
        source: player,
        target: bystander,
        magnitude: 400.0,
        direction: PushDirection::Left,
    });
    app.update();

    let world = app.world();
    assert_eq!(
        world.get::<PlayerController>(bystander).map(|c| c.pending_force()),
        Some(Vec2::ZERO)
    );
    assert_eq!(
        world.get::<PlayerController>(player).map(|c| c.pending_force()),
        Some(Vec2::ZERO)
    );
}

fn contact_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<CollisionStart>()
        .add_message::<PushBackEvent>()
        .add_systems(Update, detect_push_back_contacts);
    app
}

fn contact(collider1: Entity, collider2: Entity) -> CollisionStart {
    CollisionStart {
        collider1,
        collider2,
        body1: Some(collider1),
        body2: Some(collider2),
    }
}

fn turbine() -> PushBackZone {
    PushBackZone {
        kind: ObstacleKind::WindTurbine,
        magnitude: 45000.0,
        direction: PushDirection::Up,
    }
}

#[test]
fn test_zone_contact_with_player_writes_push_event() {
    let mut app = contact_app();
    let player = app.world_mut().spawn(Player).id();
    let zone = app.world_mut().spawn(turbine()).id();

    app.world_mut().write_message(contact(player, zone));
    app.update();

    let messages = app.world().resource::<Messages<PushBackEvent>>();
    let mut cursor = messages.get_cursor();
    let events: Vec<&PushBackEvent> = cursor.read(messages).collect();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].source, zone);
    assert_eq!(events[0].target, player);
    assert_eq!(events[0].magnitude, 45000.0);
    assert_eq!(events[0].direction, PushDirection::Up);
}

#[test]
fn test_zone_contact_with_non_player_is_ignored() {
    let mut app = contact_app();
    let zone = app.world_mut().spawn(turbine()).id();
    let carrot = app.world_mut().spawn_empty().id();
    let other_zone = app.world_mut().spawn(turbine()).id();

    app.world_mut().write_message(contact(zone, carrot));
    app.world_mut().write_message(contact(zone, other_zone));
    app.update();

    assert_eq!(app.world().resource::<Messages<PushBackEvent>>().len(), 0);
}
