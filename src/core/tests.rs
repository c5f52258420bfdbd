//! Core domain: tests for pause tracking and collision pair helpers.

use bevy::prelude::*;

use super::{GameplayPaused, match_pair};

#[test]
fn test_pause_sources_stack() {
    let mut paused = GameplayPaused::default();
    assert!(!paused.is_paused());

    paused.pause("menu");
    paused.pause("level_complete");
    paused.unpause("menu");

    assert!(paused.is_paused());

    paused.unpause("level_complete");
    assert!(!paused.is_paused());
}

#[test]
fn test_pause_toggle() {
    let mut paused = GameplayPaused::default();

    assert!(paused.toggle("menu"));
    assert!(paused.is_paused());
    assert!(!paused.toggle("menu"));
    assert!(!paused.is_paused());
}

#[test]
fn test_match_pair_orders_matching_entity_first() {
    let mut world = World::new();
    let zone = world.spawn_empty().id();
    let player = world.spawn_empty().id();

    assert_eq!(match_pair(zone, player, |e| e == zone), Some((zone, player)));
    assert_eq!(match_pair(player, zone, |e| e == zone), Some((zone, player)));
}

#[test]
fn test_match_pair_without_match() {
    let mut world = World::new();
    let a = world.spawn_empty().id();
    let b = world.spawn_empty().id();

    assert_eq!(match_pair(a, b, |_| false), None);
}
