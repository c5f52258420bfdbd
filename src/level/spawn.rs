//! Level domain: spawning platforms, pickups, obstacles and the goal.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{GameContent, LevelDef, ObstacleKind};
use crate::hazards::PushBackZone;
use crate::level::SpawnPoint;
use crate::movement::GameLayer;
use crate::pickups::{Carrot, Goal};

const CARROT_SIZE: Vec2 = Vec2::new(12.0, 24.0);

fn vec2(value: (f32, f32)) -> Vec2 {
    Vec2::new(value.0, value.1)
}

pub(crate) fn spawn_level(mut commands: Commands, content: Option<Res<GameContent>>) {
    let default_level;
    let level = match &content {
        Some(content) => &content.level,
        None => {
            warn!("GameContent not available, spawning default level");
            default_level = LevelDef::default();
            &default_level
        }
    };

    let platform_color = Color::srgb(0.45, 0.6, 0.35);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);

    for platform in &level.platforms {
        let size = vec2(platform.size);
        let position = vec2(platform.position);
        commands.spawn((
            Sprite {
                color: platform_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    let spawn = vec2(level.spawn_point);
    commands.spawn((
        SpawnPoint,
        Sprite {
            color: Color::srgba(0.8, 0.8, 0.9, 0.35),
            custom_size: Some(Vec2::new(28.0, 6.0)),
            ..default()
        },
        Transform::from_xyz(spawn.x, spawn.y, -0.5),
    ));

    if let Some(carrot) = level.carrot {
        let position = vec2(carrot);
        commands.spawn((
            Carrot,
            Sprite {
                color: Color::srgb(0.95, 0.55, 0.15),
                custom_size: Some(CARROT_SIZE),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.5),
            Collider::rectangle(CARROT_SIZE.x, CARROT_SIZE.y),
            Sensor,
            CollisionEventsEnabled,
            sensor_layers,
        ));
    }

    for obstacle in &level.obstacles {
        let size = vec2(obstacle.size);
        let position = vec2(obstacle.position);
        let color = match obstacle.kind {
            ObstacleKind::Paddle => Color::srgb(0.6, 0.35, 0.25),
            ObstacleKind::WindTurbine => Color::srgba(0.7, 0.85, 0.95, 0.6),
        };
        commands.spawn((
            PushBackZone {
                kind: obstacle.kind,
                magnitude: obstacle.magnitude,
                direction: obstacle.direction,
            },
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.2),
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            sensor_layers,
        ));
    }

    if let Some(goal) = &level.goal {
        let size = vec2(goal.size);
        let position = vec2(goal.position);
        commands.spawn((
            Goal,
            Sprite {
                color: Color::srgb(0.35, 0.25, 0.15),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.1),
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            sensor_layers,
        ));
    }

    info!(
        "Spawned level '{}': platforms={}, obstacles={}, carrot={}, goal={}",
        level.name,
        level.platforms.len(),
        level.obstacles.len(),
        level.carrot.is_some(),
        level.goal.is_some()
    );
}
