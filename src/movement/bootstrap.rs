//! Movement domain: player bootstrap from loaded content.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::GameContent;
use crate::level::SpawnPoint;
use crate::movement::{
    GameLayer, GroundContact, MovementTuning, Player, PlayerController, PlayerSprite,
    spawn_position,
};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 40.0);

/// Copy tuning from the content files into the movement resource and the
/// physics world.
pub(crate) fn apply_content_tuning(
    content: Option<Res<GameContent>>,
    mut tuning: ResMut<MovementTuning>,
    mut gravity: ResMut<Gravity>,
) {
    match content {
        Some(content) => {
            *tuning = MovementTuning::from(&content.player);
        }
        None => {
            warn!("GameContent not available, using default movement tuning");
        }
    }

    gravity.0 = Vec2::NEG_Y * tuning.gravity;

    info!(
        "Movement tuning: speed={}, jump={}, dash_distance={}, dash_cooldown={}",
        tuning.movement_speed, tuning.jump_speed, tuning.dash_distance, tuning.dash_cooldown
    );
}

/// Spawn the player above the level's spawn point.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    spawn_points: Query<&Transform, With<SpawnPoint>>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let spawn_point = match spawn_points.iter().next() {
        Some(transform) => transform.translation.truncate(),
        None => {
            warn!("No spawn point in level, spawning player at origin");
            Vec2::ZERO
        }
    };

    let position = spawn_position(spawn_point, tuning.spawn_height_offset);

    info!(
        "Spawning player at ({:.1}, {:.1})",
        position.x, position.y
    );

    commands
        .spawn((
            // Identity & Movement
            (
                Player,
                PlayerController::default(),
                GroundContact::default(),
            ),
            Transform::from_xyz(position.x, position.y, 1.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                LinearDamping(tuning.linear_damping),
                // Impulses are scaled by the tuning mass, so the body must agree
                Mass(tuning.mass),
                NoAutoMass,
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
            ),
        ))
        .with_children(|parent| {
            // Rendering lives on a child so yaw never reaches the rigid body
            parent
                .spawn((
                    PlayerSprite,
                    Sprite {
                        color: Color::srgb(0.92, 0.92, 0.88),
                        custom_size: Some(PLAYER_SIZE),
                        ..default()
                    },
                    Transform::default(),
                ))
                .with_children(|sprite| {
                    // Ear sits off-center so a flipped sprite reads as facing left
                    sprite.spawn((
                        Sprite {
                            color: Color::srgb(0.95, 0.75, 0.8),
                            custom_size: Some(Vec2::new(6.0, 14.0)),
                            ..default()
                        },
                        Transform::from_xyz(6.0, PLAYER_SIZE.y * 0.5 + 7.0, 0.1),
                    ));
                });
        });
}
