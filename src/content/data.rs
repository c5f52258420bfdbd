//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. Positions and sizes are `(x, y)` tuples in world
//! units (pixels).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::PushDirection;

// ============================================================================
// Player tuning (player_tuning.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct PlayerTuningDef {
    pub schema_version: u32,
    pub movement_speed: f32,
    pub jump_speed: f32,
    pub dash_distance: f32,
    pub dash_cooldown: f32,
    pub ground_probe_distance: f32,
    pub spawn_height_offset: f32,
    pub linear_damping: f32,
    pub mass: f32,
    pub gravity: f32,
}

impl Default for PlayerTuningDef {
    fn default() -> Self {
        Self {
            schema_version: 1,
            movement_speed: 6.0,
            jump_speed: 700.0,
            dash_distance: 80.0,
            dash_cooldown: 0.5,
            ground_probe_distance: 4.0,
            spawn_height_offset: 32.0,
            linear_damping: 1.0,
            mass: 1.0,
            gravity: 1200.0,
        }
    }
}

// ============================================================================
// Level layout (level.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct LevelDef {
    pub schema_version: u32,
    pub id: String,
    pub name: String,
    pub spawn_point: (f32, f32),
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub carrot: Option<(f32, f32)>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleDef>,
    #[serde(default)]
    pub goal: Option<GoalDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct PlatformDef {
    pub position: (f32, f32),
    pub size: (f32, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub enum ObstacleKind {
    /// Swinging paddle that knocks the player sideways
    Paddle,
    /// Wind turbine that blows the player upward or away
    WindTurbine,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ObstacleDef {
    pub kind: ObstacleKind,
    pub position: (f32, f32),
    pub size: (f32, f32),
    /// Force applied for one physics step on contact
    pub magnitude: f32,
    pub direction: PushDirection,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct GoalDef {
    pub position: (f32, f32),
    pub size: (f32, f32),
}

impl Default for LevelDef {
    fn default() -> Self {
        Self {
            schema_version: 1,
            id: "level_meadow".to_string(),
            name: "Meadow".to_string(),
            spawn_point: (-320.0, -180.0),
            platforms: vec![
                // Ground
                PlatformDef {
                    position: (0.0, -200.0),
                    size: (900.0, 40.0),
                },
                PlatformDef {
                    position: (-200.0, -90.0),
                    size: (160.0, 20.0),
                },
                PlatformDef {
                    position: (40.0, -10.0),
                    size: (140.0, 20.0),
                },
                PlatformDef {
                    position: (260.0, 70.0),
                    size: (140.0, 20.0),
                },
            ],
            carrot: Some((260.0, 110.0)),
            obstacles: vec![
                ObstacleDef {
                    kind: ObstacleKind::Paddle,
                    position: (120.0, -160.0),
                    size: (20.0, 40.0),
                    magnitude: 30000.0,
                    direction: PushDirection::Left,
                },
                ObstacleDef {
                    kind: ObstacleKind::WindTurbine,
                    position: (-60.0, -165.0),
                    size: (40.0, 30.0),
                    magnitude: 45000.0,
                    direction: PushDirection::Up,
                },
            ],
            goal: Some(GoalDef {
                position: (400.0, -150.0),
                size: (40.0, 60.0),
            }),
        }
    }
}

/// All content the game needs at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameContent {
    pub player: PlayerTuningDef,
    pub level: LevelDef,
}
