//! Movement domain: components and physics layers for the player.

use std::str::FromStr;

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Platforms the player can stand on and jump from
    Ground,
    /// Player character
    Player,
    /// Sensors (carrot, goal, obstacles) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for the child entity that renders the player sprite.
/// Orientation is applied here so the rigid body never rotates.
#[derive(Component, Debug)]
pub struct PlayerSprite;

/// Result of the downward box-cast against the platform layer.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GroundContact(pub bool);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing for a horizontal axis value; `None` when the axis is zero.
    pub fn from_axis(axis: f32) -> Option<Self> {
        if axis > 0.0 {
            Some(Facing::Right)
        } else if axis < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    /// Sprite yaw in degrees.
    pub fn yaw_degrees(self) -> f32 {
        match self {
            Facing::Right => 0.0,
            Facing::Left => 180.0,
        }
    }
}

/// Direction an obstacle pushes the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub enum PushDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PushDirection {
    pub fn unit(self) -> Vec2 {
        match self {
            PushDirection::Up => Vec2::Y,
            PushDirection::Down => Vec2::NEG_Y,
            PushDirection::Left => Vec2::NEG_X,
            PushDirection::Right => Vec2::X,
        }
    }
}

/// Returned when a push-back label is not one of `up`, `down`, `left`, `right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl std::fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown push-back direction '{}'", self.0)
    }
}

impl FromStr for PushDirection {
    type Err = UnknownDirection;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "up" => Ok(PushDirection::Up),
            "down" => Ok(PushDirection::Down),
            "left" => Ok(PushDirection::Left),
            "right" => Ok(PushDirection::Right),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}
