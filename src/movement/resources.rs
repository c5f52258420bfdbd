//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::PlayerTuningDef;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Horizontal impulse per fixed step at full axis deflection
    pub movement_speed: f32,
    /// Upward impulse applied by a grounded jump
    pub jump_speed: f32,
    /// Horizontal distance covered by one dash at full axis deflection
    pub dash_distance: f32,
    /// Dash timer value right after a dash
    pub dash_cooldown: f32,
    /// How far below the collider the ground cast reaches
    pub ground_probe_distance: f32,
    /// Vertical offset above the spawn point used at startup
    pub spawn_height_offset: f32,
    pub linear_damping: f32,
    pub mass: f32,
    pub gravity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
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

impl MovementTuning {
    /// Velocity change per unit of impulse.
    pub fn inverse_mass(&self) -> f32 {
        if self.mass > 0.0 { 1.0 / self.mass } else { 0.0 }
    }
}

impl From<&PlayerTuningDef> for MovementTuning {
    fn from(def: &PlayerTuningDef) -> Self {
        Self {
            movement_speed: def.movement_speed,
            jump_speed: def.jump_speed,
            dash_distance: def.dash_distance,
            dash_cooldown: def.dash_cooldown,
            ground_probe_distance: def.ground_probe_distance,
            spawn_height_offset: def.spawn_height_offset,
            linear_damping: def.linear_damping,
            mass: def.mass,
            gravity: def.gravity,
        }
    }
}

/// Raw input sampled once per frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis_x: f32,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
}
