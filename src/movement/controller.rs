//! Movement domain: player controller logic, independent of the physics backend.
//!
//! The engine side is reached through three small capabilities:
//! [`InputSource`] for the per-frame sample, [`PlayerBody`] for the rigid body
//! and [`GroundProbe`] for the platform check. Systems in `systems/` adapt
//! Bevy and avian2d types to these traits.

use bevy::prelude::*;

use crate::movement::{Facing, MovementTuning, PushDirection, UnknownDirection};

/// Per-frame input the controller samples.
pub trait InputSource {
    fn horizontal_axis(&self) -> f32;
    /// Level-triggered: true every frame the button is down.
    fn jump_held(&self) -> bool;
    /// Edge-triggered: true only on the frame the key went down.
    fn dash_just_pressed(&self) -> bool;
}

/// The rigid body driven by the controller.
pub trait PlayerBody {
    fn position(&self) -> Vec2;
    fn apply_impulse(&mut self, impulse: Vec2);
    /// Teleport the body to `target` without touching its velocity.
    fn move_position(&mut self, target: Vec2);
}

pub trait GroundProbe {
    fn is_grounded(&self) -> bool;
}

/// What a fixed step did, for logging and debug display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub jumped: bool,
    pub dashed: bool,
    pub pushed: bool,
}

#[derive(Component, Debug, Default, Clone)]
pub struct PlayerController {
    /// Raw horizontal axis, roughly in [-1, 1]
    pub horizontal: f32,
    pub jump_requested: bool,
    /// Latched on the dash key edge, cleared once the dash executes
    pub dash_requested: bool,
    /// Counts down to zero; dash is available at zero
    pub dash_timer: f32,
    pub facing: Facing,
    pending_force: Vec2,
    has_carrot: bool,
}

impl PlayerController {
    pub fn sample_input(&mut self, input: &impl InputSource) {
        self.horizontal = input.horizontal_axis();
        self.jump_requested = input.jump_held();
        if input.dash_just_pressed() {
            self.dash_requested = true;
        }
    }

    /// Drop the sampled axis and any pending jump/dash request.
    pub fn clear_input(&mut self) {
        self.horizontal = 0.0;
        self.jump_requested = false;
        self.dash_requested = false;
    }

    pub fn dash_ready(&self) -> bool {
        self.dash_timer <= 0.0
    }

    /// Advance the controller by one fixed step of `dt` seconds.
    pub fn fixed_step(
        &mut self,
        dt: f32,
        tuning: &MovementTuning,
        body: &mut impl PlayerBody,
        ground: &impl GroundProbe,
    ) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        self.dash_timer = (self.dash_timer - dt).max(0.0);

        if self.horizontal != 0.0 {
            if let Some(facing) = Facing::from_axis(self.horizontal) {
                self.facing = facing;
            }
            body.apply_impulse(Vec2::X * self.horizontal * tuning.movement_speed);
        }

        if self.jump_requested && ground.is_grounded() {
            body.apply_impulse(Vec2::Y * tuning.jump_speed);
            outcome.jumped = true;
        }

        if self.dash_requested && self.dash_ready() {
            let position = body.position();
            body.move_position(Vec2::new(
                position.x + tuning.dash_distance * self.horizontal,
                position.y,
            ));
            self.dash_timer = tuning.dash_cooldown;
            self.dash_requested = false;
            outcome.dashed = true;
        }

        // Push-back forces act for exactly one step
        if self.pending_force != Vec2::ZERO {
            body.apply_impulse(self.pending_force * dt);
            self.pending_force = Vec2::ZERO;
            outcome.pushed = true;
        }

        outcome
    }

    /// Queue a one-shot force of `magnitude` in `direction` for the next fixed step.
    pub fn push_back(&mut self, magnitude: f32, direction: PushDirection) {
        self.pending_force += direction.unit() * magnitude;
    }

    /// Label entry point for obstacle scripts. Unknown labels leave the
    /// controller untouched.
    pub fn push_back_labeled(
        &mut self,
        magnitude: f32,
        label: &str,
    ) -> Result<(), UnknownDirection> {
        let direction = label.parse::<PushDirection>()?;
        self.push_back(magnitude, direction);
        Ok(())
    }

    pub fn pending_force(&self) -> Vec2 {
        self.pending_force
    }

    pub fn grab_carrot(&mut self) {
        self.has_carrot = true;
    }

    pub fn has_carrot(&self) -> bool {
        self.has_carrot
    }
}

/// Where the player appears relative to the spawn point.
pub fn spawn_position(spawn_point: Vec2, height_offset: f32) -> Vec2 {
    spawn_point + Vec2::new(0.0, height_offset)
}
