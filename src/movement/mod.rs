//! Movement domain: the player controller, its input, and its physics.

mod bootstrap;
mod components;
mod controller;
mod resources;
mod systems;

pub use components::{
    Facing, GameLayer, GroundContact, Player, PlayerSprite, PushDirection, UnknownDirection,
};
pub use controller::{
    GroundProbe, InputSource, PlayerBody, PlayerController, StepOutcome, spawn_position,
};
pub use resources::{MovementInput, MovementTuning};

pub(crate) use systems::receive_push_back;

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::movement::bootstrap::{apply_content_tuning, spawn_player};
use crate::movement::systems::{
    clear_input_on_pause, detect_ground, orient_sprite, read_input, sample_controller_input,
    step_controller,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(
                Startup,
                (
                    apply_content_tuning,
                    spawn_player.after(crate::level::spawn_level),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (read_input, sample_controller_input, receive_push_back)
                    .chain()
                    .run_if(gameplay_active),
            )
            .add_systems(Update, (clear_input_on_pause, orient_sprite))
            .add_systems(
                FixedUpdate,
                (detect_ground, step_controller)
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}
