//! Movement domain: system modules for the player controller.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use input::{clear_input_on_pause, read_input, sample_controller_input};
pub(crate) use movement::{orient_sprite, receive_push_back, step_controller};
