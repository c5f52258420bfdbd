//! Movement domain: input sampling for the player controller.

use bevy::prelude::*;

use crate::core::GameplayPaused;
use crate::movement::{InputSource, MovementInput, Player, PlayerController};

impl InputSource for MovementInput {
    fn horizontal_axis(&self) -> f32 {
        self.axis_x
    }

    fn jump_held(&self) -> bool {
        self.jump_held
    }

    fn dash_just_pressed(&self) -> bool {
        self.dash_just_pressed
    }
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Raw axis: no smoothing, opposite keys cancel out
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis_x = x;
    input.jump_held = keyboard.pressed(KeyCode::Space);
    input.dash_just_pressed = keyboard.just_pressed(KeyCode::KeyE);
}

pub(crate) fn sample_controller_input(
    input: Res<MovementInput>,
    mut query: Query<&mut PlayerController, With<Player>>,
) {
    for mut controller in &mut query {
        controller.sample_input(&*input);
    }
}

/// Forget the last sample when gameplay pauses, so the first fixed step after
/// resuming does not replay input held before the pause.
pub(crate) fn clear_input_on_pause(
    paused: Res<GameplayPaused>,
    mut query: Query<&mut PlayerController, With<Player>>,
) {
    if !paused.is_changed() || !paused.is_paused() {
        return;
    }

    for mut controller in &mut query {
        controller.clear_input();
    }
}
