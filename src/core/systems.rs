//! Core domain: camera setup and pausing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::resources::GameplayPaused;

pub(crate) const PAUSE_SOURCE_MENU: &str = "menu";

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Toggle pause with P or Escape
pub(crate) fn toggle_pause(keyboard: Res<ButtonInput<KeyCode>>, mut paused: ResMut<GameplayPaused>) {
    if keyboard.just_pressed(KeyCode::KeyP) || keyboard.just_pressed(KeyCode::Escape) {
        let menu_open = paused.toggle(PAUSE_SOURCE_MENU);
        info!(
            "Pause toggled: menu={}, paused={}",
            menu_open,
            paused.is_paused()
        );
    }
}

/// Freeze the physics clock while any pause source is active.
pub(crate) fn sync_physics_pause(
    paused: Res<GameplayPaused>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    if !paused.is_changed() {
        return;
    }

    if paused.is_paused() {
        physics_time.pause();
    } else {
        physics_time.unpause();
    }
}
