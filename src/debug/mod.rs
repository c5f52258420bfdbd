//! Debug/developer overlay for tuning the controller.
//!
//! Features:
//! - F3 toggles an overlay with controller internals
//! - Ctrl+C grants the carrot
//! - Ctrl+R returns the player to the spawn point
//! - Ctrl+I/J/K/L push the player up/left/down/right

mod state;
mod systems;
#[cfg(test)]
mod tests;
mod ui;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{
    handle_debug_hotkeys, toggle_debug_overlay, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    toggle_debug_overlay,
                    handle_debug_hotkeys,
                    update_status_message,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            );
    }
}
