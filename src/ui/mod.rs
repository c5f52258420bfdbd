//! UI domain: in-level HUD.

mod hud_carrot;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::ui::hud_carrot::{
    highlight_carrot_hud, spawn_carrot_hud, update_banner, update_carrot_hud,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_carrot_hud)
            .add_systems(
                Update,
                (update_carrot_hud, highlight_carrot_hud, update_banner),
            );
    }
}
