//! Debug domain: overlay spawning and text formatting.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::movement::{GroundContact, PlayerController};

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn format_controller_info(
    position: Vec2,
    velocity: Vec2,
    controller: &PlayerController,
    ground: GroundContact,
    debug_state: &DebugState,
) -> String {
    let mut info = format!(
        "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nAxis: {:.2}\nFacing: {:?}\nGrounded: {}\nJump held: {}\nDash requested: {}\nDash timer: {:.2}\nPending push: ({:.0}, {:.0})\nCarrot: {}",
        position.x,
        position.y,
        velocity.x,
        velocity.y,
        controller.horizontal,
        controller.facing,
        ground.0,
        controller.jump_requested,
        controller.dash_requested,
        controller.dash_timer,
        controller.pending_force().x,
        controller.pending_force().y,
        controller.has_carrot()
    );

    if let Some((message, _)) = &debug_state.status_message {
        info.push_str("\n> ");
        info.push_str(message);
    }

    info
}
