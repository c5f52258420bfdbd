//! Debug domain: tests for overlay state and formatting.

use bevy::prelude::*;

use super::DebugState;
use super::ui::format_controller_info;
use crate::movement::{GroundContact, PlayerController};

#[test]
fn test_status_message_expires() {
    let mut state = DebugState::default();
    state.set_message("Carrot granted", 1.0);

    state.tick_message(0.5);
    assert!(state.status_message.is_some());

    state.tick_message(0.6);
    assert!(state.status_message.is_none());
}

#[test]
fn test_overlay_text_reports_controller_state() {
    let mut controller = PlayerController::default();
    controller.dash_timer = 0.25;
    controller.grab_carrot();
    let mut state = DebugState::default();
    state.set_message("Returned to spawn", 2.0);

    let text = format_controller_info(
        Vec2::new(12.0, -40.0),
        Vec2::ZERO,
        &controller,
        GroundContact(true),
        &state,
    );

    assert!(text.contains("Pos: (12, -40)"));
    assert!(text.contains("Grounded: true"));
    assert!(text.contains("Dash timer: 0.25"));
    assert!(text.contains("Carrot: true"));
    assert!(text.ends_with("> Returned to spawn"));
}
