//! Debug domain: hotkeys and overlay updates.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, format_controller_info, spawn_debug_info_overlay};
use crate::level::SpawnPoint;
use crate::movement::{GroundContact, MovementTuning, Player, PlayerController, spawn_position};

/// Toggle the overlay with F3
pub(crate) fn toggle_debug_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;

    if debug_state.show_info {
        if existing_overlay.is_empty() {
            spawn_debug_info_overlay(&mut commands);
        }
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

const DEBUG_PUSH_MAGNITUDE: f32 = 30000.0;

/// Ctrl+I/J/K/L push the player through the string-label push-back entry point
const DEBUG_PUSH_KEYS: [(KeyCode, &str); 4] = [
    (KeyCode::KeyI, "up"),
    (KeyCode::KeyJ, "left"),
    (KeyCode::KeyK, "down"),
    (KeyCode::KeyL, "right"),
];

/// Ctrl+C grants the carrot, Ctrl+R returns the player to the spawn point
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<MovementTuning>,
    mut debug_state: ResMut<DebugState>,
    spawn_points: Query<&Transform, (With<SpawnPoint>, Without<Player>)>,
    mut player_query: Query<
        (&mut PlayerController, &mut Position, &mut LinearVelocity),
        With<Player>,
    >,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    let Ok((mut controller, mut position, mut velocity)) = player_query.single_mut() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::KeyC) {
        controller.grab_carrot();
        debug_state.set_message("Carrot granted", 2.0);
        info!("[DEBUG] Carrot granted");
    }

    for (key, label) in DEBUG_PUSH_KEYS {
        if !keyboard.just_pressed(key) {
            continue;
        }
        match controller.push_back_labeled(DEBUG_PUSH_MAGNITUDE, label) {
            Ok(()) => debug_state.set_message(format!("Pushed {}", label), 1.0),
            Err(e) => warn!("[DEBUG] {}", e),
        }
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        let spawn = spawn_points
            .iter()
            .next()
            .map(|t| t.translation.truncate())
            .unwrap_or(Vec2::ZERO);
        position.0 = spawn_position(spawn, tuning.spawn_height_offset);
        velocity.0 = Vec2::ZERO;
        debug_state.set_message("Returned to spawn", 2.0);
        info!("[DEBUG] Player returned to spawn");
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if debug_state.status_message.is_some() {
        debug_state.tick_message(time.delta_secs());
    }
}

pub(crate) fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    player_query: Query<
        (&Position, &LinearVelocity, &PlayerController, &GroundContact),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if let (Ok((position, velocity, controller, ground)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    {
        **text = format_controller_info(
            position.0,
            velocity.0,
            controller,
            *ground,
            &debug_state,
        );
    }
}
