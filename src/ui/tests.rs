//! UI domain: tests for HUD labels and carrot feedback.

use bevy::prelude::*;

use super::hud_carrot::{
    CARROT_HELD_COLOR, CARROT_TEXT_COLOR, CarrotStatusText, banner_label, carrot_label,
    highlight_carrot_hud,
};
use crate::core::GameplayPaused;
use crate::pickups::{CarrotGrabbedEvent, LevelProgress};

#[test]
fn test_carrot_label() {
    assert_eq!(carrot_label(false), "Carrot: no");
    assert_eq!(carrot_label(true), "Carrot: yes");
}

#[test]
fn test_banner_prefers_level_complete_over_pause() {
    let mut progress = LevelProgress::default();
    let mut paused = GameplayPaused::default();
    assert_eq!(banner_label(&progress, &paused), "");

    paused.pause("menu");
    assert_eq!(banner_label(&progress, &paused), "Paused");

    progress.completed = true;
    assert_eq!(banner_label(&progress, &paused), "Level complete!");
}

fn carrot_text_color(app: &mut App) -> Color {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&TextColor, With<CarrotStatusText>>();
    query.single(world).map(|color| color.0).expect("carrot status text")
}

#[test]
fn test_carrot_hud_highlights_on_grab() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<CarrotGrabbedEvent>()
        .add_systems(Update, highlight_carrot_hud);
    app.world_mut()
        .spawn((CarrotStatusText, TextColor(CARROT_TEXT_COLOR)));

    app.update();
    assert_eq!(carrot_text_color(&mut app), CARROT_TEXT_COLOR);

    let player = app.world_mut().spawn_empty().id();
    let carrot = app.world_mut().spawn_empty().id();
    app.world_mut()
        .write_message(CarrotGrabbedEvent { player, carrot });
    app.update();

    assert_eq!(carrot_text_color(&mut app), CARROT_HELD_COLOR);
}
