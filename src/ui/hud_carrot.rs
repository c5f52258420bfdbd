//! UI domain: carrot status and level messages.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::GameplayPaused;
use crate::movement::{Player, PlayerController};
use crate::pickups::{CarrotGrabbedEvent, LevelProgress};

pub(crate) const HUD_PADDING: f32 = 16.0;
pub(crate) const CARROT_TEXT_COLOR: Color = Color::srgb(0.15, 0.15, 0.2);
pub(crate) const CARROT_HELD_COLOR: Color = Color::srgb(0.85, 0.4, 0.05);

/// Marker for the carrot status text
#[derive(Component)]
pub struct CarrotStatusText;

/// Marker for the centered banner (pause / level complete)
#[derive(Component)]
pub struct BannerText;

pub(crate) fn spawn_carrot_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|parent| {
            // Carrot icon
            parent.spawn((
                Node {
                    width: Val::Px(10.0),
                    height: Val::Px(20.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.95, 0.55, 0.15)),
            ));

            parent.spawn((
                CarrotStatusText,
                Text::new(carrot_label(false)),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(CARROT_TEXT_COLOR),
            ));
        });

    commands.spawn((
        BannerText,
        Text::new(""),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::srgb(0.98, 0.95, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(40.0),
            left: Val::Percent(38.0),
            ..default()
        },
    ));
}

pub(crate) fn carrot_label(has_carrot: bool) -> &'static str {
    if has_carrot {
        "Carrot: yes"
    } else {
        "Carrot: no"
    }
}

pub(crate) fn banner_label(progress: &LevelProgress, paused: &GameplayPaused) -> &'static str {
    if progress.completed {
        "Level complete!"
    } else if paused.is_paused() {
        "Paused"
    } else {
        ""
    }
}

pub(crate) fn update_carrot_hud(
    player_query: Query<&PlayerController, With<Player>>,
    mut query: Query<&mut Text, With<CarrotStatusText>>,
) {
    let Ok(controller) = player_query.single() else {
        return;
    };

    let label = carrot_label(controller.has_carrot());
    for mut text in &mut query {
        if text.0 != label {
            **text = label.to_string();
        }
    }
}

/// Tint the carrot status once a carrot is actually picked up.
pub(crate) fn highlight_carrot_hud(
    mut grabbed_events: MessageReader<CarrotGrabbedEvent>,
    mut query: Query<&mut TextColor, With<CarrotStatusText>>,
) {
    let Some(event) = grabbed_events.read().last() else {
        return;
    };

    debug!(
        "HUD: carrot {:?} grabbed by {:?}",
        event.carrot, event.player
    );
    for mut color in &mut query {
        color.0 = CARROT_HELD_COLOR;
    }
}

pub(crate) fn update_banner(
    progress: Res<LevelProgress>,
    paused: Res<GameplayPaused>,
    mut query: Query<&mut Text, With<BannerText>>,
) {
    if !progress.is_changed() && !paused.is_changed() {
        return;
    }

    let label = banner_label(&progress, &paused);
    for mut text in &mut query {
        **text = label.to_string();
    }
}
