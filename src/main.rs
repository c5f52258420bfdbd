mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod hazards;
mod level;
mod movement;
mod pickups;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Carrot Dash".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        hazards::HazardsPlugin,
        pickups::PickupsPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
