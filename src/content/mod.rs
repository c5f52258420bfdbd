//! Content domain: RON data files for player tuning and the level layout.

mod data;
mod loader;
mod validation;

pub use data::{
    GameContent, GoalDef, LevelDef, ObstacleDef, ObstacleKind, PlatformDef, PlayerTuningDef,
};
pub use loader::{ContentLoadError, content_base_path, load_all_content, parse_ron};
pub use validation::{ValidationError, validate_level, validate_tuning};

use bevy::prelude::*;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let base_path = content_base_path();
        let (mut content, load_errors) = load_all_content(&base_path);

        for error in &load_errors {
            warn!("{}, using defaults", error);
        }

        let tuning_errors = validate_tuning(&content.player);
        if !tuning_errors.is_empty() {
            for error in &tuning_errors {
                error!("{}", error);
            }
            content.player = PlayerTuningDef::default();
        }

        let level_errors = validate_level(&content.level);
        if !level_errors.is_empty() {
            for error in &level_errors {
                error!("{}", error);
            }
            content.level = LevelDef::default();
        }

        info!(
            "Content loaded from {}: level='{}', platforms={}, obstacles={}",
            base_path.display(),
            content.level.name,
            content.level.platforms.len(),
            content.level.obstacles.len()
        );

        app.register_type::<PlayerTuningDef>()
            .register_type::<LevelDef>()
            .insert_resource(content);
    }
}
