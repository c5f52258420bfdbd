//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::{Path, PathBuf};

use super::data::*;

pub const PLAYER_TUNING_FILE: &str = "player_tuning.ron";
pub const LEVEL_FILE: &str = "level.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from a string. `file` is only used for error context.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&file_name, &contents)
}

/// Directory holding the data files. Follows the asset root lookup Bevy uses:
/// `BEVY_ASSET_ROOT`, then `CARGO_MANIFEST_DIR`, then the executable's folder.
pub fn content_base_path() -> PathBuf {
    let root = std::env::var_os("BEVY_ASSET_ROOT")
        .or_else(|| std::env::var_os("CARGO_MANIFEST_DIR"))
        .map(PathBuf::from)
        .or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
        })
        .unwrap_or_default();

    root.join("assets").join("data")
}

/// Load all content from `base_path`. Each file that fails falls back to its
/// defaults; the errors are returned alongside so the caller can report them.
pub fn load_all_content(base_path: &Path) -> (GameContent, Vec<ContentLoadError>) {
    let mut errors = Vec::new();

    let player = match load_single_file::<PlayerTuningDef>(&base_path.join(PLAYER_TUNING_FILE)) {
        Ok(player) => player,
        Err(e) => {
            errors.push(e);
            PlayerTuningDef::default()
        }
    };

    let level = match load_single_file::<LevelDef>(&base_path.join(LEVEL_FILE)) {
        Ok(level) => level,
        Err(e) => {
            errors.push(e);
            LevelDef::default()
        }
    };

    (GameContent { player, level }, errors)
}
