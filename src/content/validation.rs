//! Validation for loaded content values.

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Helper macro for checking a value is finite and not negative
macro_rules! check_non_negative {
    ($errors:expr, $source_type:expr, $source_id:expr, $field:expr, $value:expr) => {
        if !$value.is_finite() || $value < 0.0 {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                message: format!("expected a finite value >= 0, got {}", $value),
            });
        }
    };
}

/// Helper macro for checking both extents of a size are positive
macro_rules! check_size {
    ($errors:expr, $source_type:expr, $source_id:expr, $field:expr, $size:expr) => {
        let (w, h) = $size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                message: format!("expected a positive size, got ({}, {})", w, h),
            });
        }
    };
}

pub fn validate_tuning(tuning: &PlayerTuningDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let id = "player_tuning";

    check_non_negative!(errors, "PlayerTuning", id, "movement_speed", tuning.movement_speed);
    check_non_negative!(errors, "PlayerTuning", id, "jump_speed", tuning.jump_speed);
    check_non_negative!(errors, "PlayerTuning", id, "dash_distance", tuning.dash_distance);
    check_non_negative!(errors, "PlayerTuning", id, "dash_cooldown", tuning.dash_cooldown);
    check_non_negative!(
        errors,
        "PlayerTuning",
        id,
        "ground_probe_distance",
        tuning.ground_probe_distance
    );
    check_non_negative!(errors, "PlayerTuning", id, "linear_damping", tuning.linear_damping);
    check_non_negative!(errors, "PlayerTuning", id, "gravity", tuning.gravity);

    if !tuning.spawn_height_offset.is_finite() {
        errors.push(ValidationError {
            source_type: "PlayerTuning",
            source_id: id.to_string(),
            field: "spawn_height_offset",
            message: format!("expected a finite value, got {}", tuning.spawn_height_offset),
        });
    }

    if !(tuning.mass.is_finite() && tuning.mass > 0.0) {
        errors.push(ValidationError {
            source_type: "PlayerTuning",
            source_id: id.to_string(),
            field: "mass",
            message: format!("expected a positive mass, got {}", tuning.mass),
        });
    }

    errors
}

pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if level.platforms.is_empty() {
        errors.push(ValidationError {
            source_type: "Level",
            source_id: level.id.clone(),
            field: "platforms",
            message: "level has no platforms to stand on".to_string(),
        });
    }

    for platform in &level.platforms {
        check_size!(errors, "Level", level.id, "platforms.size", platform.size);
    }

    for obstacle in &level.obstacles {
        check_size!(errors, "Level", level.id, "obstacles.size", obstacle.size);
        check_non_negative!(
            errors,
            "Level",
            level.id,
            "obstacles.magnitude",
            obstacle.magnitude
        );
    }

    if let Some(goal) = &level.goal {
        check_size!(errors, "Level", level.id, "goal.size", goal.size);
    }

    errors
}
