//! Core domain: helpers for reading collision pairs.

use bevy::prelude::*;

/// Order a collision pair so the entity matching `is_first` comes first.
/// Returns `None` when neither side matches.
pub fn match_pair(
    a: Entity,
    b: Entity,
    is_first: impl Fn(Entity) -> bool,
) -> Option<(Entity, Entity)> {
    if is_first(a) {
        Some((a, b))
    } else if is_first(b) {
        Some((b, a))
    } else {
        None
    }
}
