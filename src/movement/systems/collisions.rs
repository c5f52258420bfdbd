//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundContact, GroundProbe, MovementTuning, Player};

impl GroundProbe for GroundContact {
    fn is_grounded(&self) -> bool {
        self.0
    }
}

/// Box-cast the player's collider a short distance downward against the
/// platform layer.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &Position, &Collider, &mut GroundContact), With<Player>>,
) {
    let config = ShapeCastConfig::from_max_distance(tuning.ground_probe_distance);

    for (entity, position, collider, mut contact) in &mut query {
        let filter = SpatialQueryFilter::from_mask(GameLayer::Ground)
            .with_excluded_entities([entity]);

        let hit = spatial_query.cast_shape(
            collider,
            position.0,
            0.0,
            Dir2::NEG_Y,
            &config,
            &filter,
        );

        let grounded = hit.is_some();
        if grounded != contact.0 {
            debug!("Ground contact changed: grounded={}", grounded);
        }
        contact.0 = grounded;
    }
}
