//! Movement domain: fixed-step physics, push-back and sprite orientation.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::hazards::PushBackEvent;
use crate::movement::{
    GroundContact, MovementTuning, Player, PlayerBody, PlayerController, PlayerSprite,
};

/// avian2d rigid body seen through [`PlayerBody`].
/// Impulses change velocity by `impulse / mass`.
pub(crate) struct PhysicsBody<'a> {
    pub position: &'a mut Position,
    pub velocity: &'a mut LinearVelocity,
    pub inverse_mass: f32,
}

impl PlayerBody for PhysicsBody<'_> {
    fn position(&self) -> Vec2 {
        self.position.0
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.inverse_mass;
    }

    fn move_position(&mut self, target: Vec2) {
        self.position.0 = target;
    }
}

pub(crate) fn step_controller(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut PlayerController,
            &GroundContact,
            &mut Position,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut controller, ground, mut position, mut velocity) in &mut query {
        let mut body = PhysicsBody {
            position: &mut *position,
            velocity: &mut *velocity,
            inverse_mass: tuning.inverse_mass(),
        };

        let outcome = controller.fixed_step(dt, &tuning, &mut body, ground);

        if outcome.jumped {
            debug!("Jump: velocity=({:.1}, {:.1})", velocity.x, velocity.y);
        }
        if outcome.dashed {
            debug!(
                "Dash: x={:.1}, cooldown={:.2}",
                position.x, controller.dash_timer
            );
        }
        if outcome.pushed {
            debug!(
                "Push-back applied: velocity=({:.1}, {:.1})",
                velocity.x, velocity.y
            );
        }
    }
}

/// Feed obstacle push-back messages into the targeted controller.
pub(crate) fn receive_push_back(
    mut push_events: MessageReader<PushBackEvent>,
    mut query: Query<&mut PlayerController, With<Player>>,
) {
    for event in push_events.read() {
        if let Ok(mut controller) = query.get_mut(event.target) {
            controller.push_back(event.magnitude, event.direction);
            debug!(
                "Push-back queued from {:?}: magnitude={}, direction={:?}",
                event.source, event.magnitude, event.direction
            );
        }
    }
}

/// Rotate the sprite child to match the controller's facing.
pub(crate) fn orient_sprite(
    player_query: Query<&PlayerController, With<Player>>,
    mut sprite_query: Query<(&ChildOf, &mut Transform), With<PlayerSprite>>,
) {
    for (child_of, mut transform) in &mut sprite_query {
        let Ok(controller) = player_query.get(child_of.parent()) else {
            continue;
        };

        let rotation = Quat::from_rotation_y(controller.facing.yaw_degrees().to_radians());
        if transform.rotation != rotation {
            transform.rotation = rotation;
        }
    }
}
