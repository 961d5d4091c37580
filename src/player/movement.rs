//! Side-on player movement: walking, jumping and gravity.

use bevy::prelude::*;

use super::collision::{handle_fall_out, resolve_player_collisions};
use super::components::*;
use super::input::{read_keyboard_actions, read_lifecycle_keys};
use super::survival::tick_protection;
use crate::core::{SimConfig, SimSet};
use crate::world::{Aabb, Bounds};

/// Horizontal speeds below this snap to zero while coasting.
const STOP_THRESHOLD: f32 = 0.05;

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.init_resource::<ActionSet>()
        .add_systems(
            PreUpdate,
            (read_keyboard_actions, read_lifecycle_keys)
                .run_if(resource_exists::<ButtonInput<KeyCode>>),
        )
        .add_systems(
            FixedUpdate,
            (tick_protection, player_movement)
                .chain()
                .in_set(SimSet::Physics),
        )
        .add_systems(
            FixedUpdate,
            (resolve_player_collisions, handle_fall_out)
                .chain()
                .in_set(SimSet::Collision),
        );
}

/// Advance the player by one tick of free motion.
///
/// Collision is not considered here; the resolver corrects the result from
/// `movement.previous` afterwards.
pub fn integrate(bounds: &mut Aabb, movement: &mut MovementState, actions: &ActionSet, config: &SimConfig) {
    let direction = actions.horizontal();
    if direction != 0.0 {
        movement.velocity.x = direction * config.move_speed;
        movement.facing = if direction < 0.0 { Facing::Left } else { Facing::Right };
    } else {
        movement.velocity.x *= config.friction;
        if movement.velocity.x.abs() < STOP_THRESHOLD {
            movement.velocity.x = 0.0;
        }
    }

    if actions.jump && movement.is_grounded {
        movement.velocity.y = -config.jump_impulse;
        movement.is_grounded = false;
    }

    movement.velocity.y = (movement.velocity.y + config.gravity).min(config.terminal_velocity);

    movement.previous = *bounds;
    *bounds = bounds.translated(movement.velocity);
}

/// Apply the current action set to the player.
pub fn player_movement(
    actions: Res<ActionSet>,
    config: Res<SimConfig>,
    mut player_query: Query<(&mut Bounds, &mut MovementState), With<Player>>,
) {
    let Ok((mut bounds, mut movement)) = player_query.get_single_mut() else {
        return;
    };
    integrate(&mut bounds.0, &mut movement, &actions, &config);
}
