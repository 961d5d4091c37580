//! Player plugin - input mapping, movement, collision and survival.

use bevy::prelude::*;

use super::movement;

/// Player plugin - handles player input, movement and collision.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // Set up movement systems
        movement::setup_movement_systems(app);
    }
}
