//! Camera plugin - keeps the viewport on the player.

use bevy::prelude::*;

use super::follow::{follow_player, reset_camera, CameraState};
use crate::core::{GameState, SimSet};
use crate::world::setup_level;

/// Camera plugin - viewport offset tracking.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraState>()
            .add_systems(OnEnter(GameState::Playing), reset_camera.after(setup_level))
            .add_systems(FixedUpdate, follow_player.in_set(SimSet::Camera));
    }
}
