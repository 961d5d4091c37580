//! Horizontal viewport tracking.

use bevy::prelude::*;

use crate::core::SimConfig;
use crate::player::Player;
use crate::world::{Bounds, LevelBounds};

/// Left edge of the viewport in level coordinates.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub offset: f32,
}

impl CameraState {
    /// Largest offset that keeps the viewport inside the level.
    pub fn max_offset(level_width: f32, viewport_width: f32) -> f32 {
        (level_width - viewport_width).max(0.0)
    }

    fn target(player_x: f32, viewport_width: f32) -> f32 {
        player_x - viewport_width / 2.0
    }

    /// Ease towards centring `player_x`, then clamp to the level.
    pub fn follow(&mut self, player_x: f32, level_width: f32, viewport_width: f32, smoothing: f32) {
        let target = Self::target(player_x, viewport_width);
        self.offset += (target - self.offset) * smoothing;
        self.offset = self
            .offset
            .clamp(0.0, Self::max_offset(level_width, viewport_width));
    }

    /// Jump straight to the clamped target.
    pub fn snap_to(&mut self, player_x: f32, level_width: f32, viewport_width: f32) {
        self.offset = Self::target(player_x, viewport_width)
            .clamp(0.0, Self::max_offset(level_width, viewport_width));
    }
}

pub fn follow_player(
    config: Res<SimConfig>,
    level: Res<LevelBounds>,
    player_query: Query<&Bounds, With<Player>>,
    mut camera: ResMut<CameraState>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    camera.follow(
        player.0.x,
        level.width,
        config.viewport_width,
        config.camera_smoothing,
    );
}

/// Centre on the spawn point when a run starts.
pub fn reset_camera(config: Res<SimConfig>, level: Res<LevelBounds>, mut camera: ResMut<CameraState>) {
    camera.snap_to(level.spawn.x, level.width, config.viewport_width);
}
