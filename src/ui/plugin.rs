//! UI plugin - frame snapshot and narrative messages.

use bevy::prelude::*;

use super::hud;
use super::messages::{clear_messages, expire_messages, receive_narrative_messages, MessageBoard};
use super::snapshot::{publish_snapshot, FrameSnapshot};
use crate::camera::reset_camera;
use crate::core::{reset_simulation, GameState, SimSet};

/// UI plugin - presentation data the simulation exposes every tick.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameSnapshot>()
            .init_resource::<MessageBoard>()
            .add_systems(
                FixedUpdate,
                (receive_narrative_messages, publish_snapshot)
                    .chain()
                    .in_set(SimSet::Publish),
            )
            .add_systems(
                OnEnter(GameState::Playing),
                (clear_messages, publish_snapshot.after(reset_camera).after(reset_simulation)),
            )
            .add_systems(Update, expire_messages);
    }
}

/// On-screen HUD for windowed hosts. Needs the UI and text plugins.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);
    }
}
