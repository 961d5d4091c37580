//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use crate::core::SimSet;

/// Enemy plugin - handles patrol, shooter and boss behavior.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (ai::patrol_ai, ai::shooter_ai, ai::boss_ai)
                .chain()
                .in_set(SimSet::Ai),
        );
    }
}
