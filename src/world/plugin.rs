//! World plugin - level loading, level reset and interactables.

use bevy::prelude::*;

use crate::core::{GameState, SimConfig, SimSet};

use super::components::LevelEntity;
use super::data::{load_level_definitions, CurrentLevel, LevelRegistry};
use super::interaction::*;
use super::registry::{EntityRegistry, LevelBounds};
use super::spawning::{spawn_player, spawn_world_entity};

/// World plugin - handles level loading, world setup and interactions.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentLevel>()
            .init_resource::<LevelRegistry>()
            .init_resource::<EntityRegistry>()
            .init_resource::<LevelBounds>()
            .add_systems(Startup, load_level_definitions)
            .add_systems(OnEnter(GameState::Playing), setup_level)
            .add_systems(
                FixedUpdate,
                (
                    strike_power_ups,
                    use_consoles,
                    collect_logs,
                    open_boss_gates,
                    activate_goals,
                    reach_goals,
                )
                    .chain()
                    .in_set(SimSet::Interaction),
            );
    }
}

/// Rebuild the live world from the current level's template.
///
/// Everything from the previous run is despawned first, so entering
/// `Playing` from `Start`, `Lost` or `Won` always yields the same world.
pub fn setup_level(
    mut commands: Commands,
    level_registry: Res<LevelRegistry>,
    current_level: Res<CurrentLevel>,
    config: Res<SimConfig>,
    mut registry: ResMut<EntityRegistry>,
    mut level_bounds: ResMut<LevelBounds>,
    existing: Query<Entity, With<LevelEntity>>,
) {
    for entity in existing.iter() {
        commands.entity(entity).despawn_recursive();
    }
    registry.clear();

    let Some(level) = level_registry.get(&current_level.name) else {
        error!("Level '{}' not found in registry!", current_level.name);
        return;
    };

    info!("Building level: {}", level.name);

    for record in &level.entities {
        let entity = spawn_world_entity(&mut commands, record, &config);
        registry.insert(record.id, entity);
    }

    if registry.is_empty() {
        warn!("Level '{}' has no objects", level.name);
    } else {
        info!("Registered {} level objects", registry.len());
    }

    *level_bounds = LevelBounds {
        width: level.width,
        height: level.height,
        spawn: level.spawn_point(),
    };
    spawn_player(&mut commands, level.spawn_point(), &config);
}
