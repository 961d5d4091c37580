//! Entity spawning functions for level construction.

use bevy::prelude::*;

use super::components::*;
use super::data::{EntityKindDef, EntityRecord};
use super::geometry::Aabb;
use crate::combat::Health;
use crate::core::SimConfig;
use crate::enemies::{Boss, Enemy, Patrol, Shooter};
use crate::player::{Facing, Loadout, MovementState, Player, Survival};

/// Spawn the live copy of one level record.
///
/// The record is only read; every mutable field starts from its template
/// value, so a reset always reproduces the original level.
pub fn spawn_world_entity(commands: &mut Commands, record: &EntityRecord, config: &SimConfig) -> Entity {
    let bounds = Aabb::from_tuple(record.bounds);
    let mut entity = commands.spawn((
        LevelEntity,
        WorldId(record.id),
        record.kind.kind(),
        Bounds(bounds),
    ));

    match &record.kind {
        EntityKindDef::Platform => {
            entity.insert(Solid);
        }
        EntityKindDef::Firewall => {
            entity.insert((Solid, Firewall::default()));
        }
        EntityKindDef::Console { linked_id, message } => {
            entity.insert(Console {
                linked_id: *linked_id,
                activated: false,
                message: message.clone(),
            });
        }
        EntityKindDef::Log { message } => {
            entity.insert(Collectible {
                collected: false,
                message: message.clone(),
            });
        }
        EntityKindDef::PowerUp { effect } => {
            entity.insert((
                Solid,
                PowerUpBox {
                    effect: *effect,
                    hit: false,
                },
            ));
        }
        EntityKindDef::Goal => {
            entity.insert(Goal::default());
        }
        EntityKindDef::PatrolEnemy {
            patrol_start,
            patrol_end,
            speed,
            health,
        } => {
            entity.insert((
                Enemy,
                Health::new(health.unwrap_or(config.enemy_health)),
                Patrol {
                    start: patrol_start.min(*patrol_end),
                    end: patrol_start.max(*patrol_end),
                    direction: 1.0,
                    speed: speed.unwrap_or(config.patrol_speed),
                },
            ));
        }
        EntityKindDef::Shooter {
            fire_range,
            initial_cooldown,
            health,
        } => {
            entity.insert((
                Enemy,
                Health::new(health.unwrap_or(config.enemy_health)),
                Shooter {
                    cooldown: initial_cooldown.unwrap_or(config.shooter_cooldown_ticks),
                    fire_range: fire_range.unwrap_or(config.shooter_range),
                },
            ));
        }
        EntityKindDef::Boss {
            health,
            activation_x,
            min_y,
            max_y,
            gate_id,
            message,
        } => {
            entity.insert((
                Enemy,
                Health::new(*health),
                Boss {
                    active: false,
                    activation_x: *activation_x,
                    min_y: min_y.min(*max_y),
                    max_y: min_y.max(*max_y),
                    direction: 1.0,
                    fire_cooldown: config.boss_fire_cooldown_ticks,
                    gate_id: *gate_id,
                    message: message.clone(),
                },
            ));
        }
    }

    entity.id()
}

/// Spawn the player at the level's spawn point with a fresh state.
pub fn spawn_player(commands: &mut Commands, spawn: Vec2, config: &SimConfig) -> Entity {
    let bounds = Aabb::new(spawn.x, spawn.y, config.player_size.0, config.player_size.1);
    commands
        .spawn((
            Player,
            LevelEntity,
            Bounds(bounds),
            MovementState {
                velocity: Vec2::ZERO,
                is_grounded: false,
                facing: Facing::Right,
                previous: bounds,
            },
            Survival::new(config.starting_lives),
            Loadout::default(),
        ))
        .id()
}
