//! Combat systems - firing, projectile flight, hits and damage handling.

use bevy::prelude::*;
use std::collections::HashSet;

use super::components::*;
use super::particles::{spawn_defeat_particles, update_particles};
use crate::core::{
    DamageCause, DamageEvent, EnemyDefeatedEvent, GameState, SimConfig, SimSet,
};
use crate::enemies::{Boss, Enemy};
use crate::player::{respawn, ActionSet, Facing, HitOutcome, Loadout, MovementState, Player, Survival};
use crate::world::{Aabb, Bounds, EntityRegistry, Firewall, LevelBounds, LevelEntity, Solid, WorldId};

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        // Resources
        .init_resource::<ProjectileIds>()
        .add_systems(OnEnter(GameState::Playing), reset_projectile_ids)

        // Fire, fly, hit, hurt, then the cosmetic aftermath
        .add_systems(
            FixedUpdate,
            (
                player_fire,
                advance_projectiles,
                resolve_projectile_hits,
                detect_contact_damage,
                apply_player_damage,
                spawn_defeat_particles,
                update_particles,
            )
                .chain()
                .in_set(SimSet::Projectiles),
        );
}

fn reset_projectile_ids(mut ids: ResMut<ProjectileIds>) {
    *ids = ProjectileIds::default();
}

/// Spawn a projectile centred on `origin`.
pub fn spawn_projectile(
    commands: &mut Commands,
    ids: &mut ProjectileIds,
    origin: Vec2,
    velocity: Vec2,
    faction: Faction,
    size: Vec2,
) -> Entity {
    commands
        .spawn((
            LevelEntity,
            Projectile {
                id: ids.next_id(),
                velocity,
                faction,
            },
            Bounds(Aabb::centered_on(origin, size)),
        ))
        .id()
}

/// Fire the player's weapon from the side they are facing.
fn player_fire(
    mut commands: Commands,
    config: Res<SimConfig>,
    actions: Res<ActionSet>,
    mut ids: ResMut<ProjectileIds>,
    mut player_query: Query<(&Bounds, &MovementState, &mut Loadout), With<Player>>,
) {
    let Ok((bounds, movement, mut loadout)) = player_query.get_single_mut() else {
        return;
    };

    loadout.fire_cooldown = loadout.fire_cooldown.saturating_sub(1);
    if !actions.shoot || !loadout.has_weapon || loadout.fire_cooldown > 0 {
        return;
    }

    let front = match movement.facing {
        Facing::Right => bounds.0.right(),
        Facing::Left => bounds.0.left(),
    };
    spawn_projectile(
        &mut commands,
        &mut ids,
        Vec2::new(front, bounds.0.center().y),
        Vec2::new(movement.facing.sign() * config.projectile_speed, 0.0),
        Faction::Player,
        config.projectile_size(),
    );
    loadout.fire_cooldown = config.fire_cooldown_ticks;
}

/// Move projectiles and drop those that left the level or hit geometry.
fn advance_projectiles(
    mut commands: Commands,
    level: Res<LevelBounds>,
    mut projectiles: Query<(Entity, &mut Bounds, &Projectile)>,
    solids: Query<(&Bounds, Option<&Firewall>), (With<Solid>, Without<Projectile>)>,
) {
    for (entity, mut bounds, projectile) in projectiles.iter_mut() {
        bounds.0 = bounds.0.translated(projectile.velocity);

        let outside = !level.contains(bounds.0.center());
        let blocked = solids
            .iter()
            .filter(|(_, firewall)| firewall.map_or(true, |f| f.active))
            .any(|(solid, _)| solid.0.overlaps(&bounds.0));

        if outside || blocked {
            commands.entity(entity).despawn();
        }
    }
}

/// Apply projectile hits to hostiles and the player.
///
/// A projectile hits at most one target. A hostile killed earlier in the
/// same pass is no longer a target.
fn resolve_projectile_hits(
    mut commands: Commands,
    mut registry: ResMut<EntityRegistry>,
    projectiles: Query<(Entity, &Bounds, &Projectile)>,
    mut hostiles: Query<
        (Entity, &WorldId, &Bounds, &mut Health, Option<&Boss>),
        (With<Enemy>, Without<Projectile>),
    >,
    player_query: Query<&Bounds, (With<Player>, Without<Enemy>, Without<Projectile>)>,
    mut damage_events: EventWriter<DamageEvent>,
    mut defeated_events: EventWriter<EnemyDefeatedEvent>,
) {
    let player = player_query.get_single().ok().map(|bounds| bounds.0);
    let mut killed = HashSet::new();

    for (shot, shot_bounds, projectile) in projectiles.iter() {
        match projectile.faction {
            Faction::Player => {
                for (entity, id, bounds, mut health, boss) in hostiles.iter_mut() {
                    if killed.contains(&entity) || !bounds.0.overlaps(&shot_bounds.0) {
                        continue;
                    }

                    health.take_damage(1);
                    commands.entity(shot).despawn();

                    if health.is_dead() {
                        killed.insert(entity);
                        registry.remove(id.0);
                        commands.entity(entity).despawn_recursive();
                        info!("Hostile {} defeated", id.0);
                        defeated_events.send(EnemyDefeatedEvent {
                            id: id.0,
                            position: bounds.0.center(),
                            was_boss: boss.is_some(),
                            gate_id: boss.and_then(|b| b.gate_id),
                        });
                    }
                    break;
                }
            }
            Faction::Hostile => {
                if player.is_some_and(|p| p.overlaps(&shot_bounds.0)) {
                    commands.entity(shot).despawn();
                    damage_events.send(DamageEvent {
                        source: shot,
                        cause: DamageCause::Projectile,
                    });
                }
            }
        }
    }
}

/// Touching a hostile body hurts.
fn detect_contact_damage(
    player_query: Query<&Bounds, With<Player>>,
    hostiles: Query<(Entity, &Bounds), (With<Enemy>, Without<Player>)>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    for (entity, bounds) in hostiles.iter() {
        if player.0.overlaps(&bounds.0) {
            damage_events.send(DamageEvent {
                source: entity,
                cause: DamageCause::Contact,
            });
        }
    }
}

/// Apply damage to the player, in the order it arrived.
fn apply_player_damage(
    config: Res<SimConfig>,
    level: Res<LevelBounds>,
    mut damage_events: EventReader<DamageEvent>,
    mut player_query: Query<(&mut Bounds, &mut MovementState, &mut Survival), With<Player>>,
) {
    let Ok((mut bounds, mut movement, mut survival)) = player_query.get_single_mut() else {
        damage_events.clear();
        return;
    };

    for event in damage_events.read() {
        if survival.lives == 0 {
            continue;
        }
        match survival.take_hit(&config) {
            HitOutcome::Ignored => {}
            HitOutcome::ShieldAbsorbed => {
                info!("Shield absorbed {:?} damage", event.cause);
            }
            HitOutcome::LifeLost { remaining } => {
                info!(
                    "Player hit by {:?} ({:?}), {} lives left",
                    event.source, event.cause, remaining
                );
                if remaining > 0 {
                    respawn(&mut bounds, &mut movement, &mut survival, level.spawn, &config);
                }
            }
        }
    }
}
