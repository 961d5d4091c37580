//! Enemy AI behavior systems.

use bevy::prelude::*;

use super::components::{burst_velocities, Boss, Enemy, Patrol, Shooter};
use crate::combat::{spawn_projectile, Faction, ProjectileIds};
use crate::core::{NarrativeEvent, SimConfig};
use crate::player::Player;
use crate::world::{Bounds, EntityRegistry, Firewall, WorldId};

/// -1 when `target` is left of `from`, otherwise +1.
fn side_of(from: f32, target: f32) -> f32 {
    if target < from {
        -1.0
    } else {
        1.0
    }
}

/// Walk patrolling enemies along their range.
pub fn patrol_ai(mut enemy_query: Query<(&mut Bounds, &mut Patrol), With<Enemy>>) {
    for (mut bounds, mut patrol) in enemy_query.iter_mut() {
        bounds.0.x = patrol.advance(bounds.0.x);
    }
}

/// Fire at the player when they come within range and the gun is ready.
pub fn shooter_ai(
    mut commands: Commands,
    config: Res<SimConfig>,
    mut ids: ResMut<ProjectileIds>,
    player_query: Query<&Bounds, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<(&Bounds, &mut Shooter), (With<Enemy>, Without<Player>)>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    let target = player.0.center();

    for (bounds, mut shooter) in enemy_query.iter_mut() {
        shooter.cooldown = shooter.cooldown.saturating_sub(1);
        if shooter.cooldown > 0 {
            continue;
        }

        let origin = bounds.0.center();
        if (target.x - origin.x).abs() > shooter.fire_range {
            continue;
        }

        spawn_projectile(
            &mut commands,
            &mut ids,
            origin,
            Vec2::new(side_of(origin.x, target.x) * config.hostile_projectile_speed, 0.0),
            Faction::Hostile,
            config.projectile_size(),
        );
        shooter.cooldown = config.shooter_cooldown_ticks;
    }
}

/// Wake, move and fire the boss.
///
/// A sleeping boss wakes once the player passes its activation line while
/// its gate firewall is still up. A boss without a usable gate only needs
/// the activation line.
pub fn boss_ai(
    mut commands: Commands,
    config: Res<SimConfig>,
    registry: Res<EntityRegistry>,
    mut ids: ResMut<ProjectileIds>,
    firewalls: Query<&Firewall>,
    player_query: Query<&Bounds, (With<Player>, Without<Enemy>)>,
    mut boss_query: Query<(&WorldId, &mut Bounds, &mut Boss), (With<Enemy>, Without<Player>)>,
    mut narrative: EventWriter<NarrativeEvent>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };

    for (id, mut bounds, mut boss) in boss_query.iter_mut() {
        if !boss.active {
            let gate_up = boss
                .gate_id
                .and_then(|gate| registry.get(gate))
                .and_then(|entity| firewalls.get(entity).ok())
                .map_or(true, |firewall| firewall.active);

            if player.0.x >= boss.activation_x && gate_up {
                boss.active = true;
                boss.fire_cooldown = config.boss_fire_cooldown_ticks;
                info!("Boss {} activated", id.0);
                if let Some(message) = &boss.message {
                    narrative.send(NarrativeEvent {
                        message_id: id.0,
                        text: message.clone(),
                    });
                }
            }
            continue;
        }

        bounds.0.y = boss.oscillate(bounds.0.y, config.boss_speed);

        boss.fire_cooldown = boss.fire_cooldown.saturating_sub(1);
        if boss.fire_cooldown > 0 {
            continue;
        }

        let origin = bounds.0.center();
        let direction = side_of(origin.x, player.0.center().x);
        for velocity in burst_velocities(
            config.boss_burst,
            direction,
            config.hostile_projectile_speed,
            config.boss_spread,
        ) {
            spawn_projectile(
                &mut commands,
                &mut ids,
                origin,
                velocity,
                Faction::Hostile,
                config.projectile_size(),
            );
        }
        boss.fire_cooldown = config.boss_fire_cooldown_ticks;
    }
}
