//! Cosmetic particle bursts.
//!
//! Particles never touch gameplay state and draw no random numbers, so they
//! cannot perturb the seeded simulation.

use bevy::prelude::*;
use std::f32::consts::TAU;

use super::components::Particle;
use crate::core::{EnemyDefeatedEvent, SimConfig};
use crate::world::LevelEntity;

/// Evenly spaced velocities on a ring, starting straight right.
pub fn ring_velocities(count: u32, speed: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| Vec2::from_angle(TAU * i as f32 / count as f32) * speed)
        .collect()
}

/// Burst where each hostile fell.
pub fn spawn_defeat_particles(
    mut commands: Commands,
    config: Res<SimConfig>,
    mut defeated_events: EventReader<EnemyDefeatedEvent>,
) {
    for event in defeated_events.read() {
        for velocity in ring_velocities(config.particle_count, config.particle_speed) {
            commands.spawn((
                LevelEntity,
                Particle {
                    position: event.position,
                    velocity,
                    life: config.particle_life_ticks,
                    max_life: config.particle_life_ticks,
                },
            ));
        }
    }
}

/// Drift and fade; despawn when spent.
pub fn update_particles(mut commands: Commands, mut particles: Query<(Entity, &mut Particle)>) {
    for (entity, mut particle) in particles.iter_mut() {
        let velocity = particle.velocity;
        particle.position += velocity;
        particle.life = particle.life.saturating_sub(1);
        if particle.life == 0 {
            commands.entity(entity).despawn();
        }
    }
}
