//! Tick ordering for the simulation.

use bevy::prelude::*;

/// System set ordering for one simulation tick.
///
/// The sets run chained in `FixedUpdate`; each stage reads the positions the
/// previous stages wrote during the same tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Clock, timers, player integration
    Physics,
    /// Player vs static geometry, falling out of the level
    Collision,
    /// Enemy and boss behaviour
    Ai,
    /// Weapon fire, projectile flight and hits, damage, particles
    Projectiles,
    /// Pickups, consoles, logs, goal
    Interaction,
    Camera,
    /// Terminal state evaluation
    Outcome,
    /// Presentation snapshot
    Publish,
}

/// Number of ticks simulated since the level was last reset.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SimClock {
    pub tick: u64,
}

pub(crate) fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.tick += 1;
}
