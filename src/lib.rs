//! Firewall Breach - a side-scrolling 2D platformer simulation in Bevy.
//!
//! A hacker avatar runs and jumps through a network sector, disables
//! firewalls from consoles, collects data logs and power-ups, and defeats
//! the sector's boss to unlock the exit.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, tick ordering, config, randomness
//! - **Player**: Input mapping, movement, collision, survival rules
//! - **Enemies**: Patrol, shooter and boss behaviour
//! - **Combat**: Projectiles, hits, damage and defeat particles
//! - **World**: Level data, world objects, interactions
//! - **Camera**: Side-scrolling viewport
//! - **UI**: Frame snapshot, narrative messages, HUD
//!
//! The simulation is deterministic: it only advances in `FixedUpdate`, counts
//! every gameplay timer in ticks and draws randomness from a seeded source.

pub mod camera;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;
pub mod ui;
pub mod world;

#[cfg(test)]
mod scenarios;
#[cfg(test)]
mod test_support;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
///
/// Requires `StatesPlugin` (part of `DefaultPlugins`) to be added first.
pub struct FirewallBreachPlugin;

impl Plugin for FirewallBreachPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Camera
            .add_plugins(camera::CameraPlugin)

            // Presentation data
            .add_plugins(ui::UiPlugin);
    }
}
