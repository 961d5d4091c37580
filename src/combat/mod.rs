//! Combat module - projectiles, hits, damage and defeat particles.

mod components;
mod particles;
mod plugin;
mod systems;

pub use components::*;
pub use particles::ring_velocities;
pub use plugin::CombatPlugin;
pub use systems::spawn_projectile;
