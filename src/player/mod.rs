//! Player module - player entity, movement, collision and survival.

mod collision;
mod components;
mod input;
mod movement;
mod plugin;
mod survival;

pub use collision::{resolve_motion, Resolution, SolidBox};
pub use components::*;
pub use movement::integrate;
pub use plugin::PlayerPlugin;
pub use survival::{apply_power_up, respawn, HitOutcome};
