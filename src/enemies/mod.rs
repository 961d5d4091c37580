//! Enemies module - hostile components and AI.

mod ai;
mod components;
mod plugin;

pub use components::*;
pub use plugin::EnemyPlugin;
