//! World module - geometry, level data, world objects and interactions.

mod components;
mod data;
mod error;
mod geometry;
mod interaction;
mod plugin;
mod registry;
mod spawning;

pub use components::*;
pub use data::{
    load_level_definitions, CurrentLevel, EntityKindDef, EntityRecord, LevelDefinition,
    LevelRegistry, PowerUpEffect, LEVELS_DIR,
};
pub use error::DataLoadError;
pub use geometry::Aabb;
pub use interaction::choose_effect;
pub use plugin::{setup_level, WorldPlugin};
pub use registry::{EntityRegistry, LevelBounds};
pub use spawning::{spawn_player, spawn_world_entity};
