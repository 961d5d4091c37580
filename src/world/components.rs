//! World object components.

use bevy::prelude::*;
use serde::Serialize;

use super::data::PowerUpEffect;
use super::geometry::Aabb;

/// Marker for everything that belongs to the live level and is despawned on
/// reset: world objects, the player, projectiles and particles.
#[derive(Component)]
pub struct LevelEntity;

/// Id of a world object, unique within one level.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldId(pub u32);

/// Bounding box of anything that takes part in collision or overlap tests.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Bounds(pub Aabb);

/// What a world object is.
#[derive(Component, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Platform,
    Firewall,
    Console,
    Log,
    PowerUp,
    Goal,
    PatrolEnemy,
    Shooter,
    Boss,
}

/// Marker for objects the player cannot pass through.
///
/// Firewalls carry it too but only block while active.
#[derive(Component)]
pub struct Solid;

/// Hazard wall toggled off by its console.
#[derive(Component, Debug, Clone)]
pub struct Firewall {
    pub active: bool,
}

impl Default for Firewall {
    fn default() -> Self {
        Self { active: true }
    }
}

/// Interactive device that switches off a linked firewall.
#[derive(Component, Debug, Clone)]
pub struct Console {
    pub linked_id: Option<u32>,
    pub activated: bool,
    pub message: String,
}

/// Data log picked up on contact.
#[derive(Component, Debug, Clone)]
pub struct Collectible {
    pub collected: bool,
    pub message: String,
}

/// Solid block that grants an effect once.
#[derive(Component, Debug, Clone)]
pub struct PowerUpBox {
    /// Assigned effect, if the level data fixed one
    pub effect: Option<PowerUpEffect>,
    pub hit: bool,
}

/// Level exit, unlocked by the boss's defeat.
#[derive(Component, Debug, Clone, Default)]
pub struct Goal {
    pub active: bool,
    pub reached: bool,
}
