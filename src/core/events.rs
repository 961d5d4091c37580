//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate within a tick. For example,
//! the projectile system sends DamageEvents, and the survival system receives
//! them to apply shield, invincibility and life loss rules.

use bevy::prelude::*;

/// What caused a damaging contact with the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageCause {
    /// Body overlap with a hostile actor
    Contact,
    /// A hostile projectile reached the player
    Projectile,
}

/// Sent when something hostile touches the player.
///
/// The survival system listens for these and decides whether the hit is
/// ignored, absorbed by a shield, or costs a life.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    /// Entity that caused the damage
    pub source: Entity,
    pub cause: DamageCause,
}

/// Sent when a hostile's health reaches zero and it leaves the world.
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyDefeatedEvent {
    /// Level id of the defeated hostile
    pub id: u32,
    /// Centre of the hostile's box at the moment of defeat
    pub position: Vec2,
    pub was_boss: bool,
    /// Firewall guarding the boss arena, if any
    pub gate_id: Option<u32>,
}

/// Side of a solid that the player touched while resolving movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactSide {
    /// Player moved right into the solid's left face
    Left,
    /// Player moved left into the solid's right face
    Right,
    /// Player landed on the solid
    Top,
    /// Player moved up into the solid's underside
    Underside,
}

/// Sent by the collision resolver for every solid that clamped the player's
/// movement this tick.
#[derive(Event, Debug, Clone, Copy)]
pub struct SolidContactEvent {
    pub entity: Entity,
    pub side: ContactSide,
}

/// A narrative message for the message dispatcher.
///
/// The core only sends these; display and timeout belong to the consumer.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct NarrativeEvent {
    /// Level id of the entity whose trigger fired
    pub message_id: u32,
    pub text: String,
}
