//! Combat-related components.

use bevy::prelude::*;
use serde::Serialize;

/// Component for entities that can take damage.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: u32,
    pub maximum: u32,
}

impl Health {
    /// Full health. Anything spawned with health takes at least one hit.
    pub fn new(max: u32) -> Self {
        let max = max.max(1);
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Returns the damage actually dealt.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Faction {
    /// Hurts hostiles
    Player,
    /// Hurts the player
    Hostile,
}

/// A moving shot. Its box lives in `Bounds`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    pub id: u32,
    /// Pixels per tick
    pub velocity: Vec2,
    pub faction: Faction,
}

/// Source of projectile ids, reset with the level.
#[derive(Resource, Debug, Default)]
pub struct ProjectileIds {
    next: u32,
}

impl ProjectileIds {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Cosmetic debris left behind by a defeated hostile.
#[derive(Component, Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining ticks
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    /// Fades linearly from 1 to 0 over the particle's life.
    pub fn opacity(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        self.life as f32 / self.max_life as f32
    }
}
