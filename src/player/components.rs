//! Player-related components.

use bevy::prelude::*;
use serde::Serialize;

use crate::world::Aabb;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Direction the player last moved in; shots leave on this side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Tracks player movement state for physics.
#[derive(Component, Debug, Clone, Copy)]
pub struct MovementState {
    /// Pixels per tick, y down
    pub velocity: Vec2,
    pub is_grounded: bool,
    pub facing: Facing,
    /// Box at the start of the tick, before integration
    pub previous: Aabb,
}

/// Lives and protective states.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Survival {
    pub lives: u32,
    pub has_shield: bool,
    /// Remaining ticks of invincibility, 0 when vulnerable
    pub invincible_ticks: u32,
}

impl Survival {
    pub fn new(lives: u32) -> Self {
        Self {
            lives,
            has_shield: false,
            invincible_ticks: 0,
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_ticks > 0
    }
}

/// Weapon possession and fire cooldown.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loadout {
    pub has_weapon: bool,
    /// Ticks until the next shot is allowed
    pub fire_cooldown: u32,
}

/// Abstract actions for the current tick, written by the host before each
/// tick and read by the simulation.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub shoot: bool,
    pub interact: bool,
}

impl ActionSet {
    /// -1, 0 or 1. Opposite directions cancel out.
    pub fn horizontal(&self) -> f32 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
