//! Lives, shield and invincibility rules.
//!
//! The protective states obey two policies from `SimConfig`: whether a shield
//! and invincibility may be held together, and whether a broken shield leaves
//! a grace window behind.

use bevy::prelude::*;

use super::components::*;
use crate::core::{ProtectionPolicy, ShieldBreakPolicy, SimConfig};
use crate::world::{Bounds, PowerUpEffect};

/// What a single damaging contact did to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Invincible, nothing happened
    Ignored,
    /// The shield took the hit and is gone
    ShieldAbsorbed,
    /// A life was lost
    LifeLost { remaining: u32 },
}

impl Survival {
    pub fn grant_shield(&mut self, policy: ProtectionPolicy) {
        self.has_shield = true;
        if policy == ProtectionPolicy::Exclusive {
            self.invincible_ticks = 0;
        }
    }

    /// Start (or extend) invincibility for `ticks`.
    pub fn grant_invincibility(&mut self, ticks: u32, policy: ProtectionPolicy) {
        self.invincible_ticks = self.invincible_ticks.max(ticks);
        if policy == ProtectionPolicy::Exclusive {
            self.has_shield = false;
        }
    }

    /// Apply one damaging contact.
    ///
    /// Invincibility is consulted before the shield, so under stacking a
    /// shield survives anything that lands during invincibility.
    pub fn take_hit(&mut self, config: &SimConfig) -> HitOutcome {
        if self.is_invincible() {
            return HitOutcome::Ignored;
        }

        if self.has_shield {
            self.has_shield = false;
            if config.shield_break == ShieldBreakPolicy::GraceWindow {
                self.grant_invincibility(config.grace_ticks, config.protection);
            }
            return HitOutcome::ShieldAbsorbed;
        }

        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            self.grant_invincibility(config.grace_ticks, config.protection);
        }
        HitOutcome::LifeLost {
            remaining: self.lives,
        }
    }

    pub fn tick(&mut self) {
        self.invincible_ticks = self.invincible_ticks.saturating_sub(1);
    }
}

/// Grant a power-up effect to the player.
pub fn apply_power_up(effect: PowerUpEffect, survival: &mut Survival, loadout: &mut Loadout, config: &SimConfig) {
    match effect {
        PowerUpEffect::Weapon => loadout.has_weapon = true,
        PowerUpEffect::Shield => survival.grant_shield(config.protection),
        PowerUpEffect::Invincibility => {
            survival.grant_invincibility(config.invincibility_ticks, config.protection)
        }
        PowerUpEffect::ExtraLife => survival.lives = survival.lives.saturating_add(1),
    }
}

/// Put the player back at the spawn point, at rest, inside a grace window.
pub fn respawn(
    bounds: &mut Bounds,
    movement: &mut MovementState,
    survival: &mut Survival,
    spawn: Vec2,
    config: &SimConfig,
) {
    bounds.0.x = spawn.x;
    bounds.0.y = spawn.y;
    movement.velocity = Vec2::ZERO;
    movement.is_grounded = false;
    movement.previous = bounds.0;
    survival.grant_invincibility(config.grace_ticks, config.protection);
}

/// Count down invincibility once per tick.
pub fn tick_protection(mut player_query: Query<&mut Survival, With<Player>>) {
    for mut survival in player_query.iter_mut() {
        survival.tick();
    }
}
