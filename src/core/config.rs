//! Simulation configuration loaded from external RON file.
//!
//! Every physics constant, timer length and rule policy lives here so the
//! game can be tuned without recompilation. Timers are counted in ticks.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

/// Path of the optional config override file.
pub const SIM_CONFIG_PATH: &str = "assets/data/config/sim_config.ron";

/// Whether a shield and invincibility can be held at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ProtectionPolicy {
    /// Gaining one protection clears the other
    #[default]
    Exclusive,
    /// Both may be held; invincibility is consulted first
    Stacking,
}

/// What happens when a shield absorbs a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ShieldBreakPolicy {
    /// Shield is gone, player is back to normal
    #[default]
    Consume,
    /// Shield is gone and a grace window of invincibility starts
    GraceWindow,
}

/// How a power-up container picks its effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PowerUpSelection {
    /// Use the effect assigned in the level data, drawing one if unassigned
    #[default]
    Fixed,
    /// Always draw uniformly from the effect set
    Random,
}

/// Which contacts with a power-up container trigger it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PowerUpTrigger {
    /// Only striking the underside while moving up
    #[default]
    FromBelow,
    /// Any side the player touches
    AnyContact,
}

/// Simulation configuration loaded from assets/data/config/sim_config.ron.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // Player physics
    pub player_size: (f32, f32),
    pub move_speed: f32,
    /// Horizontal velocity multiplier per tick when no direction is held
    pub friction: f32,
    pub jump_impulse: f32,
    pub gravity: f32,
    pub terminal_velocity: f32,
    // Survival
    pub starting_lives: u32,
    pub grace_ticks: u32,
    pub invincibility_ticks: u32,
    pub protection: ProtectionPolicy,
    pub shield_break: ShieldBreakPolicy,
    // Power-ups
    pub power_up_selection: PowerUpSelection,
    pub power_up_trigger: PowerUpTrigger,
    pub rng_seed: u64,
    // Weapons
    pub fire_cooldown_ticks: u32,
    pub projectile_speed: f32,
    pub projectile_size: (f32, f32),
    pub hostile_projectile_speed: f32,
    // Enemies
    pub patrol_speed: f32,
    pub enemy_health: u32,
    pub shooter_cooldown_ticks: u32,
    pub shooter_range: f32,
    pub boss_speed: f32,
    pub boss_fire_cooldown_ticks: u32,
    pub boss_burst: u32,
    /// Vertical speed difference between neighbouring projectiles of a burst
    pub boss_spread: f32,
    // Camera
    pub viewport_width: f32,
    /// Fraction of the remaining distance the camera covers each tick
    pub camera_smoothing: f32,
    // Cosmetics
    pub particle_count: u32,
    pub particle_life_ticks: u32,
    pub particle_speed: f32,
    /// Wall-clock seconds a narrative message stays on screen
    pub message_seconds: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // Player physics defaults (pixels per tick at 60 Hz)
            player_size: (30.0, 40.0),
            move_speed: 5.0,
            friction: 0.0,
            jump_impulse: 12.0,
            gravity: 0.6,
            terminal_velocity: 15.0,
            // Survival defaults
            starting_lives: 3,
            grace_ticks: 90,
            invincibility_ticks: 300,
            protection: ProtectionPolicy::Exclusive,
            shield_break: ShieldBreakPolicy::Consume,
            // Power-up defaults
            power_up_selection: PowerUpSelection::Fixed,
            power_up_trigger: PowerUpTrigger::FromBelow,
            rng_seed: 0x5eed_f11e,
            // Weapon defaults
            fire_cooldown_ticks: 15,
            projectile_speed: 10.0,
            projectile_size: (10.0, 4.0),
            hostile_projectile_speed: 6.0,
            // Enemy defaults
            patrol_speed: 1.5,
            enemy_health: 1,
            shooter_cooldown_ticks: 120,
            shooter_range: 400.0,
            boss_speed: 2.0,
            boss_fire_cooldown_ticks: 90,
            boss_burst: 3,
            boss_spread: 1.5,
            // Camera defaults
            viewport_width: 800.0,
            camera_smoothing: 0.1,
            // Cosmetic defaults
            particle_count: 8,
            particle_life_ticks: 30,
            particle_speed: 3.0,
            message_seconds: 4.0,
        }
    }
}

impl SimConfig {
    /// Load simulation config from RON file.
    pub fn load() -> Self {
        match fs::read_to_string(SIM_CONFIG_PATH) {
            Ok(contents) => Self::from_ron(&contents).unwrap_or_else(|e| {
                error!("Failed to parse {}: {}. Using defaults.", SIM_CONFIG_PATH, e);
                Self::default()
            }),
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", SIM_CONFIG_PATH, e);
                Self::default()
            }
        }
    }

    /// Parse a config from RON text. Missing fields keep their defaults.
    pub fn from_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.player_size.0, self.player_size.1)
    }

    pub fn projectile_size(&self) -> Vec2 {
        Vec2::new(self.projectile_size.0, self.projectile_size.1)
    }
}

/// System to load the simulation config at startup.
pub fn load_sim_config(mut commands: Commands) {
    let config = SimConfig::load();
    info!(
        "Simulation config: {:?} protection, {:?} shield break, {:?} power-ups ({:?})",
        config.protection, config.shield_break, config.power_up_selection, config.power_up_trigger
    );
    commands.insert_resource(config);
}
