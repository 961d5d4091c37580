//! Enemy-related components.

use bevy::prelude::*;

/// Marker component for all hostiles. Touching one hurts the player.
#[derive(Component)]
pub struct Enemy;

/// Walks back and forth between two x positions.
///
/// The range bounds the left edge of the enemy's box.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    pub start: f32,
    pub end: f32,
    /// +1 towards `end`, -1 towards `start`
    pub direction: f32,
    pub speed: f32,
}

impl Patrol {
    /// Next x position from `x`, turning around at either bound.
    pub fn advance(&mut self, x: f32) -> f32 {
        let next = x + self.direction * self.speed;
        if self.direction > 0.0 && next >= self.end {
            self.direction = -1.0;
            self.end
        } else if self.direction < 0.0 && next <= self.start {
            self.direction = 1.0;
            self.start
        } else {
            next
        }
    }
}

/// Stationary turret that fires along the ground at the player.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Shooter {
    /// Ticks until the next shot
    pub cooldown: u32,
    /// Maximum horizontal distance between centres to open fire
    pub fire_range: f32,
}

/// Multi-hit boss guarding the goal.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Boss {
    pub active: bool,
    /// Player x position that wakes the boss
    pub activation_x: f32,
    /// Top-edge bounds of the vertical oscillation
    pub min_y: f32,
    pub max_y: f32,
    /// +1 moving down, -1 moving up
    pub direction: f32,
    pub fire_cooldown: u32,
    pub gate_id: Option<u32>,
    pub message: Option<String>,
}

impl Boss {
    /// Next y position from `y` at `speed`, reversing at either bound.
    pub fn oscillate(&mut self, y: f32, speed: f32) -> f32 {
        let next = y + self.direction * speed;
        if next <= self.min_y {
            self.direction = 1.0;
            self.min_y
        } else if next >= self.max_y {
            self.direction = -1.0;
            self.max_y
        } else {
            next
        }
    }
}

/// Velocities of a burst of `count` shots fanned out vertically around a
/// horizontal line of fire.
pub fn burst_velocities(count: u32, direction: f32, speed: f32, spread: f32) -> Vec<Vec2> {
    let count = count.max(1);
    let middle = (count - 1) as f32 / 2.0;
    (0..count)
        .map(|i| Vec2::new(direction * speed, (i as f32 - middle) * spread))
        .collect()
}
