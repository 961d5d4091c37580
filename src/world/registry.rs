//! Lookup of live world objects by level id.

use bevy::prelude::*;
use std::collections::HashMap;

/// Maps level ids to the entities spawned for them.
///
/// Rebuilt from scratch on every level reset. Hostiles are removed when they
/// die; everything else stays registered for the life of the level.
#[derive(Resource, Debug, Default)]
pub struct EntityRegistry {
    by_id: HashMap<u32, Entity>,
}

impl EntityRegistry {
    pub fn insert(&mut self, id: u32, entity: Entity) {
        self.by_id.insert(id, entity);
    }

    /// Entity registered for `id`; a missing id is simply no match.
    pub fn get(&self, id: u32) -> Option<Entity> {
        self.by_id.get(&id).copied()
    }

    pub fn remove(&mut self, id: u32) -> Option<Entity> {
        self.by_id.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
    }
}

/// Extent and spawn point of the level currently being played.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LevelBounds {
    pub width: f32,
    pub height: f32,
    pub spawn: Vec2,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            spawn: Vec2::ZERO,
        }
    }
}

impl LevelBounds {
    /// Whether a point lies within `[0, width] x [0, height]`.
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}
