//! Level data structures and RON loading.
//!
//! A level file is the immutable template the live world is rebuilt from on
//! every reset: the world size, the player's spawn point, and an ordered list
//! of entity records.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use super::components::EntityKind;
use super::error::DataLoadError;

/// Directory scanned for level files at startup.
pub const LEVELS_DIR: &str = "assets/data/levels";

/// Level compiled into the binary, used when no level file can be loaded.
const EMBEDDED_LEVEL: &str = include_str!("../../assets/data/levels/level1.ron");

/// Effects a power-up container can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum PowerUpEffect {
    Weapon,
    Shield,
    Invincibility,
    ExtraLife,
}

impl PowerUpEffect {
    /// The full effect set, in draw order.
    pub const ALL: [PowerUpEffect; 4] = [
        PowerUpEffect::Weapon,
        PowerUpEffect::Shield,
        PowerUpEffect::Invincibility,
        PowerUpEffect::ExtraLife,
    ];
}

/// Kind-specific part of an entity record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum EntityKindDef {
    Platform,
    /// Collidable wall that a console can switch off
    Firewall,
    Console {
        #[serde(default)]
        linked_id: Option<u32>,
        #[serde(default)]
        message: String,
    },
    /// Collectible data log
    Log {
        message: String,
    },
    PowerUp {
        #[serde(default)]
        effect: Option<PowerUpEffect>,
    },
    Goal,
    PatrolEnemy {
        patrol_start: f32,
        patrol_end: f32,
        #[serde(default)]
        speed: Option<f32>,
        #[serde(default)]
        health: Option<u32>,
    },
    Shooter {
        #[serde(default)]
        fire_range: Option<f32>,
        #[serde(default)]
        initial_cooldown: Option<u32>,
        #[serde(default)]
        health: Option<u32>,
    },
    Boss {
        health: u32,
        /// Player x position that wakes the boss
        activation_x: f32,
        min_y: f32,
        max_y: f32,
        /// Firewall that seals the arena while the boss lives
        #[serde(default)]
        gate_id: Option<u32>,
        /// Mentor message shown when the fight starts
        #[serde(default)]
        message: Option<String>,
    },
}

impl EntityKindDef {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityKindDef::Platform => EntityKind::Platform,
            EntityKindDef::Firewall => EntityKind::Firewall,
            EntityKindDef::Console { .. } => EntityKind::Console,
            EntityKindDef::Log { .. } => EntityKind::Log,
            EntityKindDef::PowerUp { .. } => EntityKind::PowerUp,
            EntityKindDef::Goal => EntityKind::Goal,
            EntityKindDef::PatrolEnemy { .. } => EntityKind::PatrolEnemy,
            EntityKindDef::Shooter { .. } => EntityKind::Shooter,
            EntityKindDef::Boss { .. } => EntityKind::Boss,
        }
    }

    /// Id of the firewall this record links to, if any.
    pub fn linked_firewall(&self) -> Option<u32> {
        match self {
            EntityKindDef::Console { linked_id, .. } => *linked_id,
            EntityKindDef::Boss { gate_id, .. } => *gate_id,
            _ => None,
        }
    }
}

/// One world object in a level file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityRecord {
    /// Unique within the level
    pub id: u32,
    /// (x, y, width, height), top-left origin, y down
    pub bounds: (f32, f32, f32, f32),
    pub kind: EntityKindDef,
}

/// A complete level definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub width: f32,
    pub height: f32,
    /// Top-left corner of the player's box on spawn and respawn
    pub player_start: (f32, f32),
    pub entities: Vec<EntityRecord>,
}

impl LevelDefinition {
    /// Parse a level from RON text. `source` is only used in error messages.
    pub fn from_ron(contents: &str, source: &str) -> Result<Self, DataLoadError> {
        ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: source.to_string(),
            details: e.to_string(),
        })
    }

    /// Read and parse a level file.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(DataLoadError::FileNotFound(display));
        }
        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;
        Self::from_ron(&contents, &display)
    }

    /// The level compiled into the binary.
    pub fn embedded() -> Result<Self, DataLoadError> {
        Self::from_ron(EMBEDDED_LEVEL, "<embedded level1>")
    }

    /// Drop records that cannot be simulated and report every issue found.
    ///
    /// Records with non-positive bounds and records repeating an earlier id
    /// are removed. Links that do not reference a firewall are kept; the
    /// device holding them simply never does anything.
    pub fn sanitize(&mut self) -> Vec<DataLoadError> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        self.entities.retain(|record| {
            let (_, _, w, h) = record.bounds;
            if !(w > 0.0 && h > 0.0) {
                issues.push(DataLoadError::InvalidBounds { id: record.id, w, h });
                return false;
            }
            if !seen.insert(record.id) {
                issues.push(DataLoadError::DuplicateId { id: record.id });
                return false;
            }
            true
        });

        let firewalls: HashSet<u32> = self
            .entities
            .iter()
            .filter(|record| record.kind == EntityKindDef::Firewall)
            .map(|record| record.id)
            .collect();

        for record in &self.entities {
            if let Some(linked_id) = record.kind.linked_firewall() {
                if !firewalls.contains(&linked_id) {
                    issues.push(DataLoadError::DanglingLink { id: record.id, linked_id });
                }
            }
        }

        issues
    }

    pub fn record(&self, id: u32) -> Option<&EntityRecord> {
        self.entities.iter().find(|record| record.id == id)
    }

    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.player_start.0, self.player_start.1)
    }
}

/// Resource storing all loaded level templates, keyed by file stem.
#[derive(Resource, Default)]
pub struct LevelRegistry {
    pub levels: HashMap<String, LevelDefinition>,
}

impl LevelRegistry {
    /// Get a level by name.
    pub fn get(&self, name: &str) -> Option<&LevelDefinition> {
        self.levels.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, level: LevelDefinition) {
        self.levels.insert(name.into(), level);
    }
}

/// Resource indicating which level to play.
#[derive(Resource)]
pub struct CurrentLevel {
    pub name: String,
}

impl Default for CurrentLevel {
    fn default() -> Self {
        Self {
            name: "level1".to_string(),
        }
    }
}

/// Parse, sanitize and log one level, keeping it only if it parsed.
fn register_level(registry: &mut LevelRegistry, key: String, loaded: Result<LevelDefinition, DataLoadError>) {
    match loaded {
        Ok(mut level) => {
            for issue in level.sanitize() {
                warn!("Level '{}': {}", key, issue);
            }
            info!("Loaded level '{}' ({} entities)", level.name, level.entities.len());
            registry.insert(key, level);
        }
        Err(e) => {
            error!("Failed to load level '{}': {}", key, e);
        }
    }
}

/// Load all level files from assets/data/levels/.
///
/// Falls back to the embedded level when the current level is missing.
pub fn load_level_definitions(mut commands: Commands, current_level: Res<CurrentLevel>) {
    let mut registry = LevelRegistry::default();
    let levels_dir = Path::new(LEVELS_DIR);

    match fs::read_dir(levels_dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "ron") {
                    let key = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("unknown")
                        .to_string();
                    register_level(&mut registry, key, LevelDefinition::load(&path));
                }
            }
        }
        Err(e) => {
            warn!("Level directory {:?} not readable: {}", levels_dir, e);
        }
    }

    if registry.get(&current_level.name).is_none() {
        warn!(
            "Level '{}' not found on disk, using the embedded level",
            current_level.name
        );
        register_level(&mut registry, current_level.name.clone(), LevelDefinition::embedded());
    }

    commands.insert_resource(registry);
}
