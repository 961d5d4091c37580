//! Read-only view of the world for presentation and tooling.
//!
//! Rebuilt at the end of every tick; consumers never touch the simulation's
//! components directly.

use bevy::prelude::*;
use serde::Serialize;

use crate::camera::CameraState;
use crate::combat::{Faction, Health, Particle, Projectile};
use crate::core::{GameState, SimClock};
use crate::enemies::Boss;
use crate::player::{Facing, Loadout, MovementState, Player, Survival};
use crate::world::*;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub bounds: Aabb,
    pub velocity: (f32, f32),
    pub facing: Facing,
    pub grounded: bool,
    pub lives: u32,
    pub has_shield: bool,
    pub invincible_ticks: u32,
    pub has_weapon: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EntityView {
    pub id: u32,
    pub kind: EntityKind,
    pub bounds: Aabb,
    /// Firewall blocking, or goal unlocked
    pub active: bool,
    /// One-shot object already used
    pub spent: bool,
    pub health: Option<u32>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProjectileView {
    pub id: u32,
    pub bounds: Aabb,
    pub faction: Faction,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ParticleView {
    pub position: (f32, f32),
    pub opacity: f32,
}

/// Everything a renderer needs to draw one frame.
#[derive(Resource, Serialize, Debug, Clone, Default, PartialEq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub state: GameState,
    pub camera_offset: f32,
    pub player: Option<PlayerView>,
    /// Sorted by id
    pub entities: Vec<EntityView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    /// Current and maximum health of the first living boss
    pub boss_health: Option<(u32, u32)>,
}

impl FrameSnapshot {
    pub fn entity(&self, id: u32) -> Option<&EntityView> {
        self.entities.iter().find(|view| view.id == id)
    }
}

type WorldObjectQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static WorldId,
        &'static EntityKind,
        &'static Bounds,
        Option<&'static Firewall>,
        Option<&'static Console>,
        Option<&'static Collectible>,
        Option<&'static PowerUpBox>,
        Option<&'static Goal>,
        Option<&'static Health>,
    ),
>;

#[allow(clippy::too_many_arguments)]
pub fn publish_snapshot(
    clock: Res<SimClock>,
    state: Res<State<GameState>>,
    next_state: Res<NextState<GameState>>,
    camera: Res<CameraState>,
    player_query: Query<(&Bounds, &MovementState, &Survival, &Loadout), With<Player>>,
    world_objects: WorldObjectQuery,
    bosses: Query<&Health, With<Boss>>,
    projectiles: Query<(&Bounds, &Projectile)>,
    particles: Query<&Particle>,
    mut snapshot: ResMut<FrameSnapshot>,
) {
    // A decision taken this tick is reported before the transition runs.
    let state = match *next_state {
        NextState::Pending(pending) => pending,
        NextState::Unchanged => *state.get(),
    };

    let player = player_query
        .get_single()
        .ok()
        .map(|(bounds, movement, survival, loadout)| PlayerView {
            bounds: bounds.0,
            velocity: (movement.velocity.x, movement.velocity.y),
            facing: movement.facing,
            grounded: movement.is_grounded,
            lives: survival.lives,
            has_shield: survival.has_shield,
            invincible_ticks: survival.invincible_ticks,
            has_weapon: loadout.has_weapon,
        });

    let mut entities: Vec<EntityView> = world_objects
        .iter()
        .map(
            |(id, kind, bounds, firewall, console, log, power_up, goal, health)| EntityView {
                id: id.0,
                kind: *kind,
                bounds: bounds.0,
                active: firewall.is_some_and(|f| f.active) || goal.is_some_and(|g| g.active),
                spent: console.is_some_and(|c| c.activated)
                    || log.is_some_and(|l| l.collected)
                    || power_up.is_some_and(|p| p.hit)
                    || goal.is_some_and(|g| g.reached),
                health: health.map(|h| h.current),
            },
        )
        .collect();
    entities.sort_by_key(|view| view.id);

    let mut projectile_views: Vec<ProjectileView> = projectiles
        .iter()
        .map(|(bounds, projectile)| ProjectileView {
            id: projectile.id,
            bounds: bounds.0,
            faction: projectile.faction,
        })
        .collect();
    projectile_views.sort_by_key(|view| view.id);

    *snapshot = FrameSnapshot {
        tick: clock.tick,
        state,
        camera_offset: camera.offset,
        player,
        entities,
        projectiles: projectile_views,
        particles: particles
            .iter()
            .map(|p| ParticleView {
                position: (p.position.x, p.position.y),
                opacity: p.opacity(),
            })
            .collect(),
        boss_health: bosses.iter().next().map(|h| (h.current, h.maximum)),
    };
}
