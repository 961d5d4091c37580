//! Per-axis AABB resolution of the player against solid geometry.
//!
//! The horizontal displacement is resolved first from the previous box, then
//! the vertical displacement from the horizontally corrected box. Each pass
//! sweeps the box along its axis and stops it at the nearest edge in the way,
//! so no displacement can carry the player through a solid.

use bevy::prelude::*;

use super::components::*;
use super::survival::respawn;
use crate::core::{ContactSide, SimConfig, SolidContactEvent};
use crate::world::{Aabb, Bounds, Firewall, LevelBounds, Solid};

/// Tolerance for treating an edge as touching.
const EDGE_EPSILON: f32 = 1e-3;

/// A collidable box and the entity it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct SolidBox {
    pub entity: Entity,
    pub bounds: Aabb,
}

/// Outcome of resolving one tick of movement.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub bounds: Aabb,
    pub velocity: Vec2,
    /// Set only when this tick's vertical pass landed on something
    pub grounded: bool,
    /// Every solid that clamped the movement, with the side touched
    pub contacts: Vec<(Entity, ContactSide)>,
}

/// Sweep a box starting at `start` with size `extent` along one axis by
/// `delta`.
///
/// `candidates` yields each solid's low and high edge on that axis. Returns
/// the stopping position and the entities whose edge produced it.
fn sweep(
    start: f32,
    extent: f32,
    delta: f32,
    candidates: impl Iterator<Item = (Entity, f32, f32)>,
) -> (f32, Vec<Entity>) {
    let mut target = start + delta;
    let mut stops: Vec<(Entity, f32)> = Vec::new();

    for (entity, near, far) in candidates {
        if delta > 0.0 {
            let lead = start + extent;
            if near >= lead - EDGE_EPSILON && near < lead + delta {
                let stop = near - extent;
                target = target.min(stop);
                stops.push((entity, stop));
            }
        } else if far <= start + EDGE_EPSILON && far > start + delta {
            target = target.max(far);
            stops.push((entity, far));
        }
    }

    let blockers = stops
        .into_iter()
        .filter(|(_, stop)| (stop - target).abs() <= EDGE_EPSILON)
        .map(|(entity, _)| entity)
        .collect();
    (target, blockers)
}

/// Resolve one tick of movement from `previous` with `velocity`.
///
/// `previous` is assumed not to overlap any solid.
pub fn resolve_motion(previous: Aabb, velocity: Vec2, solids: &[SolidBox]) -> Resolution {
    let mut bounds = previous;
    let mut velocity = velocity;
    let mut grounded = false;
    let mut contacts = Vec::new();

    if velocity.x != 0.0 {
        let candidates = solids
            .iter()
            .filter(|solid| previous.overlaps_y(&solid.bounds))
            .map(|solid| (solid.entity, solid.bounds.left(), solid.bounds.right()));
        let (x, blockers) = sweep(previous.x, previous.w, velocity.x, candidates);
        if !blockers.is_empty() {
            let side = if velocity.x > 0.0 { ContactSide::Left } else { ContactSide::Right };
            contacts.extend(blockers.into_iter().map(|entity| (entity, side)));
            velocity.x = 0.0;
        }
        bounds.x = x;
    }

    if velocity.y != 0.0 {
        let corrected = bounds;
        let candidates = solids
            .iter()
            .filter(|solid| corrected.overlaps_x(&solid.bounds))
            .map(|solid| (solid.entity, solid.bounds.top(), solid.bounds.bottom()));
        let (y, blockers) = sweep(previous.y, previous.h, velocity.y, candidates);
        if !blockers.is_empty() {
            let side = if velocity.y > 0.0 {
                grounded = true;
                ContactSide::Top
            } else {
                ContactSide::Underside
            };
            contacts.extend(blockers.into_iter().map(|entity| (entity, side)));
            velocity.y = 0.0;
        }
        bounds.y = y;
    }

    Resolution {
        bounds,
        velocity,
        grounded,
        contacts,
    }
}

/// Correct the player's integrated position against collidable geometry.
pub fn resolve_player_collisions(
    mut player_query: Query<(&mut Bounds, &mut MovementState), With<Player>>,
    solids: Query<(Entity, &Bounds, Option<&Firewall>), (With<Solid>, Without<Player>)>,
    mut contact_events: EventWriter<SolidContactEvent>,
) {
    let Ok((mut bounds, mut movement)) = player_query.get_single_mut() else {
        return;
    };

    let collidable: Vec<SolidBox> = solids
        .iter()
        .filter(|(_, _, firewall)| firewall.map_or(true, |f| f.active))
        .map(|(entity, bounds, _)| SolidBox {
            entity,
            bounds: bounds.0,
        })
        .collect();

    let resolution = resolve_motion(movement.previous, movement.velocity, &collidable);
    bounds.0 = resolution.bounds;
    movement.velocity = resolution.velocity;
    movement.is_grounded = resolution.grounded;

    for (entity, side) in resolution.contacts {
        contact_events.send(SolidContactEvent { entity, side });
    }
}

/// Dropping below the level costs a life and returns the player to spawn.
pub fn handle_fall_out(
    config: Res<SimConfig>,
    level: Res<LevelBounds>,
    mut player_query: Query<(&mut Bounds, &mut MovementState, &mut Survival), With<Player>>,
) {
    let Ok((mut bounds, mut movement, mut survival)) = player_query.get_single_mut() else {
        return;
    };
    if bounds.0.top() <= level.height {
        return;
    }

    survival.lives = survival.lives.saturating_sub(1);
    info!("Player fell out of the level, {} lives left", survival.lives);
    if survival.lives > 0 {
        respawn(&mut bounds, &mut movement, &mut survival, level.spawn, &config);
    }
}
