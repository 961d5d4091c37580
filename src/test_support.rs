//! Headless app harness for driving the simulation tick by tick.
//!
//! Nothing here calls `App::update`: `Startup` never runs, so the level and
//! config inserted by the test are the ones used, and time never advances on
//! its own. Each `tick` runs exactly one simulation tick followed by any
//! state transition it queued.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::state::state::StateTransition;

use crate::core::{GameState, LifecycleSignal, SimConfig};
use crate::player::{ActionSet, Loadout, MovementState, Player, Survival};
use crate::world::*;
use crate::FirewallBreachPlugin;

/// Top of the default test floor.
pub(crate) const FLOOR_Y: f32 = 500.0;

/// Spawn point: a 30x40 player standing on the floor.
pub(crate) const SPAWN: (f32, f32) = (100.0, 460.0);

pub(crate) fn record(id: u32, bounds: (f32, f32, f32, f32), kind: EntityKindDef) -> EntityRecord {
    EntityRecord { id, bounds, kind }
}

/// A floor spanning the whole test level.
pub(crate) fn floor(id: u32) -> EntityRecord {
    record(id, (0.0, FLOOR_Y, 2000.0, 40.0), EntityKindDef::Platform)
}

/// Stationary patrol enemy with the given health.
pub(crate) fn sentry(id: u32, x: f32, y: f32, health: u32) -> EntityRecord {
    record(
        id,
        (x, y, 30.0, 30.0),
        EntityKindDef::PatrolEnemy {
            patrol_start: x,
            patrol_end: x,
            speed: Some(0.0),
            health: Some(health),
        },
    )
}

pub(crate) fn level(entities: Vec<EntityRecord>) -> LevelDefinition {
    LevelDefinition {
        name: "test".to_string(),
        width: 2000.0,
        height: 600.0,
        player_start: SPAWN,
        entities,
    }
}

/// Build an app for `level` and begin play.
pub(crate) fn start(level: LevelDefinition, config: SimConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .add_plugins(FirewallBreachPlugin)
        .insert_resource(config);

    let mut registry = LevelRegistry::default();
    registry.insert("test", level);
    app.insert_resource(registry).insert_resource(CurrentLevel {
        name: "test".to_string(),
    });

    signal(&mut app, LifecycleSignal::Begin);
    assert_eq!(state(&app), GameState::Playing);
    app
}

/// Deliver a lifecycle signal the way the host does.
pub(crate) fn signal(app: &mut App, signal: LifecycleSignal) {
    app.world_mut().send_event(signal);
    app.world_mut().run_schedule(Update);
    app.world_mut().run_schedule(StateTransition);
}

pub(crate) fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
    app.world_mut().run_schedule(StateTransition);
}

pub(crate) fn tick_n(app: &mut App, n: usize) {
    for _ in 0..n {
        tick(app);
    }
}

pub(crate) fn set_actions(app: &mut App, actions: ActionSet) {
    app.insert_resource(actions);
}

pub(crate) fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

pub(crate) fn player(app: &mut App) -> (Aabb, MovementState, Survival, Loadout) {
    let world = app.world_mut();
    let mut query =
        world.query_filtered::<(&Bounds, &MovementState, &Survival, &Loadout), With<Player>>();
    let (bounds, movement, survival, loadout) = query.single(world);
    (bounds.0, *movement, *survival, *loadout)
}

pub(crate) fn with_player<R>(
    app: &mut App,
    f: impl FnOnce(&mut Bounds, &mut MovementState, &mut Survival, &mut Loadout) -> R,
) -> R {
    let world = app.world_mut();
    let mut query = world
        .query_filtered::<(&mut Bounds, &mut MovementState, &mut Survival, &mut Loadout), With<Player>>();
    let (mut bounds, mut movement, mut survival, mut loadout) = query.single_mut(world);
    f(&mut *bounds, &mut *movement, &mut *survival, &mut *loadout)
}

/// Teleport the player, at rest.
pub(crate) fn place_player(app: &mut App, x: f32, y: f32) {
    with_player(app, |bounds, movement, _, _| {
        bounds.0.x = x;
        bounds.0.y = y;
        movement.previous = bounds.0;
        movement.velocity = Vec2::ZERO;
    });
}

/// Live entity for a level id, if it is still registered.
pub(crate) fn entity(app: &App, id: u32) -> Option<Entity> {
    app.world().resource::<EntityRegistry>().get(id)
}

/// Copy of a component on the live entity for a level id.
pub(crate) fn component<T: Component + Clone>(app: &App, id: u32) -> Option<T> {
    let entity = entity(app, id)?;
    app.world().get::<T>(entity).cloned()
}

pub(crate) fn count<T: Component>(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query_filtered::<Entity, With<T>>().iter(world).count()
}
