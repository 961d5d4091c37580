//! Core plugin that sets up game states, events, tick ordering and the
//! terminal-state rules.

use bevy::prelude::*;

use super::config::{load_sim_config, SimConfig};
use super::events::*;
use super::rng::SimRng;
use super::schedule::{advance_clock, SimClock, SimSet};
use super::states::*;
use crate::player::{Player, Survival};
use crate::world::Goal;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Start, Playing, Lost, Won) and lifecycle signals
/// - Global events (DamageEvent, NarrativeEvent, ...)
/// - The chained `SimSet` ordering in `FixedUpdate`
/// - Simulation config and the seeded random source
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<LifecycleSignal>()
            .add_event::<DamageEvent>()
            .add_event::<EnemyDefeatedEvent>()
            .add_event::<SolidContactEvent>()
            .add_event::<NarrativeEvent>()

            // Simulation resources
            .init_resource::<SimConfig>()
            .init_resource::<SimRng>()
            .init_resource::<SimClock>()
            .add_systems(Startup, load_sim_config)

            // Tick ordering
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Physics,
                    SimSet::Collision,
                    SimSet::Ai,
                    SimSet::Projectiles,
                    SimSet::Interaction,
                    SimSet::Camera,
                    SimSet::Outcome,
                    SimSet::Publish,
                )
                    .chain()
                    .run_if(simulation_active),
            )
            .add_systems(FixedUpdate, advance_clock.in_set(SimSet::Physics))
            .add_systems(FixedUpdate, evaluate_outcome.in_set(SimSet::Outcome))

            // Lifecycle signals come from the host, outside the tick
            .add_systems(Update, handle_lifecycle_signals)
            .add_systems(OnEnter(GameState::Playing), reset_simulation)
            .add_systems(OnEnter(GameState::Lost), announce_loss)
            .add_systems(OnEnter(GameState::Won), announce_win);
    }
}

/// Apply `Begin` / `Restart` signals that are valid in the current state.
fn handle_lifecycle_signals(
    mut signals: EventReader<LifecycleSignal>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for signal in signals.read() {
        match next_state_for(*current_state.get(), *signal) {
            Some(target) => {
                info!("{:?} signal: {:?} -> {:?}", signal, current_state.get(), target);
                next_state.set(target);
            }
            None => {
                debug!("Ignoring {:?} signal in {:?}", signal, current_state.get());
            }
        }
    }
}

/// Decide terminal outcomes at the end of the tick.
///
/// Running out of lives is checked before the goal so a simultaneous loss
/// and win resolves as a loss.
fn evaluate_outcome(
    player_query: Query<&Survival, With<Player>>,
    goal_query: Query<&Goal>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if let Ok(survival) = player_query.get_single() {
        if survival.lives == 0 {
            next_state.set(GameState::Lost);
            return;
        }
    }

    if goal_query.iter().any(|goal| goal.reached) {
        next_state.set(GameState::Won);
    }
}

/// Every run starts from tick zero with the configured seed.
pub fn reset_simulation(mut clock: ResMut<SimClock>, mut rng: ResMut<SimRng>, config: Res<SimConfig>) {
    *clock = SimClock::default();
    rng.reseed(config.rng_seed);
}

fn announce_loss(clock: Res<SimClock>) {
    info!("Out of lives at tick {}", clock.tick);
}

fn announce_win(clock: Res<SimClock>) {
    info!("Goal reached at tick {}", clock.tick);
}
