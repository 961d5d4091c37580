//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. The simulation tick
//! only advances while the game is `Playing`; the terminal states freeze the
//! world until the host sends a restart signal.

use bevy::prelude::*;
use serde::Serialize;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on lifecycle signals and
/// gameplay outcomes:
/// - Start in `Start` until the host sends `LifecycleSignal::Begin`
/// - `Playing` runs the simulation tick
/// - `Lost` when the player's lives reach zero
/// - `Won` when the player reaches the activated goal
///
/// `Lost` and `Won` are left only through `LifecycleSignal::Restart`.
#[derive(States, Serialize, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Title screen, waiting for the begin signal
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Player has run out of lives
    Lost,
    /// Player reached the goal after the boss fell
    Won,
}

impl GameState {
    /// Whether this state only accepts a restart signal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Lost | GameState::Won)
    }
}

/// Externally triggered lifecycle transitions.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    /// `Start` -> `Playing`
    Begin,
    /// `Lost` | `Won` -> `Playing`, rebuilding the level from its template
    Restart,
}

/// Resolve a lifecycle signal against the current state.
///
/// Returns `None` when the signal has no meaning in `current`.
pub fn next_state_for(current: GameState, signal: LifecycleSignal) -> Option<GameState> {
    match (current, signal) {
        (GameState::Start, LifecycleSignal::Begin) => Some(GameState::Playing),
        (GameState::Lost | GameState::Won, LifecycleSignal::Restart) => Some(GameState::Playing),
        _ => None,
    }
}

/// Run condition for the simulation tick.
///
/// The tick runs only while `Playing` and with no transition queued, so the
/// world halts on the very tick a terminal outcome is decided.
pub fn simulation_active(state: Res<State<GameState>>, next: Res<NextState<GameState>>) -> bool {
    *state.get() == GameState::Playing && matches!(*next, NextState::Unchanged)
}
