//! Keyboard mapping for the desktop host.
//!
//! The simulation itself only reads `ActionSet`; headless hosts and tests
//! write that resource directly and never add a keyboard.

use bevy::prelude::*;

use super::components::ActionSet;
use crate::core::{GameState, LifecycleSignal};

/// Sample held keys into the action set for the coming ticks.
pub fn read_keyboard_actions(keyboard: Res<ButtonInput<KeyCode>>, mut actions: ResMut<ActionSet>) {
    let held = |keys: &[KeyCode]| keys.iter().any(|key| keyboard.pressed(*key));

    *actions = ActionSet {
        move_left: held(&[KeyCode::ArrowLeft, KeyCode::KeyA]),
        move_right: held(&[KeyCode::ArrowRight, KeyCode::KeyD]),
        jump: held(&[KeyCode::Space, KeyCode::KeyW]),
        shoot: held(&[KeyCode::KeyJ, KeyCode::KeyX]),
        interact: held(&[KeyCode::KeyE, KeyCode::ArrowUp]),
    };
}

/// Enter begins a run from the title and restarts from either end screen.
pub fn read_lifecycle_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut signals: EventWriter<LifecycleSignal>,
) {
    if !keyboard.just_pressed(KeyCode::Enter) {
        return;
    }
    let signal = match state.get() {
        GameState::Start => LifecycleSignal::Begin,
        current if current.is_terminal() => LifecycleSignal::Restart,
        _ => return,
    };
    signals.send(signal);
}
