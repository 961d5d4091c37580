//! Narrative message board.
//!
//! Shows the most recent narrative message for a few seconds of wall-clock
//! time. This is the only timer in the game that does not count ticks.

use bevy::prelude::*;
use std::time::Duration;

use crate::core::{NarrativeEvent, SimConfig};

/// A message currently on screen.
#[derive(Debug, Clone)]
pub struct ShownMessage {
    pub message_id: u32,
    pub text: String,
    timer: Timer,
}

#[derive(Resource, Debug, Default)]
pub struct MessageBoard {
    current: Option<ShownMessage>,
    history: Vec<NarrativeEvent>,
}

impl MessageBoard {
    pub fn current(&self) -> Option<&ShownMessage> {
        self.current.as_ref()
    }

    /// Every message received since the run started, oldest first.
    pub fn history(&self) -> &[NarrativeEvent] {
        &self.history
    }

    /// Replace whatever is showing with `event`.
    pub fn show(&mut self, event: &NarrativeEvent, seconds: f32) {
        self.history.push(event.clone());
        self.current = Some(ShownMessage {
            message_id: event.message_id,
            text: event.text.clone(),
            timer: Timer::from_seconds(seconds.max(0.0), TimerMode::Once),
        });
    }

    pub fn tick(&mut self, delta: Duration) {
        let expired = match self.current.as_mut() {
            Some(shown) => shown.timer.tick(delta).finished(),
            None => false,
        };
        if expired {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.history.clear();
    }
}

pub fn receive_narrative_messages(
    config: Res<SimConfig>,
    mut narrative: EventReader<NarrativeEvent>,
    mut board: ResMut<MessageBoard>,
) {
    for event in narrative.read() {
        info!("Message {}: {}", event.message_id, event.text);
        board.show(event, config.message_seconds);
    }
}

pub fn expire_messages(time: Res<Time>, mut board: ResMut<MessageBoard>) {
    board.tick(time.delta());
}

pub fn clear_messages(mut board: ResMut<MessageBoard>) {
    board.clear();
}
