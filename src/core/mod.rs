//! Core game module - states, events, tick ordering and configuration.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod events;
mod plugin;
mod rng;
mod schedule;
mod states;

pub use config::*;
pub use events::*;
pub use plugin::{reset_simulation, CorePlugin};
pub use rng::SimRng;
pub use schedule::{SimClock, SimSet};
pub use states::*;
