//! UI module - frame snapshot, narrative messages and the HUD.

mod hud;
mod messages;
mod plugin;
mod snapshot;

pub use hud::status_line;
pub use messages::{MessageBoard, ShownMessage};
pub use plugin::{HudPlugin, UiPlugin};
pub use snapshot::{EntityView, FrameSnapshot, ParticleView, PlayerView, ProjectileView};
