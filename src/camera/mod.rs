//! Camera module - the side-scrolling viewport.

mod follow;
mod plugin;

pub use follow::{reset_camera, CameraState};
pub use plugin::CameraPlugin;
