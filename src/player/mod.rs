//! Player module - player model, facing, and camera follow.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{spawn_camera, spawn_player};
pub use plugin::PlayerPlugin;
