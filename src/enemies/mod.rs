//! Enemies module - enemy models following the simulated enemies.

mod components;
mod plugin;
mod sync;

pub use components::*;
pub use plugin::EnemyPlugin;
