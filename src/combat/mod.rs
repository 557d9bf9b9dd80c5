//! Combat module - the attack trigger and attack effects.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
