//! World module - scenery and the shared humanoid prefab.

mod plugin;
pub mod prefabs;
mod scenery;

pub use plugin::WorldPlugin;
pub use prefabs::{spawn_humanoid, HumanoidAssets, HumanoidPalette};
