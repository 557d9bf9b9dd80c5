//! UI module - HUD and game over screen.

mod hud;
mod plugin;

pub use hud::{HealthBar, ScoreText};
pub use plugin::UiPlugin;
