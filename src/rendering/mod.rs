//! Rendering module - sky, fog and lighting configuration.

mod plugin;
pub mod visual_config;

pub use plugin::RenderingPlugin;
pub use visual_config::VisualConfig;
