//! Rendering plugin - sky colour and the visual config every scene system
//! reads from.

use bevy::prelude::*;

use super::visual_config::VisualConfig;

/// Rendering plugin - loads the visual config and sets the clear colour.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        let config = VisualConfig::load();
        app.insert_resource(ClearColor(config.sky()))
            .insert_resource(config);
        // Fog is a per-camera component; the player camera picks it up
        // from VisualConfig when spawned
    }
}
