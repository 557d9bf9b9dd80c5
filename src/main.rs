//! Meadow Melee - Entry Point
//!
//! Controls:
//! - WASD: Move
//! - Mouse: Turn
//! - Left click: Attack

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Meadow Melee".to_string(),
                resolution: (1280.0, 720.0).into(),
                // Browser builds fill the page and follow its size
                fit_canvas_to_parent: true,
                prevent_default_event_handling: true,
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(meadow_melee::MeadowPlugin)

        .run();
}
