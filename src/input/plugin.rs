//! Keyboard and cursor collection.

use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::{Session, SessionSet};
use crate::sim::MoveKey;

/// Input plugin - keeps the session's movement flags and mouse offset current.
pub struct InputCollectorPlugin;

impl Plugin for InputCollectorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (collect_movement_keys, collect_cursor).in_set(SessionSet::Input),
        );
    }
}

/// Toggle movement flags on press and release of w/a/s/d.
///
/// Uses the logical key so layouts map by the typed letter, in either case.
fn collect_movement_keys(mut keys: EventReader<KeyboardInput>, mut session: ResMut<Session>) {
    for event in keys.read() {
        let Key::Character(ref typed) = event.logical_key else {
            continue;
        };
        let Some(key) = MoveKey::from_key(typed.as_str()) else {
            continue;
        };

        session
            .input
            .set_key(key, event.state == ButtonState::Pressed);
    }
}

/// Record the cursor position relative to the window center.
fn collect_cursor(
    mut cursor_events: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut session: ResMut<Session>,
) {
    for event in cursor_events.read() {
        let Ok(window) = windows.get(event.window) else {
            continue;
        };

        session
            .input
            .cursor_moved(event.position, Vec2::new(window.width(), window.height()));
    }
}
