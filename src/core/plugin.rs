//! Core plugin that sets up game states, events, and the session tick.

use bevy::prelude::*;

use super::events::*;
use super::session::*;
use super::states::*;
use crate::sim::GameConfig;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Playing, GameOver)
/// - Global events (GameEvent, RestartRequested, SessionRestarted)
/// - The `Session` resource, unless one was inserted beforehand
/// - The fixed-rate tick and per-frame event publishing
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<Session>() {
            app.insert_resource(Session::new(GameConfig::load()));
        }
        let tick_rate = app.world().resource::<Session>().config.tick_rate_hz;

        app
            .init_state::<GameState>()

            .add_event::<GameEvent>()
            .add_event::<RestartRequested>()
            .add_event::<SessionRestarted>()

            // One simulation tick per fixed step, independent of display rate
            .insert_resource(Time::<Fixed>::from_hz(tick_rate))
            .add_systems(
                FixedUpdate,
                tick_session.run_if(in_state(GameState::Playing)),
            )

            .configure_sets(
                Update,
                (
                    SessionSet::Input,
                    SessionSet::Attack,
                    SessionSet::Restart,
                    SessionSet::Publish,
                    SessionSet::Present,
                )
                    .chain(),
            )
            .add_systems(Update, restart_session.in_set(SessionSet::Restart))
            .add_systems(Update, publish_session_events.in_set(SessionSet::Publish));
    }
}
