//! The session resource and the systems that drive it.

use bevy::prelude::*;

use super::events::{GameEvent, RestartRequested, SessionRestarted};
use super::states::GameState;
use crate::sim::{GameConfig, GameSession, SessionEvent};

/// The running game session.
#[derive(Resource, Deref, DerefMut)]
pub struct Session(pub GameSession);

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self(GameSession::new(config))
    }
}

/// Marker for every renderable that belongs to a session and has to go when
/// it is replaced.
#[derive(Component)]
pub struct SessionEntity;

/// Advance the simulation one tick (runs in `FixedUpdate`).
pub fn tick_session(mut session: ResMut<Session>) {
    session.tick();
}

/// Re-send queued simulation events and react to the player's death.
pub fn publish_session_events(
    mut session: ResMut<Session>,
    mut events: EventWriter<GameEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in session.drain_events() {
        if let SessionEvent::GameOver { score } = event {
            info!("Game over! Final score: {}", score);
            next_state.set(GameState::GameOver);
        }
        events.send(GameEvent(event));
    }
}

/// Throw the current session away and start over, like a full reload.
pub fn restart_session(
    mut commands: Commands,
    mut requests: EventReader<RestartRequested>,
    mut session: ResMut<Session>,
    entities: Query<Entity, With<SessionEntity>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut restarted: EventWriter<SessionRestarted>,
) {
    if requests.read().count() == 0 {
        return;
    }

    for entity in entities.iter() {
        commands.entity(entity).despawn_recursive();
    }

    let config = session.config.clone();
    *session = Session::new(config);
    next_state.set(GameState::Playing);
    restarted.send(SessionRestarted);
    info!("Session restarted");
}
