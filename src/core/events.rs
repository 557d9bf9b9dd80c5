//! Global events used for cross-plugin communication.
//!
//! The simulation queues its own events; the core plugin re-sends each one
//! as a [`GameEvent`] so every presentation plugin can react independently.

use bevy::prelude::*;

use crate::sim::SessionEvent;

/// A simulation event, broadcast once per frame after the tick.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct GameEvent(pub SessionEvent);

/// Sent by the game-over screen when the player asks to play again.
#[derive(Event, Debug, Default)]
pub struct RestartRequested;

/// Sent after the session has been replaced with a fresh one.
#[derive(Event, Debug, Default)]
pub struct SessionRestarted;
