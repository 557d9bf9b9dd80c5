//! Game state definitions that control the overall flow of the game.
//!
//! There is no menu: the game starts playing immediately, and death is the
//! only transition.

use bevy::prelude::*;

/// Main game states.
///
/// - `Playing` while the player is alive
/// - `GameOver` once health runs out, until the player restarts
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Active gameplay
    #[default]
    Playing,
    /// Player has died; the final score is on screen
    GameOver,
}

/// Per-frame ordering of everything that touches the session.
///
/// Input is collected first, then the attack trigger fires, then a pending
/// restart replaces the session, then queued session events are published
/// and finally the presentation catches up.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SessionSet {
    Input,
    Attack,
    Restart,
    Publish,
    Present,
}
