//! Player plugin - player model, facing and the follow camera.

use bevy::prelude::*;

use super::movement;

/// Player plugin - spawns the player and camera and mirrors their state.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_movement_systems(app);
    }
}
