//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player's renderable.
#[derive(Component)]
pub struct Player;

/// Marker component for the third-person camera.
#[derive(Component)]
pub struct PlayerCamera;
