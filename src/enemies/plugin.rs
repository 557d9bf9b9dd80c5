//! Enemy plugin - registers all enemy presentation systems.

use bevy::prelude::*;

use super::sync;
use crate::core::SessionSet;

/// Enemy plugin - spawns, moves and removes enemy models as the session
/// reports changes.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                sync::spawn_enemy_models,
                sync::despawn_killed_enemies,
                sync::sync_enemy_transforms,
            )
                .chain()
                .in_set(SessionSet::Present),
        );
    }
}
