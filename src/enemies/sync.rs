//! Enemy model systems.
//!
//! Pursuit, contact damage and the hit bob are all decided by the session;
//! these systems keep one model per live enemy and copy its pose across.

use std::collections::HashMap;

use bevy::prelude::*;

use super::components::Enemy;
use crate::core::{GameEvent, Session, SessionEntity};
use crate::sim::{EnemyState, SessionEvent};
use crate::world::{spawn_humanoid, HumanoidAssets};

/// Give every newly spawned enemy a model.
pub fn spawn_enemy_models(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    assets: Res<HumanoidAssets>,
) {
    for GameEvent(event) in events.read() {
        let SessionEvent::EnemySpawned { id, position } = event else {
            continue;
        };

        spawn_humanoid(
            &mut commands,
            &assets,
            &assets.enemy,
            Transform::from_translation(*position),
            (Enemy { id: *id }, SessionEntity),
        );
    }
}

/// Remove the models of killed enemies.
pub fn despawn_killed_enemies(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    enemy_query: Query<(Entity, &Enemy)>,
) {
    for GameEvent(event) in events.read() {
        let SessionEvent::EnemyKilled { id } = event else {
            continue;
        };

        for (entity, enemy) in enemy_query.iter() {
            if enemy.id == *id {
                commands.entity(entity).despawn_recursive();
            }
        }
    }
}

/// Copy each enemy's drawn position (including hit bob) and yaw.
pub fn sync_enemy_transforms(
    session: Res<Session>,
    mut enemy_query: Query<(&Enemy, &mut Transform)>,
) {
    let states: HashMap<_, &EnemyState> = session.enemies.iter().map(|e| (e.id, e)).collect();

    for (enemy, mut transform) in enemy_query.iter_mut() {
        let Some(state) = states.get(&enemy.id) else {
            continue;
        };

        transform.translation = state.render_position();
        transform.rotation = Quat::from_rotation_y(state.yaw);
    }
}
