//! Enemy-related components.

use bevy::prelude::*;

use crate::sim::EnemyId;

/// Renderable for one simulated enemy.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub id: EnemyId,
}
