//! Combat-related components and assets.

use bevy::prelude::*;

use crate::sim::EffectId;

/// Renderable for one attack effect.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackEffectVisual {
    pub id: EffectId,
}

/// Shared mesh for attack effects. Each effect gets its own material so it
/// can fade independently.
#[derive(Resource)]
pub struct AttackEffectAssets {
    pub mesh: Handle<Mesh>,
}

/// Colour of the attack burst; alpha comes from the simulated opacity.
pub fn effect_color(opacity: f32) -> Color {
    Color::srgba(1.0, 1.0, 0.0, opacity)
}
