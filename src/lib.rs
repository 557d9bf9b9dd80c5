//! Meadow Melee - a small third-person melee arena in Bevy.
//!
//! The player roams a meadow, swings at enemies that walk straight at them,
//! and tries to rack up score before contact damage wears their health down.
//!
//! # Architecture
//!
//! All game rules live in [`sim`], a graphics-free simulation driven by one
//! owned [`sim::GameSession`]. The plugins around it are thin adapters:
//!
//! - **Core**: Game states, the session resource, fixed-rate tick, events
//! - **Input**: Keyboard and cursor events into the session
//! - **Player**: Player model and follow camera
//! - **Combat**: Attack trigger and attack effects
//! - **Enemies**: Enemy models mirroring the simulated enemies
//! - **World**: Ground, lights, rocks, trees and the humanoid prefab
//! - **Rendering**: Sky colour, fog and lighting config
//! - **UI**: Score, health bar and game over screen

pub mod combat;
pub mod core;
pub mod enemies;
pub mod input;
pub mod player;
pub mod rendering;
pub mod sim;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct MeadowPlugin;

impl Plugin for MeadowPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Rendering config is read by world and player setup
            .add_plugins(rendering::RenderingPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Input collection
            .add_plugins(input::InputCollectorPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
