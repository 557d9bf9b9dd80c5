//! Graphics-free game simulation.
//!
//! Everything the game decides lives here: movement, enemy pursuit, melee
//! resolution, hit effects and the follow camera. The Bevy plugins only
//! forward input into a [`GameSession`] and mirror its state onto meshes.

mod camera;
mod config;
mod entities;
mod input;
mod session;

pub use camera::FollowCamera;
pub use config::{ConfigError, GameConfig, GAME_CONFIG_PATH};
pub use entities::{AttackEffect, EffectId, EnemyId, EnemyState, PlayerState};
pub use input::{InputState, MoveKey};
pub use session::{resolve_ground, AttackOutcome, GameSession, PendingSpawn, SessionEvent};
