//! Gameplay tuning loaded from an external RON file.
//!
//! Every value is expressed per tick, not per second. The defaults are the
//! tuned values; the file only exists so they can be tweaked without
//! recompiling.

use bevy::log::{error, info, warn};
use bevy::math::Vec3;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default location of the gameplay config.
pub const GAME_CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Errors that can occur when loading the gameplay config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// A value is outside the range the simulation can work with.
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tuning values for the whole simulation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Session
    pub starting_health: f64,
    pub initial_enemies: usize,
    pub kill_score: u32,
    /// Side length of the square (centered at origin) enemies spawn in
    pub spawn_area: f32,
    /// Fixed seed for enemy placement; entropy when absent
    pub rng_seed: Option<u64>,
    pub tick_rate_hz: f64,

    // Player
    pub player_speed: f32,
    pub attack_range: f32,
    pub attack_damage: f32,
    /// Ticks between attacks
    pub attack_cooldown: u32,
    /// Vertical offset of the attack effect above the player
    pub attack_anchor_height: f32,
    pub gravity: f32,
    /// Distance from the player's origin down to its feet (negative)
    pub foot_offset: f32,
    pub ground_height: f32,
    pub mouse_yaw_sensitivity: f32,

    // Enemies
    pub enemy_health: f32,
    pub enemy_damage: f32,
    pub enemy_speed: f32,
    pub contact_radius: f32,
    /// Multiplier applied to enemy damage for each tick of contact
    pub contact_damage_scale: f32,
    pub hit_timer: u32,
    pub hit_bob_amplitude: f32,

    // Attack effect
    pub effect_growth: f32,
    pub effect_fade: f32,
    pub effect_initial_opacity: f32,
    pub effect_max_scale: f32,

    // Camera
    pub camera_distance: f32,
    pub camera_height: f32,
    pub camera_look_height: f32,
    pub camera_smoothing: f32,
    pub camera_start: (f32, f32, f32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: 10_000_000.0,
            initial_enemies: 5,
            kill_score: 10,
            spawn_area: 50.0,
            rng_seed: None,
            tick_rate_hz: 60.0,

            player_speed: 0.2,
            attack_range: 7.0,
            attack_damage: 15.0,
            attack_cooldown: 20,
            attack_anchor_height: 1.0,
            gravity: 0.05,
            foot_offset: -1.4,
            ground_height: -2.0,
            mouse_yaw_sensitivity: 0.005,

            enemy_health: 30.0,
            enemy_damage: 10.0,
            enemy_speed: 0.05,
            contact_radius: 2.0,
            contact_damage_scale: 0.01,
            hit_timer: 10,
            hit_bob_amplitude: 0.5,

            effect_growth: 1.1,
            effect_fade: 0.9,
            effect_initial_opacity: 0.8,
            effect_max_scale: 5.0,

            camera_distance: 5.0,
            camera_height: 3.0,
            camera_look_height: 2.0,
            camera_smoothing: 0.1,
            camera_start: (0.0, 5.0, 10.0),
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from RON text.
    pub fn from_ron_str(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: display.clone(),
            details: e.to_string(),
        })?;
        Self::from_ron_str(&contents, &display)
    }

    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::from_file(GAME_CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded game config from {}", GAME_CONFIG_PATH);
                config
            }
            Err(e @ ConfigError::Read { .. }) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("player_speed", self.player_speed),
            ("attack_range", self.attack_range),
            ("enemy_speed", self.enemy_speed),
            ("contact_radius", self.contact_radius),
            ("spawn_area", self.spawn_area),
            ("effect_max_scale", self.effect_max_scale),
            ("enemy_health", self.enemy_health),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }

        if !(self.starting_health > 0.0) {
            return Err(ConfigError::Invalid {
                field: "starting_health",
                reason: format!("must be positive, got {}", self.starting_health),
            });
        }

        if self.attack_cooldown == 0 {
            return Err(ConfigError::Invalid {
                field: "attack_cooldown",
                reason: "must be at least one tick".to_string(),
            });
        }

        // Effects that never grow would never expire
        if !(self.effect_growth > 1.0) {
            return Err(ConfigError::Invalid {
                field: "effect_growth",
                reason: format!("must be greater than 1, got {}", self.effect_growth),
            });
        }

        if !(self.tick_rate_hz > 0.0) {
            return Err(ConfigError::Invalid {
                field: "tick_rate_hz",
                reason: format!("must be positive, got {}", self.tick_rate_hz),
            });
        }

        Ok(())
    }

    pub fn camera_start(&self) -> Vec3 {
        Vec3::new(self.camera_start.0, self.camera_start.1, self.camera_start.2)
    }
}
