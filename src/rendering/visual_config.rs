//! Visual configuration loaded from external RON file.
//!
//! Allows tweaking sky, fog and lighting without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

/// Default location of the visual config.
pub const VISUAL_CONFIG_PATH: &str = "assets/data/rendering/visual_config.ron";

/// Visual configuration loaded from assets/data/rendering/visual_config.ron.
#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    // Atmosphere
    pub sky_color: (f32, f32, f32),
    pub fog_enabled: bool,
    pub fog_density: f32,
    // Lighting
    pub ambient_brightness: f32,
    pub sun_illuminance: f32,
    pub shadows_enabled: bool,
    // Camera
    pub fov_degrees: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            // Light sky blue with matching exponential fog
            sky_color: (0.529, 0.808, 0.922),
            fog_enabled: true,
            fog_density: 0.05,
            ambient_brightness: 600.0,
            sun_illuminance: 8000.0,
            shadows_enabled: true,
            fov_degrees: 75.0,
        }
    }
}

impl VisualConfig {
    /// Load visual config from RON file.
    pub fn load() -> Self {
        let path = VISUAL_CONFIG_PATH;
        match fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded visual config from {}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    pub fn sky(&self) -> Color {
        Color::srgb(self.sky_color.0, self.sky_color.1, self.sky_color.2)
    }

    /// Fog density, zero when fog is turned off.
    pub fn effective_fog_density(&self) -> f32 {
        if self.fog_enabled {
            self.fog_density
        } else {
            0.0
        }
    }
}
