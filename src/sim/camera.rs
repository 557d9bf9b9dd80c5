//! Third-person follow camera.

use bevy::math::Vec3;

use super::config::GameConfig;

/// Camera that eases toward a point trailing the player.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowCamera {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl FollowCamera {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position: config.camera_start(),
            look_at: Vec3::ZERO,
        }
    }

    /// Point the camera is easing toward.
    pub fn target(player: Vec3, config: &GameConfig) -> Vec3 {
        Vec3::new(
            player.x,
            player.y + config.camera_height,
            player.z + config.camera_distance,
        )
    }

    /// Close a fixed fraction of the remaining distance to the target.
    pub fn follow(&mut self, player: Vec3, config: &GameConfig) {
        let target = Self::target(player, config);
        self.position += (target - self.position) * config.camera_smoothing;
        self.look_at = player + Vec3::Y * config.camera_look_height;
    }
}
