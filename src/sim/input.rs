//! Held movement keys and the latest mouse offset.

use bevy::math::{Vec2, Vec3};

/// One of the four movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveKey {
    /// Map a typed key to a movement direction, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "w" => Some(Self::Forward),
            "s" => Some(Self::Backward),
            "a" => Some(Self::Left),
            "d" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Input snapshot read by every tick.
///
/// Flags follow the last press/release event for their key, with no
/// debouncing. The mouse offset is absolute from the window center.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub mouse_offset: Vec2,
}

impl InputState {
    pub fn set_key(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Forward => self.forward = held,
            MoveKey::Backward => self.backward = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
        }
    }

    pub fn key_down(&mut self, key: MoveKey) {
        self.set_key(key, true);
    }

    pub fn key_up(&mut self, key: MoveKey) {
        self.set_key(key, false);
    }

    /// Record the cursor position relative to the center of the window.
    pub fn cursor_moved(&mut self, cursor: Vec2, window_size: Vec2) {
        self.mouse_offset = cursor - window_size / 2.0;
    }

    /// Horizontal movement for one tick.
    ///
    /// Diagonals are a plain sum, so they travel faster than a single axis.
    pub fn movement(&self, speed: f32) -> Vec3 {
        let mut movement = Vec3::ZERO;
        if self.forward {
            movement.z -= speed;
        }
        if self.backward {
            movement.z += speed;
        }
        if self.left {
            movement.x -= speed;
        }
        if self.right {
            movement.x += speed;
        }
        movement
    }
}
