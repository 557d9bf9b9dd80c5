//! Simulation records for the player, enemies and attack effects.
//!
//! These hold logical state only. The renderable side of each record lives in
//! the presentation plugins and is matched back by id.

use bevy::math::Vec3;

use super::config::GameConfig;

/// Stable identifier linking an enemy record to its renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u64);

/// Stable identifier linking an attack effect to its renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(pub u64);

/// The single player character.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    /// Only the vertical component is ever written
    pub velocity: Vec3,
    /// Yaw in radians, derived from the mouse offset
    pub yaw: f32,
    pub attack_range: f32,
    pub speed: f32,
    /// Where the model was drawn this tick (captured before ground clamping)
    pub render_position: Vec3,
}

impl PlayerState {
    /// Player at the origin, facing -Z.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            attack_range: config.attack_range,
            speed: config.player_speed,
            render_position: Vec3::ZERO,
        }
    }

    /// Unit vector the player is facing on the ground plane.
    pub fn facing(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Height of the player's feet.
    pub fn foot_height(&self, config: &GameConfig) -> f32 {
        self.position.y + config.foot_offset
    }
}

/// A melee enemy chasing the player.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyState {
    pub id: EnemyId,
    pub position: Vec3,
    /// Allocated for parity with the player record; never integrated
    pub velocity: Vec3,
    /// Yaw that turns the model's +Z axis toward the player
    pub yaw: f32,
    pub health: f32,
    pub damage: f32,
    pub speed: f32,
    pub is_hit: bool,
    pub hit_timer: u32,
    /// Vertical offset applied to the renderable only, for the hit bob
    pub render_offset_y: f32,
}

impl EnemyState {
    pub fn new(id: EnemyId, position: Vec3, config: &GameConfig) -> Self {
        Self {
            id,
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            health: config.enemy_health,
            damage: config.enemy_damage,
            speed: config.enemy_speed,
            is_hit: false,
            hit_timer: 0,
            render_offset_y: 0.0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Position the renderable should be drawn at this tick.
    pub fn render_position(&self) -> Vec3 {
        self.position + Vec3::Y * self.render_offset_y
    }

    /// Take a hit and start the bob animation.
    pub fn take_hit(&mut self, damage: f32, hit_timer: u32) {
        self.health -= damage;
        self.is_hit = true;
        self.hit_timer = hit_timer;
    }

    /// Step toward `target` on the ground plane and turn to face it.
    pub fn step_toward(&mut self, target: Vec3) {
        let offset = Vec3::new(target.x - self.position.x, 0.0, target.z - self.position.z);
        self.position += offset.normalize_or_zero() * self.speed;

        let dx = target.x - self.position.x;
        let dz = target.z - self.position.z;
        if dx != 0.0 || dz != 0.0 {
            self.yaw = dx.atan2(dz);
        }
    }

    /// Advance the hit bob by one tick.
    ///
    /// While the timer runs the render offset follows `sin(timer) * amplitude`;
    /// the tick after it reaches zero the hit flag clears.
    pub fn advance_hit_bob(&mut self, amplitude: f32) {
        self.render_offset_y = 0.0;
        if !self.is_hit {
            return;
        }

        if self.hit_timer > 0 {
            self.render_offset_y = (self.hit_timer as f32).sin() * amplitude;
            self.hit_timer -= 1;
        } else {
            self.is_hit = false;
        }
    }
}

/// Expanding, fading sphere left behind by an attack.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackEffect {
    pub id: EffectId,
    pub position: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

impl AttackEffect {
    pub fn new(id: EffectId, position: Vec3, config: &GameConfig) -> Self {
        Self {
            id,
            position,
            scale: 1.0,
            opacity: config.effect_initial_opacity,
        }
    }

    /// Grow and fade one tick. Returns true once the effect has finished.
    pub fn advance(&mut self, config: &GameConfig) -> bool {
        self.scale *= config.effect_growth;
        self.opacity *= config.effect_fade;
        self.scale > config.effect_max_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_moves_horizontally_at_its_speed() {
        let config = GameConfig::default();
        let mut enemy = EnemyState::new(EnemyId(1), Vec3::new(10.0, 0.0, 0.0), &config);

        enemy.step_toward(Vec3::new(0.0, -0.6, 0.0));

        assert!((enemy.position.x - 9.95).abs() < 1e-5);
        assert_eq!(enemy.position.y, 0.0);
        assert_eq!(enemy.position.z, 0.0);
    }

    #[test]
    fn enemy_on_top_of_target_stays_put() {
        let config = GameConfig::default();
        let mut enemy = EnemyState::new(EnemyId(1), Vec3::new(1.0, 0.0, 2.0), &config);
        enemy.yaw = 0.3;

        enemy.step_toward(Vec3::new(1.0, 5.0, 2.0));

        assert_eq!(enemy.position, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(enemy.yaw, 0.3);
    }

    #[test]
    fn enemy_faces_target_with_positive_z() {
        let config = GameConfig::default();
        let mut enemy = EnemyState::new(EnemyId(1), Vec3::new(0.0, 0.0, -10.0), &config);

        enemy.step_toward(Vec3::ZERO);

        assert!(enemy.yaw.abs() < 1e-6);
    }

    #[test]
    fn hit_bob_runs_for_timer_then_clears() {
        let config = GameConfig::default();
        let mut enemy = EnemyState::new(EnemyId(1), Vec3::ZERO, &config);
        enemy.take_hit(15.0, 2);

        enemy.advance_hit_bob(0.5);
        assert!((enemy.render_offset_y - 2.0_f32.sin() * 0.5).abs() < 1e-6);
        assert_eq!(enemy.hit_timer, 1);

        enemy.advance_hit_bob(0.5);
        assert!((enemy.render_offset_y - 1.0_f32.sin() * 0.5).abs() < 1e-6);
        assert!(enemy.is_hit);

        enemy.advance_hit_bob(0.5);
        assert_eq!(enemy.render_offset_y, 0.0);
        assert!(!enemy.is_hit);
    }

    #[test]
    fn player_faces_negative_z_at_rest() {
        let player = PlayerState::new(&GameConfig::default());
        assert_eq!(player.facing(), Vec3::new(0.0, 0.0, -1.0));
    }
}
