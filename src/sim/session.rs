//! The game session: all mutable game state and the per-tick update.
//!
//! `GameSession` is the one owned context the game runs on. Input handlers
//! write into `input` and call [`GameSession::attack`]; the fixed-step
//! scheduler calls [`GameSession::tick`]. Nothing here touches rendering.
//! Changes the presentation layer has to mirror are queued as
//! [`SessionEvent`]s and collected with [`GameSession::drain_events`].

use std::collections::VecDeque;

use bevy::log::{debug, info};
use bevy::math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::camera::FollowCamera;
use super::config::GameConfig;
use super::entities::{AttackEffect, EffectId, EnemyId, EnemyState, PlayerState};
use super::input::InputState;

/// Something the presentation layer needs to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    EnemySpawned { id: EnemyId, position: Vec3 },
    EnemyKilled { id: EnemyId },
    EffectSpawned { id: EffectId, position: Vec3 },
    EffectExpired { id: EffectId },
    ScoreChanged { score: u32 },
    HealthChanged { health: f64 },
    GameOver { score: u32 },
}

/// Outcome of an attack request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Still cooling down; nothing changed.
    Suppressed,
    /// The attack fired.
    Fired { hits: usize, kills: usize },
}

/// A replacement enemy waiting to join the active set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingSpawn {
    pub position: Vec3,
}

pub struct GameSession {
    pub config: GameConfig,
    pub player: PlayerState,
    pub enemies: Vec<EnemyState>,
    pub effects: Vec<AttackEffect>,
    pub camera: FollowCamera,
    pub input: InputState,
    pub score: u32,
    /// Kept in f64 so small contact damage still registers against the
    /// very large starting pool
    pub health: f64,
    /// Ticks left before the next attack may fire
    pub attack_cooldown: u32,
    pub pending_spawns: VecDeque<PendingSpawn>,
    over: bool,
    next_enemy_id: u64,
    next_effect_id: u64,
    rng: StdRng,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Start a session with the player at the origin and the initial enemies
    /// scattered around it.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut session = Self {
            player: PlayerState::new(&config),
            enemies: Vec::new(),
            effects: Vec::new(),
            camera: FollowCamera::new(&config),
            input: InputState::default(),
            score: 0,
            health: config.starting_health,
            attack_cooldown: 0,
            pending_spawns: VecDeque::new(),
            over: false,
            next_enemy_id: 0,
            next_effect_id: 0,
            rng,
            events: Vec::new(),
            config,
        };

        for _ in 0..session.config.initial_enemies {
            let position = session.random_spawn_position();
            session.spawn_enemy(position);
        }

        info!(
            "Session started with {} enemies",
            session.enemies.len()
        );
        session
    }

    /// Start an empty session with no enemies, for scripted setups.
    pub fn empty(config: GameConfig) -> Self {
        let config = GameConfig {
            initial_enemies: 0,
            ..config
        };
        Self::with_rng(config, StdRng::seed_from_u64(0))
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&EnemyState> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn effect(&self, id: EffectId) -> Option<&AttackEffect> {
        self.effects.iter().find(|e| e.id == id)
    }

    /// Health as a bar width, clamped to 0..=100.
    pub fn health_percent(&self) -> f32 {
        self.health.clamp(0.0, 100.0) as f32
    }

    /// Uniform point in the spawn square, on the ground plane.
    pub fn random_spawn_position(&mut self) -> Vec3 {
        let area = self.config.spawn_area;
        Vec3::new(
            (self.rng.gen::<f32>() - 0.5) * area,
            0.0,
            (self.rng.gen::<f32>() - 0.5) * area,
        )
    }

    /// Add an enemy to the active set immediately.
    pub fn spawn_enemy(&mut self, position: Vec3) -> EnemyId {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;

        self.enemies.push(EnemyState::new(id, position, &self.config));
        self.events.push(SessionEvent::EnemySpawned { id, position });
        debug!("Spawned enemy {:?} at {}", id, position);
        id
    }

    /// Melee attack against every enemy in range.
    ///
    /// Suppressed entirely while the cooldown is running.
    pub fn attack(&mut self) -> AttackOutcome {
        if self.over || self.attack_cooldown > 0 {
            return AttackOutcome::Suppressed;
        }
        self.attack_cooldown = self.config.attack_cooldown;

        let anchor = self.player.position + Vec3::Y * self.config.attack_anchor_height;
        let player_position = self.player.position;
        let range = self.player.attack_range;
        let damage = self.config.attack_damage;
        let hit_timer = self.config.hit_timer;

        let mut hits = 0;
        let mut killed = Vec::new();
        for enemy in &mut self.enemies {
            if enemy.position.distance(player_position) < range {
                enemy.take_hit(damage, hit_timer);
                hits += 1;
                if enemy.is_dead() {
                    killed.push(enemy.id);
                }
            }
        }

        self.enemies.retain(|e| !killed.contains(&e.id));
        for id in &killed {
            self.score += self.config.kill_score;
            info!("Enemy {:?} killed, score {}", id, self.score);
            self.events.push(SessionEvent::EnemyKilled { id: *id });
            self.events.push(SessionEvent::ScoreChanged { score: self.score });

            let position = self.random_spawn_position();
            self.pending_spawns.push_back(PendingSpawn { position });
        }

        let id = EffectId(self.next_effect_id);
        self.next_effect_id += 1;
        self.effects.push(AttackEffect::new(id, anchor, &self.config));
        self.events.push(SessionEvent::EffectSpawned { id, position: anchor });

        AttackOutcome::Fired {
            hits,
            kills: killed.len(),
        }
    }

    /// Advance the game by one tick.
    pub fn tick(&mut self) {
        if self.over {
            return;
        }

        if self.attack_cooldown > 0 {
            self.attack_cooldown -= 1;
        }

        while let Some(spawn) = self.pending_spawns.pop_front() {
            self.spawn_enemy(spawn.position);
        }

        if self.update_enemies() {
            return;
        }
        self.update_effects();
        self.update_player();
        self.camera.follow(self.player.position, &self.config);
    }

    /// Chase, contact damage and hit bob. Returns true if the player died.
    fn update_enemies(&mut self) -> bool {
        let player_position = self.player.position;
        let contact_radius = self.config.contact_radius;
        let damage_scale = self.config.contact_damage_scale;
        let bob = self.config.hit_bob_amplitude;

        for enemy in &mut self.enemies {
            enemy.step_toward(player_position);

            if enemy.position.distance(player_position) < contact_radius {
                self.health -= f64::from(enemy.damage * damage_scale);
                self.events.push(SessionEvent::HealthChanged {
                    health: self.health,
                });

                if self.health <= 0.0 {
                    self.over = true;
                    info!("Player died with score {}", self.score);
                    self.events.push(SessionEvent::GameOver { score: self.score });
                    return true;
                }
            }

            enemy.advance_hit_bob(bob);
        }
        false
    }

    fn update_effects(&mut self) {
        for i in (0..self.effects.len()).rev() {
            if self.effects[i].advance(&self.config) {
                let effect = self.effects.remove(i);
                debug!("Attack effect {:?} expired", effect.id);
                self.events.push(SessionEvent::EffectExpired { id: effect.id });
            }
        }
    }

    fn update_player(&mut self) {
        let config = &self.config;
        let player = &mut self.player;

        let mut movement = self.input.movement(player.speed);
        player.velocity.y -= config.gravity;
        movement.y = player.velocity.y;

        player.position += movement;
        player.render_position = player.position;

        resolve_ground(player, config);

        player.yaw = -self.input.mouse_offset.x * config.mouse_yaw_sensitivity;
    }
}

/// Keep the player's feet on the ground. Returns true if it had to clamp.
pub fn resolve_ground(player: &mut PlayerState, config: &GameConfig) -> bool {
    if player.foot_height(config) < config.ground_height {
        player.position.y = config.ground_height - config.foot_offset;
        player.velocity.y = 0.0;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::MoveKey;

    fn session() -> GameSession {
        GameSession::empty(GameConfig::default())
    }

    #[test]
    fn new_session_spawns_initial_enemies_in_area() {
        let config = GameConfig {
            rng_seed: Some(7),
            ..GameConfig::default()
        };
        let mut session = GameSession::new(config);

        assert_eq!(session.enemies.len(), 5);
        for enemy in &session.enemies {
            assert!(enemy.position.x.abs() <= 25.0);
            assert!(enemy.position.z.abs() <= 25.0);
            assert_eq!(enemy.position.y, 0.0);
            assert_eq!(enemy.health, 30.0);
        }

        let spawned = session
            .drain_events()
            .iter()
            .filter(|e| matches!(e, SessionEvent::EnemySpawned { .. }))
            .count();
        assert_eq!(spawned, 5);
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let config = GameConfig {
            rng_seed: Some(42),
            ..GameConfig::default()
        };
        let a = GameSession::new(config.clone());
        let b = GameSession::new(config);

        let positions_a: Vec<_> = a.enemies.iter().map(|e| e.position).collect();
        let positions_b: Vec<_> = b.enemies.iter().map(|e| e.position).collect();
        assert_eq!(positions_a, positions_b);
    }

    #[test]
    fn attack_during_cooldown_changes_nothing() {
        let mut session = session();
        session.spawn_enemy(Vec3::new(3.0, 0.0, 0.0));
        session.attack_cooldown = 5;
        session.drain_events();

        let outcome = session.attack();

        assert_eq!(outcome, AttackOutcome::Suppressed);
        assert_eq!(session.attack_cooldown, 5);
        assert_eq!(session.enemies[0].health, 30.0);
        assert!(!session.enemies[0].is_hit);
        assert!(session.effects.is_empty());
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn attack_damages_only_enemies_in_range() {
        let mut session = session();
        let near = session.spawn_enemy(Vec3::new(0.0, 0.0, 6.9));
        let far = session.spawn_enemy(Vec3::new(7.0, 0.0, 0.0));

        let outcome = session.attack();

        assert_eq!(outcome, AttackOutcome::Fired { hits: 1, kills: 0 });
        assert_eq!(session.attack_cooldown, 20);
        let near = session.enemy(near).unwrap();
        assert_eq!(near.health, 15.0);
        assert!(near.is_hit);
        assert_eq!(near.hit_timer, 10);
        let far = session.enemy(far).unwrap();
        assert_eq!(far.health, 30.0);
        assert!(!far.is_hit);
    }

    #[test]
    fn attack_distance_includes_height() {
        let mut session = session();
        session.player.position = Vec3::new(0.0, -0.6, 0.0);
        // Horizontally 6.99 away, but the vertical gap pushes it out of range
        let id = session.spawn_enemy(Vec3::new(6.99, 0.0, 0.0));

        session.attack();

        assert_eq!(session.enemy(id).unwrap().health, 30.0);
    }

    #[test]
    fn every_enemy_in_range_is_hit_by_one_attack() {
        let mut session = session();
        for x in [1.0, -2.0, 4.0] {
            session.spawn_enemy(Vec3::new(x, 0.0, 0.0));
        }

        let outcome = session.attack();

        assert_eq!(outcome, AttackOutcome::Fired { hits: 3, kills: 0 });
        assert!(session.enemies.iter().all(|e| e.health == 15.0));
    }

    #[test]
    fn killing_blow_scores_and_queues_replacement() {
        let mut session = session();
        let id = session.spawn_enemy(Vec3::new(5.0, 0.0, 0.0));
        session.enemies[0].health = 15.0;
        session.drain_events();

        let outcome = session.attack();

        assert_eq!(outcome, AttackOutcome::Fired { hits: 1, kills: 1 });
        assert!(session.enemy(id).is_none());
        assert_eq!(session.score, 10);
        assert_eq!(session.pending_spawns.len(), 1);

        let events = session.drain_events();
        assert!(events.contains(&SessionEvent::EnemyKilled { id }));
        assert!(events.contains(&SessionEvent::ScoreChanged { score: 10 }));
        assert!(events
            .iter()
            .any(|e| matches!(e, SessionEvent::EffectSpawned { .. })));
    }

    #[test]
    fn replacement_joins_on_next_tick() {
        let mut session = session();
        session.spawn_enemy(Vec3::new(1.0, 0.0, 0.0));
        session.spawn_enemy(Vec3::new(0.0, 0.0, 2.0));
        session.enemies[0].health = 15.0;
        session.enemies[1].health = 15.0;

        session.attack();
        assert!(session.enemies.is_empty());
        assert_eq!(session.pending_spawns.len(), 2);

        session.tick();
        assert_eq!(session.enemies.len(), 2);
        assert!(session.pending_spawns.is_empty());
        assert_eq!(session.score, 20);
    }

    #[test]
    fn enemy_count_never_drops_after_kills() {
        let config = GameConfig {
            rng_seed: Some(3),
            attack_range: 100.0,
            enemy_health: 15.0,
            ..GameConfig::default()
        };
        let mut session = GameSession::new(config);

        for _ in 0..5 {
            session.attack();
            session.tick();
            assert_eq!(session.enemies.len(), 5);
            for _ in 0..20 {
                session.tick();
            }
        }
        assert_eq!(session.score, 250);
    }

    #[test]
    fn attack_effect_anchors_above_player() {
        let mut session = session();
        session.player.position = Vec3::new(2.0, -0.6, 1.0);

        session.attack();

        assert_eq!(session.effects.len(), 1);
        assert_eq!(session.effects[0].position, Vec3::new(2.0, 0.4, 1.0));
        assert_eq!(session.effects[0].scale, 1.0);
    }

    #[test]
    fn cooldown_counts_down_and_rearms() {
        let mut session = session();
        session.attack();

        for _ in 0..19 {
            session.tick();
            assert_eq!(session.attack(), AttackOutcome::Suppressed);
        }
        session.tick();
        assert_eq!(session.attack_cooldown, 0);
        assert!(matches!(session.attack(), AttackOutcome::Fired { .. }));
    }

    #[test]
    fn effect_expires_on_seventeenth_tick() {
        let mut session = session();
        session.attack();
        let id = session.effects[0].id;

        for _ in 0..16 {
            session.tick();
        }
        assert!(session.effect(id).is_some());
        session.drain_events();

        session.tick();
        assert!(session.effect(id).is_none());
        assert!(session
            .drain_events()
            .contains(&SessionEvent::EffectExpired { id }));
    }

    #[test]
    fn effect_fades_each_tick() {
        let mut session = session();
        session.attack();

        session.tick();

        let effect = &session.effects[0];
        assert!((effect.scale - 1.1).abs() < 1e-6);
        assert!((effect.opacity - 0.72).abs() < 1e-6);
    }

    #[test]
    fn held_forward_and_right_moves_diagonally() {
        let mut session = session();
        session.input.key_down(MoveKey::Forward);
        session.input.key_down(MoveKey::Right);
        session.player.position = Vec3::new(0.0, 10.0, 0.0);

        session.tick();

        let p = session.player.position;
        assert!((p.x - 0.2).abs() < 1e-6);
        assert!((p.z + 0.2).abs() < 1e-6);
        assert!((p.y - 9.95).abs() < 1e-5);
    }

    #[test]
    fn gravity_accumulates_while_airborne() {
        let mut session = session();
        session.player.position = Vec3::new(0.0, 10.0, 0.0);

        session.tick();
        session.tick();

        assert!((session.player.velocity.y + 0.1).abs() < 1e-6);
        assert!((session.player.position.y - 9.85).abs() < 1e-5);
    }

    #[test]
    fn player_falls_then_lands_on_ground() {
        let mut session = session();

        // y: -0.05, -0.15, -0.30, -0.50 keep the feet above ground
        for _ in 0..4 {
            session.tick();
        }
        assert!((session.player.position.y + 0.5).abs() < 1e-5);
        assert!((session.player.velocity.y + 0.2).abs() < 1e-6);

        // -0.75 puts the feet below ground and gets clamped
        session.tick();
        assert!((session.player.position.y + 0.6).abs() < 1e-6);
        assert_eq!(session.player.velocity.y, 0.0);
        assert!((session.player.render_position.y + 0.75).abs() < 1e-5);

        // Resting: drawn where integration left it, before the clamp
        session.tick();
        assert!((session.player.position.y + 0.6).abs() < 1e-6);
        assert!((session.player.render_position.y + 0.65).abs() < 1e-5);
    }

    #[test]
    fn ground_clamp_is_idempotent() {
        let config = GameConfig::default();
        let mut player = PlayerState::new(&config);
        player.position.y = -5.0;
        player.velocity.y = -1.0;

        assert!(resolve_ground(&mut player, &config));
        let clamped = player.clone();

        assert!(!resolve_ground(&mut player, &config));
        assert_eq!(player, clamped);
    }

    #[test]
    fn ground_clamp_leaves_airborne_player_alone() {
        let config = GameConfig::default();
        let mut player = PlayerState::new(&config);
        player.position.y = 3.0;
        player.velocity.y = -0.3;

        assert!(!resolve_ground(&mut player, &config));
        assert_eq!(player.velocity.y, -0.3);
    }

    #[test]
    fn yaw_follows_mouse_offset() {
        let mut session = session();
        session.input.mouse_offset.x = 200.0;

        session.tick();

        assert!((session.player.yaw + 1.0).abs() < 1e-6);
    }

    #[test]
    fn contact_drains_health_each_tick() {
        let mut session = session();
        session.player.position = Vec3::new(0.0, -0.6, 0.0);
        session.spawn_enemy(Vec3::new(1.0, 0.0, 0.0));
        let start = session.health;

        session.tick();
        session.tick();

        assert!((start - session.health - 0.2).abs() < 1e-3);
    }

    #[test]
    fn distant_enemy_deals_no_damage() {
        let mut session = session();
        session.spawn_enemy(Vec3::new(10.0, 0.0, 0.0));
        let start = session.health;

        session.tick();

        assert_eq!(session.health, start);
    }

    #[test]
    fn lethal_contact_ends_session_with_score() {
        let mut session = session();
        session.player.position = Vec3::new(0.0, -0.6, 0.0);
        session.spawn_enemy(Vec3::new(1.0, 0.0, 0.0));
        session.score = 40;
        session.health = 0.005;
        session.drain_events();

        session.tick();

        assert!(session.is_over());
        assert!(session.health <= 0.0);
        assert!(session
            .drain_events()
            .contains(&SessionEvent::GameOver { score: 40 }));
    }

    #[test]
    fn finished_session_ignores_ticks_and_attacks() {
        let mut session = session();
        session.player.position = Vec3::new(0.0, -0.6, 0.0);
        session.spawn_enemy(Vec3::new(1.0, 0.0, 0.0));
        session.health = 0.05;
        session.tick();
        assert!(session.is_over());

        let player = session.player.clone();
        let enemies = session.enemies.clone();
        let camera = session.camera.clone();
        let health = session.health;
        session.tick();
        assert_eq!(session.player, player);
        assert_eq!(session.enemies, enemies);
        assert_eq!(session.camera, camera);
        assert_eq!(session.health, health);
        assert_eq!(session.attack(), AttackOutcome::Suppressed);
    }

    #[test]
    fn hit_enemy_bobs_then_settles() {
        let mut session = session();
        let id = session.spawn_enemy(Vec3::new(30.0, 0.0, 0.0));
        session.enemies[0].take_hit(0.0, 10);

        session.tick();
        let enemy = session.enemy(id).unwrap();
        assert!((enemy.render_offset_y - 10.0_f32.sin() * 0.5).abs() < 1e-6);
        assert_eq!(enemy.position.y, 0.0);

        for _ in 0..10 {
            session.tick();
        }
        let enemy = session.enemy(id).unwrap();
        assert!(!enemy.is_hit);
        assert_eq!(enemy.render_offset_y, 0.0);
    }

    #[test]
    fn camera_trails_player() {
        let mut session = session();
        for _ in 0..300 {
            session.tick();
        }

        let target = FollowCamera::target(session.player.position, &session.config);
        assert!(session.camera.position.distance(target) < 1e-3);
        assert_eq!(
            session.camera.look_at,
            session.player.position + Vec3::Y * 2.0
        );
    }
}
