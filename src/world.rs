//! World state for one play session and the per-frame simulation step

use rand::Rng;

use crate::audio::SoundEffect;
use crate::config::GameConfig;
use crate::entities::{
    Barrier, Direction, Enemy, Formation, GameState, Player, Projectile, ProjectileOwner,
};
use crate::geometry::circle_hits_rect;
use crate::input::Controls;

/// Everything live in one session: entities plus formation and level state
#[derive(Debug, Clone)]
pub struct World {
    pub config: GameConfig,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub barriers: Vec<Barrier>,
    pub formation: Formation,
    pub level: u32,
    pub state: GameState,
}

impl World {
    /// A fresh level: new player, full enemy grid, intact barriers, no projectiles
    pub fn new(config: GameConfig, level: u32) -> Self {
        Self {
            player: Player::new(&config),
            enemies: Enemy::spawn_grid(&config),
            projectiles: Vec::new(),
            barriers: Barrier::spawn_row(&config),
            formation: Formation::new(level, &config),
            level,
            state: GameState::Playing,
            config,
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Advances the world by one frame.
    ///
    /// `dt_ms` scales formation movement; player and projectile movement are per
    /// frame. `now_ms` is the clock the enemy shot interval is measured against.
    /// Returns the sound cues raised during the frame.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        controls: Controls,
        dt_ms: f64,
        now_ms: f64,
        rng: &mut R,
    ) -> Vec<SoundEffect> {
        let mut sounds = Vec::new();
        if self.state != GameState::Playing {
            return sounds;
        }

        self.update_player(controls, &mut sounds);

        if self
            .formation
            .advance(&mut self.enemies, dt_ms, &self.config)
        {
            log::debug!(
                "Formation bounced, heading {} at {:.4}/ms",
                self.formation.direction_x,
                self.formation.speed
            );
        }

        self.enemy_fire(now_ms, rng, &mut sounds);

        // Update projectiles
        for projectile in &mut self.projectiles {
            projectile.update();
        }

        // Remove out-of-bounds projectiles
        let (height, margin) = (self.config.field_height, self.config.projectile_margin);
        self.projectiles
            .retain(|p| !p.is_out_of_bounds(height, margin));

        self.check_collisions(&mut sounds);

        // Enemies reaching the player's line end the game
        let player_line = self.player.y;
        if self.enemies.iter().any(|e| e.rect().bottom() >= player_line) {
            self.end_game("enemies reached the player line");
        }

        sounds
    }

    /// Left and right are applied as two independent moves, so holding both
    /// cancels out away from the walls
    fn update_player(&mut self, controls: Controls, sounds: &mut Vec<SoundEffect>) {
        let (speed, width) = (self.config.player_speed, self.config.field_width);
        if controls.left {
            self.player.move_in(Direction::Left, speed, width);
        }
        if controls.right {
            self.player.move_in(Direction::Right, speed, width);
        }
        if controls.fire
            && let Some(shot) = self.player.try_fire(&self.config)
        {
            self.projectiles.push(shot);
            sounds.push(SoundEffect::PlayerShot);
        }
        self.player.update_cooldown();
    }

    fn enemy_fire<R: Rng + ?Sized>(
        &mut self,
        now_ms: f64,
        rng: &mut R,
        sounds: &mut Vec<SoundEffect>,
    ) {
        if !self
            .formation
            .ready_to_fire(now_ms, self.config.enemy_shot_interval_ms)
        {
            return;
        }

        if let Some(idx) = Formation::pick_shooter(&self.enemies, rng) {
            let shot = self.enemies[idx].fire(self.config.projectile_speed);
            self.projectiles.push(shot);
            sounds.push(SoundEffect::EnemyShot);
        }
    }

    /// Resolves every live projectile at most once against its targets.
    ///
    /// Hits are marked during the scan and removed afterwards so no entry is
    /// skipped or visited twice. An enemy destroyed earlier in the scan can't
    /// be hit again by a later projectile in the same frame.
    fn check_collisions(&mut self, sounds: &mut Vec<SoundEffect>) {
        let radius = self.config.projectile_radius;
        let mut projectiles_to_remove = Vec::new();
        let mut enemies_to_remove = Vec::new();

        for (p_idx, projectile) in self.projectiles.iter().enumerate() {
            let (px, py) = (projectile.x, projectile.y);

            let spent = match projectile.owner() {
                ProjectileOwner::Enemy => {
                    if circle_hits_rect(px, py, radius, &self.player.rect()) {
                        sounds.push(SoundEffect::PlayerHit);
                        if self.player.take_hit() {
                            log::info!("Player out of lives");
                            self.state = GameState::GameOver;
                        }
                        true
                    } else {
                        damage_first_barrier(&mut self.barriers, px, py, radius)
                    }
                }
                ProjectileOwner::Player => {
                    let target = self.enemies.iter().enumerate().position(|(e_idx, enemy)| {
                        !enemies_to_remove.contains(&e_idx)
                            && circle_hits_rect(px, py, radius, &enemy.rect())
                    });

                    match target {
                        Some(e_idx) => {
                            enemies_to_remove.push(e_idx);
                            self.player.add_score(self.config.enemy_points);
                            sounds.push(SoundEffect::EnemyDestroyed);
                            true
                        }
                        None => damage_first_barrier(&mut self.barriers, px, py, radius),
                    }
                }
            };

            if spent {
                projectiles_to_remove.push(p_idx);
            }
        }

        // Remove in reverse order to avoid index issues
        for idx in projectiles_to_remove.into_iter().rev() {
            self.projectiles.remove(idx);
        }

        enemies_to_remove.sort_unstable();
        for idx in enemies_to_remove.into_iter().rev() {
            self.enemies.remove(idx);
        }

        if self.state == GameState::GameOver {
            log::info!(
                "Game over on level {} with score {}",
                self.level,
                self.player.score
            );
        }
    }

    fn end_game(&mut self, reason: &str) {
        if self.state == GameState::Playing {
            log::info!(
                "Game over on level {} with score {}: {reason}",
                self.level,
                self.player.score
            );
        }
        self.state = GameState::GameOver;
    }
}

/// Damages the first barrier the projectile overlaps. Depleted barriers still
/// absorb the shot. Returns true if a barrier was hit.
fn damage_first_barrier(barriers: &mut [Barrier], x: f64, y: f64, radius: f64) -> bool {
    match barriers
        .iter_mut()
        .find(|barrier| circle_hits_rect(x, y, radius, &barrier.rect()))
    {
        Some(barrier) => {
            barrier.damage();
            true
        }
        None => false,
    }
}
