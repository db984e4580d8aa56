use rand::Rng;

use super::enemy::Enemy;
use crate::config::GameConfig;

/// Shared movement and firing state of the enemy grid
#[derive(Debug, Clone)]
pub struct Formation {
    /// Movement direction (-1 left, 1 right)
    pub direction_x: f64,
    /// Horizontal distance per millisecond
    pub speed: f64,
    /// Clock time of the last enemy shot, in milliseconds
    pub last_shot_ms: f64,
}

impl Formation {
    /// Formation state for a new level: moving right, speed scaled by the level
    pub fn new(level: u32, config: &GameConfig) -> Self {
        Self {
            direction_x: 1.0,
            speed: config.enemy_base_speed * level as f64,
            last_shot_ms: 0.0,
        }
    }

    /// Slides every enemy sideways, then bounces the whole grid if either outer
    /// edge is within the margin. Returns true on a bounce.
    pub fn advance(&mut self, enemies: &mut [Enemy], dt_ms: f64, config: &GameConfig) -> bool {
        let step = self.direction_x * self.speed * dt_ms;
        for enemy in enemies.iter_mut() {
            enemy.x += step;
        }

        // Checked against post-move positions so the flip happens on the crossing frame
        let left = enemies.iter().map(|e| e.x).fold(f64::INFINITY, f64::min);
        let right = enemies
            .iter()
            .map(|e| e.x + e.width)
            .fold(f64::NEG_INFINITY, f64::max);

        let margin = config.enemy_edge_margin;
        let mut hit_left = left <= margin;
        let mut hit_right = right >= config.field_width - margin;
        if config.enemy_bounce_leading_edge_only {
            hit_left &= self.direction_x < 0.0;
            hit_right &= self.direction_x > 0.0;
        }
        if !(hit_left || hit_right) {
            return false;
        }

        self.direction_x = -self.direction_x;
        for enemy in enemies.iter_mut() {
            enemy.y += config.enemy_drop;
        }
        self.speed *= config.enemy_speed_growth;
        true
    }

    /// True when more than `interval_ms` has passed since the last shot. The shot
    /// clock restarts whether or not anyone is left to fire.
    pub fn ready_to_fire(&mut self, now_ms: f64, interval_ms: f64) -> bool {
        if now_ms - self.last_shot_ms > interval_ms {
            self.last_shot_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Uniformly random index into `enemies`, or None when it is empty
    pub fn pick_shooter<R: Rng + ?Sized>(enemies: &[Enemy], rng: &mut R) -> Option<usize> {
        if enemies.is_empty() {
            return None;
        }
        Some(rng.random_range(0..enemies.len()))
    }
}
