use super::projectile::{Projectile, ProjectileOwner};
use crate::config::GameConfig;
use crate::geometry::Rect;
use crate::palette;

/// Horizontal movement request for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Still,
    Right,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Still => 0.0,
            Direction::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Frames until the next shot is allowed
    pub fire_cooldown: u32,
    pub lives: u32,
    pub score: u32,
}

impl Player {
    /// A fresh ship centred on the bottom line with full lives and no score
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: (config.field_width - config.player_width) / 2.0,
            y: config.player_y,
            width: config.player_width,
            height: config.player_height,
            fire_cooldown: 0,
            lives: config.starting_lives,
            score: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Moves by `speed` in `direction`, then clamps to `[0, field_width - width]`
    pub fn move_in(&mut self, direction: Direction, speed: f64, field_width: f64) {
        self.x += direction.sign() * speed;
        self.x = self.x.min(field_width - self.width).max(0.0);
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown == 0
    }

    /// Fires one upward shot from above the ship's centre if the cooldown allows
    pub fn try_fire(&mut self, config: &GameConfig) -> Option<Projectile> {
        if !self.can_fire() {
            return None;
        }

        self.fire_cooldown = config.fire_cooldown_frames;
        Some(Projectile::new(
            self.x + self.width / 2.0,
            self.y - 8.0,
            -config.projectile_speed,
            palette::PLAYER_SHOT,
            ProjectileOwner::Player,
        ))
    }

    pub fn update_cooldown(&mut self) {
        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);
    }

    /// Removes one life; returns true when none are left
    pub fn take_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        !self.is_alive()
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }
}
