use super::projectile::{Projectile, ProjectileOwner};
use crate::config::GameConfig;
use crate::geometry::Rect;
use crate::palette::{self, Rgb};

#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Formation row it spawned in; only picks the colour
    pub row: usize,
}

impl Enemy {
    pub fn new(x: f64, y: f64, row: usize, config: &GameConfig) -> Self {
        Self {
            x,
            y,
            width: config.enemy_width,
            height: config.enemy_height,
            row,
        }
    }

    /// Enemy at grid cell (`col`, `row`) of a freshly spawned formation
    pub fn in_grid(col: usize, row: usize, config: &GameConfig) -> Self {
        Self::new(
            config.enemy_origin_x + col as f64 * config.enemy_spacing_x,
            config.enemy_origin_y + row as f64 * config.enemy_spacing_y,
            row,
            config,
        )
    }

    /// The full rows × cols grid, top row first
    pub fn spawn_grid(config: &GameConfig) -> Vec<Enemy> {
        (0..config.enemy_rows)
            .flat_map(|row| (0..config.enemy_cols).map(move |col| Enemy::in_grid(col, row, config)))
            .collect()
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn color(&self) -> Rgb {
        palette::enemy_row(self.row)
    }

    /// Fires one downward shot from the bottom centre
    pub fn fire(&self, speed: f64) -> Projectile {
        Projectile::new(
            self.x + self.width / 2.0,
            self.y + self.height,
            speed,
            palette::ENEMY_SHOT,
            ProjectileOwner::Enemy,
        )
    }
}
