//! Game tuning and presentation settings
//!
//! Defaults reproduce the classic layout. A JSON file named by `INVADERS_CONFIG`
//! can override any subset of fields.

use std::fs;
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, ensure};
use serde::{Deserialize, Serialize};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "INVADERS_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f64,
    pub field_height: f64,

    // === Player ===
    pub player_width: f64,
    pub player_height: f64,
    /// Fixed vertical line the player sits on; enemies reaching it end the game
    pub player_y: f64,
    /// Horizontal distance per frame
    pub player_speed: f64,
    /// Frames between player shots
    pub fire_cooldown_frames: u32,
    pub starting_lives: u32,

    // === Projectiles ===
    pub projectile_radius: f64,
    /// Vertical distance per frame
    pub projectile_speed: f64,
    /// Distance past the top/bottom edge before a projectile is discarded
    pub projectile_margin: f64,

    // === Enemies ===
    pub enemy_width: f64,
    pub enemy_height: f64,
    pub enemy_rows: usize,
    pub enemy_cols: usize,
    pub enemy_spacing_x: f64,
    pub enemy_spacing_y: f64,
    pub enemy_origin_x: f64,
    pub enemy_origin_y: f64,
    /// Distance per millisecond at level 1; multiplied by the level number
    pub enemy_base_speed: f64,
    pub enemy_drop: f64,
    /// Speed multiplier applied on every bounce
    pub enemy_speed_growth: f64,
    pub enemy_edge_margin: f64,
    /// Only test the edge the grid is heading toward when checking for a bounce
    pub enemy_bounce_leading_edge_only: bool,
    pub enemy_shot_interval_ms: f64,
    pub enemy_points: u32,

    // === Barriers ===
    pub barrier_count: usize,
    pub barrier_width: f64,
    pub barrier_height: f64,
    pub barrier_y: f64,
    pub barrier_health: u32,

    // === Presentation ===
    pub sound: bool,
    pub frame_ms: u64,
    pub star_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        let field_height = 800.0;
        Self {
            field_width: 600.0,
            field_height,

            player_width: 42.0,
            player_height: 20.0,
            player_y: field_height - 60.0,
            player_speed: 6.0,
            fire_cooldown_frames: 15,
            starting_lives: 3,

            projectile_radius: 4.0,
            projectile_speed: 8.0,
            projectile_margin: 20.0,

            enemy_width: 32.0,
            enemy_height: 24.0,
            enemy_rows: 5,
            enemy_cols: 11,
            enemy_spacing_x: 50.0,
            enemy_spacing_y: 40.0,
            enemy_origin_x: 60.0,
            enemy_origin_y: 80.0,
            enemy_base_speed: 0.15,
            enemy_drop: 30.0,
            enemy_speed_growth: 1.01,
            enemy_edge_margin: 10.0,
            enemy_bounce_leading_edge_only: false,
            enemy_shot_interval_ms: 1500.0,
            enemy_points: 100,

            barrier_count: 4,
            barrier_width: 80.0,
            barrier_height: 40.0,
            barrier_y: field_height - 160.0,
            barrier_health: 20,

            sound: true,
            frame_ms: 16,
            star_count: 50,
        }
    }
}

impl GameConfig {
    /// Load from the file named by [`CONFIG_ENV`], or defaults when it is unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("reading config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .wrap_err_with(|| format!("loading config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).wrap_err("parsing config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.field_width > 0.0 && self.field_height > 0.0,
            "field size must be positive"
        );
        ensure!(
            self.player_width > 0.0 && self.player_width <= self.field_width,
            "player width must fit the field"
        );
        ensure!(
            self.player_y >= 0.0 && self.player_y + self.player_height <= self.field_height,
            "player line must lie inside the field ({} + {} > {})",
            self.player_y,
            self.player_height,
            self.field_height
        );
        ensure!(self.starting_lives > 0, "starting lives must be at least 1");
        ensure!(
            self.enemy_rows > 0 && self.enemy_cols > 0,
            "enemy grid needs at least one row and column"
        );
        let grid_right = self.enemy_origin_x
            + (self.enemy_cols - 1) as f64 * self.enemy_spacing_x
            + self.enemy_width;
        ensure!(
            grid_right <= self.field_width,
            "enemy grid is wider than the field ({grid_right} > {})",
            self.field_width
        );
        ensure!(
            self.barrier_width * self.barrier_count as f64 <= self.field_width,
            "barriers do not fit the field"
        );
        ensure!(
            self.barrier_y >= 0.0 && self.barrier_y + self.barrier_height <= self.field_height,
            "barriers must lie inside the field ({} + {} > {})",
            self.barrier_y,
            self.barrier_height,
            self.field_height
        );
        ensure!(self.barrier_health > 0, "barrier health must be positive");
        ensure!(
            self.enemy_speed_growth >= 1.0,
            "enemy speed growth must not shrink the speed"
        );
        Ok(())
    }

    /// Left edge of each barrier, evenly spaced with equal gaps at both ends
    pub fn barrier_slots(&self) -> Vec<f64> {
        let count = self.barrier_count as f64;
        let gap = (self.field_width - count * self.barrier_width) / (count + 1.0);
        (0..self.barrier_count)
            .map(|i| gap + i as f64 * (self.barrier_width + gap))
            .collect()
    }
}
