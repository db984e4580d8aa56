use crate::config::GameConfig;
use crate::geometry::Rect;

/// A destructible bunker. Depleted barriers stay in place and still swallow shots.
#[derive(Debug, Clone)]
pub struct Barrier {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub health: u32,
    pub max_health: u32,
}

impl Barrier {
    pub fn new(x: f64, config: &GameConfig) -> Self {
        Self {
            x,
            y: config.barrier_y,
            width: config.barrier_width,
            height: config.barrier_height,
            health: config.barrier_health,
            max_health: config.barrier_health,
        }
    }

    pub fn spawn_row(config: &GameConfig) -> Vec<Barrier> {
        config
            .barrier_slots()
            .into_iter()
            .map(|x| Barrier::new(x, config))
            .collect()
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn damage(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn is_depleted(&self) -> bool {
        self.health == 0
    }

    /// Drawn width, shrinking with remaining health
    pub fn visible_width(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        (self.health as f64 * self.width / self.max_health as f64).ceil()
    }
}
