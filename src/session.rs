//! Session controller: owns the world's lifecycle across levels and restarts

use rand::Rng;

use crate::audio::SoundEffect;
use crate::config::GameConfig;
use crate::entities::GameState;
use crate::input::Controls;
use crate::world::World;

pub struct Session {
    config: GameConfig,
    world: World,
}

impl Session {
    /// Starts at level 1
    pub fn new(config: GameConfig) -> Self {
        log::info!("Starting new session at level 1");
        let world = World::new(config.clone(), 1);
        Self { config, world }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn state(&self) -> GameState {
        self.world.state
    }

    pub fn level(&self) -> u32 {
        self.world.level
    }

    /// Runs one frame, then starts the next level if the grid was cleared.
    ///
    /// The next level is a complete re-initialisation: score and lives start over
    /// along with everything else. A frame that both clears the grid and ends the
    /// game stays game over.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        controls: Controls,
        dt_ms: f64,
        now_ms: f64,
        rng: &mut R,
    ) -> Vec<SoundEffect> {
        let sounds = self.world.step(controls, dt_ms, now_ms, rng);

        if self.world.state == GameState::Playing && self.world.is_cleared() {
            let next = self.world.level + 1;
            log::info!(
                "Level {} cleared with score {}, starting level {next}",
                self.world.level,
                self.world.player.score
            );
            self.world = World::new(self.config.clone(), next);
        }

        sounds
    }

    /// Starts over at level 1 after a game over. Returns false (and does
    /// nothing) while a game is still in progress.
    pub fn restart(&mut self) -> bool {
        if self.world.state != GameState::GameOver {
            return false;
        }

        log::info!("Restarting at level 1");
        self.world = World::new(self.config.clone(), 1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Enemy, Projectile, ProjectileOwner};
    use crate::palette;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_session_starts_at_level_one() {
        let session = Session::new(GameConfig::default());
        assert_eq!(session.level(), 1);
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.world().enemies.len(), 55);
    }

    #[test]
    fn test_cleared_grid_advances_level() {
        let mut session = Session::new(GameConfig::default());
        let mut rng = StdRng::seed_from_u64(9);
        session.world_mut().enemies.clear();
        session.world_mut().player.score = 5500;

        session.update(Controls::default(), 16.0, 0.0, &mut rng);
        assert_eq!(session.level(), 2);
        assert_eq!(session.world().enemies.len(), 55);
        // Fresh player on every level
        assert_eq!(session.world().player.score, 0);
        assert_eq!(session.world().player.lives, 3);
        // Faster formation
        assert!((session.world().formation.speed - 0.30).abs() < 1e-12);
    }

    #[test]
    fn test_game_over_beats_level_advance() {
        let config = GameConfig::default();
        let mut session = Session::new(config.clone());
        let mut rng = StdRng::seed_from_u64(9);
        {
            let world = session.world_mut();
            world.enemies = vec![Enemy::new(200.0, 200.0, 0, &config)];
            world.player.lives = 1;
            // Last enemy and last life go in the same frame
            world.projectiles.push(Projectile::new(
                210.0,
                230.0,
                -8.0,
                palette::PLAYER_SHOT,
                ProjectileOwner::Player,
            ));
            let (px, py) = (world.player.x + 10.0, world.player.y - 8.0);
            world.projectiles.push(Projectile::new(
                px,
                py,
                8.0,
                palette::ENEMY_SHOT,
                ProjectileOwner::Enemy,
            ));
        }

        session.update(Controls::default(), 16.0, 0.0, &mut rng);
        assert!(session.world().enemies.is_empty());
        assert_eq!(session.level(), 1);
        assert_eq!(session.state(), GameState::GameOver);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut session = Session::new(GameConfig::default());
        session.world_mut().player.score = 300;
        assert!(!session.restart());
        assert_eq!(session.world().player.score, 300);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut session = Session::new(GameConfig::default());
        session.world_mut().level = 4;
        session.world_mut().player.score = 1200;
        session.world_mut().player.lives = 0;
        session.world_mut().state = GameState::GameOver;

        assert!(session.restart());
        assert_eq!(session.level(), 1);
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.world().player.lives, 3);
        assert_eq!(session.world().player.score, 0);
    }
}
