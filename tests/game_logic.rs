/// Integration tests for game logic
///
/// These drive a whole session frame by frame and check the level and
/// game-over transitions end to end.
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use invaders::palette;
use invaders::{
    Controls, GameConfig, GameState, InputManager, Projectile, ProjectileOwner, Session,
    SoundEffect,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const FRAME_MS: f64 = 16.0;

/// Queues an enemy shot that lands on the player during the next frame
fn shoot_player(session: &mut Session) {
    let world = session.world_mut();
    let (x, y) = (world.player.x + 10.0, world.player.y - 8.0);
    world.projectiles.push(Projectile::new(
        x,
        y,
        8.0,
        palette::ENEMY_SHOT,
        ProjectileOwner::Enemy,
    ));
}

/// Queues a player shot that lands on the first live enemy during the next frame
fn shoot_first_enemy(session: &mut Session) {
    let world = session.world_mut();
    let enemy = &world.enemies[0];
    let (x, y) = (
        enemy.x + enemy.width / 2.0,
        enemy.y + enemy.height / 2.0 + 8.0,
    );
    world.projectiles.push(Projectile::new(
        x,
        y,
        -8.0,
        palette::PLAYER_SHOT,
        ProjectileOwner::Player,
    ));
}

/// Slides the spawned grid left so neither outer edge starts inside a margin
fn pull_grid_clear_of_edges(session: &mut Session) {
    for enemy in &mut session.world_mut().enemies {
        enemy.x -= 20.0;
    }
}

#[test]
fn test_new_session_layout() {
    let session = Session::new(GameConfig::default());
    let world = session.world();

    assert_eq!(world.enemies.len(), 55);
    assert_eq!(world.barriers.len(), 4);
    assert!(world.barriers.iter().all(|b| b.health == 20));
    assert_eq!(world.player.lives, 3);
    assert_eq!(world.player.score, 0);
    assert_eq!(world.level, 1);
    assert_eq!(session.state(), GameState::Playing);
}

#[test]
fn test_losing_all_lives_ends_game_on_that_frame() {
    let mut session = Session::new(GameConfig::default());
    let mut rng = StdRng::seed_from_u64(11);

    for expected_lives in [2, 1] {
        shoot_player(&mut session);
        let sounds = session.update(Controls::default(), FRAME_MS, 0.0, &mut rng);
        assert!(sounds.contains(&SoundEffect::PlayerHit));
        assert_eq!(session.world().player.lives, expected_lives);
        assert_eq!(session.state(), GameState::Playing);
    }

    shoot_player(&mut session);
    session.update(Controls::default(), FRAME_MS, 0.0, &mut rng);
    assert_eq!(session.world().player.lives, 0);
    assert_eq!(session.state(), GameState::GameOver);
}

#[test]
fn test_clearing_grid_starts_next_level() {
    let mut session = Session::new(GameConfig::default());
    let mut rng = StdRng::seed_from_u64(5);

    // With no elapsed time and both edges clear, the grid holds still while it is shot down
    pull_grid_clear_of_edges(&mut session);
    for killed in 1..55u32 {
        shoot_first_enemy(&mut session);
        session.update(Controls::default(), 0.0, 0.0, &mut rng);
        assert_eq!(session.world().formation.direction_x, 1.0);
        assert_eq!(session.world().enemies.len(), 55 - killed as usize);
        assert_eq!(session.world().player.score, killed * 100);
        assert_eq!(session.level(), 1);
    }

    shoot_first_enemy(&mut session);
    let sounds = session.update(Controls::default(), 0.0, 0.0, &mut rng);
    assert!(sounds.contains(&SoundEffect::EnemyDestroyed));

    let world = session.world();
    assert_eq!(session.level(), 2);
    assert_eq!(world.enemies.len(), 55);
    assert_eq!(session.state(), GameState::Playing);
    // The new level rebuilds the player too
    assert_eq!(world.player.score, 0);
    assert_eq!(world.player.lives, 3);
}

#[test]
fn test_restart_returns_to_level_one() {
    let mut session = Session::new(GameConfig::default());
    let mut rng = StdRng::seed_from_u64(2);

    // Reach level 2, then lose there
    session.world_mut().enemies.truncate(1);
    shoot_first_enemy(&mut session);
    session.update(Controls::default(), FRAME_MS, 0.0, &mut rng);
    assert_eq!(session.level(), 2);

    for _ in 0..3 {
        shoot_player(&mut session);
        session.update(Controls::default(), FRAME_MS, 0.0, &mut rng);
    }
    assert_eq!(session.state(), GameState::GameOver);

    // Frames after game over change nothing
    let frozen_y = session.world().enemies[0].y;
    session.update(Controls::default(), FRAME_MS, 5000.0, &mut rng);
    assert_eq!(session.world().enemies[0].y, frozen_y);

    assert!(session.restart());
    let world = session.world();
    assert_eq!(session.level(), 1);
    assert_eq!(session.state(), GameState::Playing);
    assert_eq!(world.player.lives, 3);
    assert_eq!(world.player.score, 0);
    assert_eq!(world.enemies.len(), 55);
}

#[test]
fn test_spawned_grid_steps_down_each_frame_inside_margin() {
    let config = GameConfig::default();
    let mut session = Session::new(config.clone());
    let mut rng = StdRng::seed_from_u64(6);

    // Right edge starts at 592, past the 590 limit, so every frame bounces until
    // the grid reaches the player line
    let mut frames = 0;
    while session.state() == GameState::Playing {
        session.update(Controls::default(), FRAME_MS, 0.0, &mut rng);
        frames += 1;
        let world = session.world();
        assert_eq!(
            world.enemies[0].y,
            config.enemy_origin_y + frames as f64 * config.enemy_drop
        );
    }
    // Bottom row starts at 264 and ends the game once it reaches 740
    assert_eq!(frames, 16);
}

#[test]
fn test_leading_edge_only_grid_bounces_once_from_spawn() {
    let config = GameConfig {
        enemy_bounce_leading_edge_only: true,
        ..GameConfig::default()
    };
    let mut session = Session::new(config.clone());
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..10 {
        session.update(Controls::default(), FRAME_MS, 0.0, &mut rng);
    }
    assert_eq!(session.state(), GameState::Playing);
    assert_eq!(session.world().formation.direction_x, -1.0);
    assert_eq!(
        session.world().enemies[0].y,
        config.enemy_origin_y + config.enemy_drop
    );
}

#[test]
fn test_enemy_fire_rate_over_time() {
    let mut session = Session::new(GameConfig::default());
    let mut rng = StdRng::seed_from_u64(99);
    let mut shot_times = Vec::new();
    pull_grid_clear_of_edges(&mut session);

    // Ten simulated seconds; keep the player alive so the session keeps running
    for frame in 1..=625 {
        let now = frame as f64 * FRAME_MS;
        session.world_mut().player.lives = 3;
        let sounds = session.update(Controls::default(), FRAME_MS, now, &mut rng);
        if sounds.contains(&SoundEffect::EnemyShot) {
            shot_times.push(now);
        }
        if session.state() != GameState::Playing {
            break;
        }
    }

    assert!(!shot_times.is_empty());
    for pair in shot_times.windows(2) {
        assert!(pair[1] - pair[0] > 1500.0);
    }
}

#[test]
fn test_holding_left_and_right_keeps_player_still() {
    let mut session = Session::new(GameConfig::default());
    let mut rng = StdRng::seed_from_u64(4);
    let mut input = InputManager::new(true);
    let now = Instant::now();

    input.handle_key_event(
        KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
        session.state(),
        now,
    );
    input.handle_key_event(
        KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
        session.state(),
        now,
    );

    let start = session.world().player.x;
    for _ in 0..10 {
        let controls = input.controls(now);
        session.update(controls, FRAME_MS, 0.0, &mut rng);
    }
    assert_eq!(session.world().player.x, start);
}

#[test]
fn test_holding_fire_respects_cooldown() {
    let mut session = Session::new(GameConfig::default());
    let mut rng = StdRng::seed_from_u64(8);
    let controls = Controls {
        fire: true,
        ..Controls::default()
    };
    pull_grid_clear_of_edges(&mut session);

    let mut player_shots = 0;
    for _ in 0..30 {
        let sounds = session.update(controls, FRAME_MS, 0.0, &mut rng);
        player_shots += sounds
            .iter()
            .filter(|s| **s == SoundEffect::PlayerShot)
            .count();
    }
    // Frames 0 and 15
    assert_eq!(player_shots, 2);
}
