mod barrier;
mod enemy;
mod formation;
mod game_state;
mod player;
mod projectile;

// Re-export all public types
pub use barrier::Barrier;
pub use enemy::Enemy;
pub use formation::Formation;
pub use game_state::GameState;
pub use player::{Direction, Player};
pub use projectile::{Projectile, ProjectileOwner};
