// Library exports for the binary and tests
pub use audio::{SoundEffect, Tone};
pub use config::GameConfig;
pub use entities::{
    Barrier, Direction, Enemy, Formation, GameState, Player, Projectile, ProjectileOwner,
};
pub use geometry::{Rect, circle_hits_rect};
pub use input::{Controls, InputAction, InputManager};
pub use session::Session;
pub use world::World;

pub mod app;
pub mod audio;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod renderer;
pub mod session;
pub mod world;
