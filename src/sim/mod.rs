//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use obstacles::{Obstacle, ObstacleField};
pub use player::Player;
pub use state::{GamePhase, GameState};
pub use tick::{TickEvents, TickInput, tick};
