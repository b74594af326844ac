//! Game state and core simulation types
//!
//! Everything the per-tick step reads or writes lives here; multiple
//! independent sessions are just multiple `GameState` values.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::obstacles::ObstacleField;
use super::player::Player;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Menu is up, the world is not stepping yet
    Idle,
    /// Active play; collisions reset the run but stay in this phase
    Running,
}

/// Complete game state, deterministic given the seed and the input stream
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG for obstacle geometry and colors
    pub rng: Pcg32,
    /// Drawable area in pixels, tracks the viewport
    pub view: Vec2,
    pub phase: GamePhase,
    /// Ticks since the session started
    pub time_ticks: u64,
    /// Frames survived this life
    pub score: u64,
    /// Best score this session, seeded from storage at start
    pub high_score: u64,
    /// Current scroll speed (pixels per tick)
    pub game_speed: f32,
    pub player: Player,
    pub obstacles: ObstacleField,
}

impl GameState {
    /// Create an idle session for the given drawable area
    pub fn new(seed: u64, view: Vec2) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            view,
            phase: GamePhase::Idle,
            time_ticks: 0,
            score: 0,
            high_score: 0,
            game_speed: DEFAULT_GAME_SPEED,
            player: Player::new(Vec2::new(PLAYER_START_X, 0.0)),
            obstacles: ObstacleField::new(),
        }
    }

    /// Idle → Running: take the stored high score and begin with a fresh
    /// player. The player spawns at the top and falls to the floor.
    pub fn start(&mut self, stored_high_score: u64) {
        self.high_score = stored_high_score;
        self.player = Player::new(Vec2::new(PLAYER_START_X, 0.0));
        self.phase = GamePhase::Running;
    }

    /// Track the viewport. Only the drawable area changes; entities keep
    /// their positions.
    pub fn resize(&mut self, view: Vec2) {
        self.view = view;
    }

    /// The ground line the player is clamped to
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.view.y
    }

    /// Post-collision reset: the run restarts, the session continues.
    /// The player is left where it was; only the run-scoped state resets.
    pub fn reset_life(&mut self) {
        self.obstacles.reset();
        self.score = 0;
        self.game_speed = DEFAULT_GAME_SPEED;
    }
}
