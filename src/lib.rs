//! Pag Dash - a browser endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions)
//! - `renderer`: Canvas 2D drawing
//! - `highscores`: Persisted best score
//! - `settings`: Player preferences
//! - `audio`: Music playback

pub mod highscores;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use settings::Settings;

use rand::Rng;

/// Game configuration constants
pub mod consts {
    use super::Rgb;

    /// Scroll speed at the start of a life (pixels per tick)
    pub const DEFAULT_GAME_SPEED: f32 = 10.0;
    /// Speed gained every tick, unbounded until a collision
    pub const GAME_SPEED_RAMP: f32 = 0.005;
    /// Downward acceleration while airborne (pixels per tick²)
    pub const GRAVITY: f32 = 1.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Fixed horizontal position of the player
    pub const PLAYER_START_X: f32 = 50.0;
    /// Upward velocity of a fresh jump; also caps the sustain counter
    pub const JUMP_FORCE: f32 = 20.0;
    /// Divisor for the extra pull gained per sustained tick
    pub const JUMP_SUSTAIN_DIVISOR: f32 = 50.0;

    /// Obstacle column width
    pub const OBSTACLE_WIDTH: f32 = 10.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 50.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 200.0;
    /// Maximum live obstacles
    pub const MAX_OBSTACLES: usize = 2;

    /// Spawn countdown reset value before difficulty scaling (ticks)
    pub const SPAWN_INTERVAL: f32 = 100.0;
    /// The countdown reset never drops below this
    pub const SPAWN_INTERVAL_FLOOR: f32 = 60.0;
    /// How strongly game speed tightens the spawn interval
    pub const SPAWN_TIGHTEN_FACTOR: f32 = 2.0;

    /// Background fill color
    pub const BACKGROUND: Rgb = Rgb::new(24, 24, 27);
}

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random color, one draw per channel
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }

    /// CSS color string for canvas fill styles
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(Rgb::new(24, 24, 27).css(), "rgb(24, 24, 27)");
        assert_eq!(Rgb::new(0, 255, 0).css(), "rgb(0, 255, 0)");
    }
}
