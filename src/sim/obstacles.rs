//! Obstacle lifecycle: spawn timing, scrolling, recycling, collision
//!
//! Obstacles are floor columns that scroll left at the global game speed.
//! A column that leaves the screen is recycled in place (repositioned off
//! the right edge with fresh geometry) rather than reallocated, so the
//! collection never grows past the cap.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::Rgb;
use crate::consts::*;

/// A scrolling floor column
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Top-left corner in pixels
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity, recomputed from the global speed every tick
    pub vel_x: f32,
    pub color: Rgb,
}

impl Obstacle {
    /// Fresh column just off the right edge. Height first, then the color
    /// channels, to keep the draw order stable for a fixed seed.
    fn spawn(view: Vec2, rng: &mut Pcg32) -> Self {
        let height = rng.random_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT);
        Self {
            pos: Vec2::new(view.x + OBSTACLE_WIDTH, view.y - height),
            size: Vec2::new(OBSTACLE_WIDTH, height),
            vel_x: 0.0,
            color: Rgb::random(rng),
        }
    }

    /// Re-enter from the right edge with fresh height and color, reusing
    /// the slot
    fn recycle(&mut self, view: Vec2, rng: &mut Pcg32) {
        let height = rng.random_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT);
        self.pos = Vec2::new(view.x + OBSTACLE_WIDTH, view.y - height);
        self.size.y = height;
        self.color = Rgb::random(rng);
    }

    /// Fully past the left edge
    #[inline]
    fn offscreen(&self) -> bool {
        self.pos.x + self.size.x <= 0.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// The live obstacle collection plus its spawn countdown
#[derive(Debug, Clone)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
    /// Ticks until the next spawn check
    pub spawn_timer: f32,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::with_capacity(MAX_OBSTACLES),
            spawn_timer: SPAWN_INTERVAL,
        }
    }

    /// Advance one tick. Returns true if any obstacle overlaps the player.
    ///
    /// Per obstacle the order is recycle, overlap test, move: the test sees
    /// positions as of the end of the previous tick, the same tick ordering
    /// the player box follows. The countdown reset tightens with speed but
    /// never drops below the floor, and a spawn only happens while the
    /// collection is under the cap.
    pub fn update(&mut self, player: &Aabb, game_speed: f32, view: Vec2, rng: &mut Pcg32) -> bool {
        self.spawn_timer -= 1.0;
        if self.spawn_timer <= 0.0 {
            self.spawn_timer =
                (SPAWN_INTERVAL - game_speed * SPAWN_TIGHTEN_FACTOR).max(SPAWN_INTERVAL_FLOOR);
            if self.obstacles.len() < MAX_OBSTACLES {
                self.obstacles.push(Obstacle::spawn(view, rng));
            }
        }

        let mut collided = false;
        for obstacle in &mut self.obstacles {
            if obstacle.offscreen() {
                obstacle.recycle(view, rng);
            }
            if player.overlaps(&obstacle.aabb()) {
                collided = true;
            }
            obstacle.vel_x = -game_speed;
            obstacle.pos.x += obstacle.vel_x;
        }
        collided
    }

    /// Drop every live obstacle and restart the countdown (collision reset)
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = SPAWN_INTERVAL;
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
