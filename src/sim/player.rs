//! Player physics and the jump state machine
//!
//! A jump has two branches: an impulse on the first held tick from the
//! ground, then a sustain that pulls slightly harder each tick the key stays
//! held, until the counter caps at the jump force. Releasing the key zeroes
//! the counter without adding a new impulse, so a very short tap still gets
//! the full impulse but never enters sustain.

use glam::Vec2;

use super::collision::Aabb;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner in pixels
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity, positive is down
    pub vel_y: f32,
    /// True while resting on the floor
    pub grounded: bool,
    /// Ticks the jump key has been held this jump, capped at the jump force
    jump_ticks: u32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            grounded: false,
            jump_ticks: 0,
        }
    }

    /// Advance one tick: jump input, integration, then the floor clamp.
    ///
    /// The jump branch reads `grounded` as left by the previous tick's
    /// clamp, so an impulse can only start from a tick that ended on the
    /// floor.
    pub fn update(&mut self, jump_held: bool, floor_y: f32) {
        if jump_held {
            self.jump();
        } else {
            self.jump_ticks = 0;
        }

        self.pos.y += self.vel_y;

        if self.pos.y + self.size.y < floor_y {
            self.grounded = false;
            self.vel_y += GRAVITY;
        } else {
            self.grounded = true;
            self.pos.y = floor_y - self.size.y;
            self.vel_y = 0.0;
        }
    }

    fn jump(&mut self) {
        if self.grounded && self.jump_ticks == 0 {
            self.jump_ticks = 1;
            self.vel_y = -JUMP_FORCE;
            return;
        }
        if self.jump_ticks > 0 && (self.jump_ticks as f32) < JUMP_FORCE {
            self.jump_ticks += 1;
            self.vel_y = -JUMP_FORCE - self.jump_ticks as f32 / JUMP_SUSTAIN_DIVISOR;
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOOR: f32 = 600.0;

    /// A player that has already settled on the floor
    fn grounded_player() -> Player {
        let mut player = Player::new(Vec2::new(PLAYER_START_X, 0.0));
        for _ in 0..100 {
            player.update(false, FLOOR);
        }
        assert!(player.grounded);
        player
    }

    #[test]
    fn test_falls_to_floor_and_clamps() {
        let mut player = Player::new(Vec2::new(PLAYER_START_X, 0.0));
        assert!(!player.grounded);

        for _ in 0..100 {
            player.update(false, FLOOR);
            assert!(player.pos.y + player.size.y <= FLOOR);
        }

        assert!(player.grounded);
        assert_eq!(player.pos.y, FLOOR - PLAYER_HEIGHT);
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_impulse_from_ground() {
        let mut player = grounded_player();
        let start_y = player.pos.y;

        player.update(true, FLOOR);

        // Impulse applied, then integrated, then gravity for the airborne tick
        assert_eq!(player.pos.y, start_y - JUMP_FORCE);
        assert_eq!(player.vel_y, -JUMP_FORCE + GRAVITY);
        assert!(!player.grounded);
    }

    #[test]
    fn test_sustain_strengthens_while_held() {
        let mut player = grounded_player();
        player.update(true, FLOOR);

        // Second held tick: counter 2, pull is -20 - 2/50, then gravity
        player.update(true, FLOOR);
        let expected = -JUMP_FORCE - 2.0 / JUMP_SUSTAIN_DIVISOR + GRAVITY;
        assert!((player.vel_y - expected).abs() < 1e-5);
    }

    #[test]
    fn test_sustain_caps_at_jump_force_ticks() {
        let mut player = grounded_player();
        for _ in 0..JUMP_FORCE as usize {
            player.update(true, FLOOR);
        }
        assert_eq!(player.jump_ticks, JUMP_FORCE as u32);

        // Past the cap the hold no longer overrides velocity; gravity wins
        let vel_at_cap = player.vel_y;
        player.update(true, FLOOR);
        assert_eq!(player.jump_ticks, JUMP_FORCE as u32);
        assert_eq!(player.vel_y, vel_at_cap + GRAVITY);
    }

    #[test]
    fn test_release_ends_sustain_without_new_impulse() {
        let mut player = grounded_player();
        player.update(true, FLOOR);
        player.update(false, FLOOR);
        assert_eq!(player.jump_ticks, 0);

        // Re-pressing mid-air does nothing: not grounded, counter zero
        let vel_before = player.vel_y;
        player.update(true, FLOOR);
        assert_eq!(player.vel_y, vel_before + GRAVITY);
    }

    #[test]
    fn test_short_tap_gets_full_impulse() {
        let mut player = grounded_player();
        player.update(true, FLOOR);
        let peak_vel = player.vel_y;
        player.update(false, FLOOR);

        // One tick of hold already carried the whole impulse
        assert_eq!(peak_vel, -JUMP_FORCE + GRAVITY);
        // The rest of the arc is plain ballistics back to the floor
        let mut ticks = 0;
        while !player.grounded {
            player.update(false, FLOOR);
            assert!(player.pos.y + player.size.y <= FLOOR);
            ticks += 1;
            assert!(ticks < 200, "player never landed");
        }
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_holding_on_ground_does_not_restart_jump() {
        let mut player = grounded_player();
        // Hold through a full jump until landing
        player.update(true, FLOOR);
        while !player.grounded {
            player.update(true, FLOOR);
        }
        // Still held on the landing tick: counter is at the cap, not zero,
        // so no new impulse fires until the key is released
        let y = player.pos.y;
        player.update(true, FLOOR);
        assert_eq!(player.pos.y, y);
        assert!(player.grounded);
    }
}
