//! Per-frame simulation step
//!
//! The core loop entry point: one call advances the world by one display
//! tick. Scheduling is the caller's concern: requestAnimationFrame in the
//! browser, a plain loop in tests and the native demo.

use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump key held this tick
    pub jump: bool,
}

/// Observable outcomes of a tick, for the shell to act on
#[derive(Debug, Clone, Copy, Default)]
pub struct TickEvents {
    /// An obstacle overlapped the player; the run was reset
    pub collided: bool,
    /// The session best improved this tick
    pub new_high_score: bool,
}

/// Advance the game by one tick.
///
/// Order per frame: obstacles (spawn, recycle, collide), player physics,
/// score tick, high-score tracking, speed ramp. A collision resets the run
/// and short-circuits the rest of the frame, so the post-tick state carries
/// exactly the reset values (score 0, default speed, empty field).
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();
    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;

    let player_box = state.player.aabb();
    let collided =
        state
            .obstacles
            .update(&player_box, state.game_speed, state.view, &mut state.rng);
    if collided {
        state.reset_life();
        events.collided = true;
        return events;
    }

    let floor_y = state.floor_y();
    state.player.update(input.jump, floor_y);

    state.score += 1;
    if state.score > state.high_score {
        state.high_score = state.score;
        events.new_high_score = true;
    }

    state.game_speed += GAME_SPEED_RAMP;

    events
}
