//! End-to-end session scenarios
//!
//! Drives the simulation the way the browser shell does: snapshot input,
//! tick, act on the returned events, using an in-memory score store in
//! place of LocalStorage.

use glam::Vec2;

use pag_dash::Rgb;
use pag_dash::consts::*;
use pag_dash::highscores::{self, MemoryStore, ScoreStore};
use pag_dash::sim::{GameState, Obstacle, TickInput, tick};

const VIEW: Vec2 = Vec2::new(800.0, 600.0);

/// Drop an obstacle straight onto the player's current box
fn force_overlap(state: &mut GameState) {
    let player = state.player.aabb();
    state.obstacles.obstacles.push(Obstacle {
        pos: player.pos,
        size: Vec2::new(OBSTACLE_WIDTH, 120.0),
        vel_x: 0.0,
        color: Rgb::new(180, 40, 90),
    });
}

#[test]
fn first_run_initializes_stored_high_score_to_zero() {
    let mut store = MemoryStore::new();
    let stored = highscores::load_or_init(&mut store);

    let mut state = GameState::new(3, VIEW);
    state.start(stored);

    assert_eq!(store.get(), Some(0));
    assert_eq!(state.high_score, 0);
}

#[test]
fn idle_hands_keep_the_player_grounded() {
    let mut state = GameState::new(3, VIEW);
    state.start(0);

    for _ in 0..100 {
        let events = tick(&mut state, &TickInput { jump: false });
        assert!(!events.collided);
    }

    assert_eq!(state.score, 100);
    assert!(state.player.grounded);
    assert_eq!(state.player.vel_y, 0.0);
}

#[test]
fn collision_resets_the_run_and_keeps_the_session() {
    let mut state = GameState::new(3, VIEW);
    state.start(0);

    for _ in 0..60 {
        tick(&mut state, &TickInput { jump: false });
    }
    assert_eq!(state.score, 60);
    let ramped_speed = state.game_speed;
    assert!(ramped_speed > DEFAULT_GAME_SPEED);

    force_overlap(&mut state);
    let events = tick(&mut state, &TickInput { jump: false });

    assert!(events.collided);
    assert_eq!(state.score, 0);
    assert_eq!(state.game_speed, DEFAULT_GAME_SPEED);
    assert!(state.obstacles.is_empty());
    assert_eq!(state.obstacles.spawn_timer, SPAWN_INTERVAL);
    assert_eq!(state.high_score, 60);
}

#[test]
fn collision_persists_the_peak_score_not_the_reset() {
    let mut store = MemoryStore::with_value(5);
    let stored = highscores::load_or_init(&mut store);
    assert_eq!(stored, 5);

    let mut state = GameState::new(3, VIEW);
    state.start(stored);

    for _ in 0..12 {
        tick(&mut state, &TickInput { jump: false });
    }
    assert_eq!(state.high_score, 12);

    force_overlap(&mut state);
    let events = tick(&mut state, &TickInput { jump: false });
    assert!(events.collided);

    // The shell persists on the collision event
    highscores::persist_if_better(&mut store, state.high_score);
    assert_eq!(store.get(), Some(12));
    assert_eq!(state.score, 0);
}

#[test]
fn lower_session_best_leaves_the_store_alone() {
    let mut store = MemoryStore::with_value(1000);
    let stored = highscores::load_or_init(&mut store);

    let mut state = GameState::new(3, VIEW);
    state.start(stored);

    for _ in 0..20 {
        tick(&mut state, &TickInput { jump: false });
    }
    force_overlap(&mut state);
    assert!(tick(&mut state, &TickInput { jump: false }).collided);

    highscores::persist_if_better(&mut store, state.high_score);
    assert_eq!(store.get(), Some(1000));
    assert_eq!(state.high_score, 1000);
}

#[test]
fn sessions_are_deterministic_for_a_fixed_seed() {
    let mut a = GameState::new(99, VIEW);
    let mut b = GameState::new(99, VIEW);
    a.start(0);
    b.start(0);

    for t in 0..300u64 {
        let input = TickInput { jump: t % 70 < 10 };
        tick(&mut a, &input);
        tick(&mut b, &input);
    }

    assert_eq!(a.score, b.score);
    assert_eq!(a.obstacles.len(), b.obstacles.len());
    for (oa, ob) in a
        .obstacles
        .obstacles
        .iter()
        .zip(&b.obstacles.obstacles)
    {
        assert_eq!(oa.pos, ob.pos);
        assert_eq!(oa.size, ob.size);
        assert_eq!(oa.color, ob.color);
    }
}

#[test]
fn store_writes_are_overwrites() {
    let mut store = MemoryStore::new();
    store.save(3);
    store.save(9);
    assert_eq!(store.load(), Some(9));
}
