//! Session controller and per-frame update
//!
//! The host calls `frame` once per animation frame and keeps scheduling only
//! while it returns `LoopControl::Continue`. `run_headless` drives the same
//! path without a browser for tests and the native demo.

use rand::Rng;

use super::collision::swimmer_hits;
use super::obstacle::{advance_obstacle, spawn_obstacle};
use super::state::{GameEvent, GamePhase, GameState};
use super::swimmer::{LaneShift, Swimmer, advance_swimmer, request_lane_change};
use crate::Tuning;
use crate::consts::LANE_COUNT;

/// Player intent, already decoded from keys/clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a session (space, enter, start button)
    Start,
    /// Move one lane up or down
    Lane(LaneShift),
}

/// Whether the host should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Begin a new session. Ignored while one is already running.
///
/// Returns true when a session was started, i.e. the host should begin
/// scheduling frames.
pub fn start_session(state: &mut GameState) -> bool {
    if state.is_running() {
        return false;
    }

    state.phase = GamePhase::Running;
    state.game_over = false;
    state.score = 0;
    state.obstacles.clear();
    state.swimmer = Swimmer::new(state.lanes, &state.tuning);
    state.spawn_interval_ms = state.tuning.spawn_interval_ms;
    state.spawn_timer_ms = 0.0;
    state.last_timestamp = None;
    state.frames = 0;
    state.obstacles_spawned = 0;

    state.emit(GameEvent::SessionStarted);
    state.emit(GameEvent::ScoreChanged(0));
    log::info!("Session started");
    true
}

/// Apply a decoded player command. Returns true when it started a session.
pub fn apply_command(state: &mut GameState, command: Command) -> bool {
    match command {
        Command::Start => start_session(state),
        Command::Lane(shift) => {
            if state.is_running() {
                request_lane_change(&mut state.swimmer, shift);
            }
            false
        }
    }
}

/// Spawn interval after one more spawn: shrinks by the step, never below the floor
#[inline]
pub fn next_spawn_interval(current: f32, tuning: &Tuning) -> f32 {
    (current - tuning.spawn_interval_step_ms).max(tuning.spawn_interval_floor_ms)
}

/// Advance a running session by `dt_ms`
pub fn tick(state: &mut GameState, dt_ms: f32) {
    if !state.is_running() {
        return;
    }

    state.frames += 1;

    advance_swimmer(&mut state.swimmer, dt_ms);

    // Spawn on timer, ramping difficulty each time
    state.spawn_timer_ms += dt_ms;
    if state.spawn_timer_ms > state.spawn_interval_ms {
        let lane = state.rng.random_range(0..LANE_COUNT);
        let obstacle = spawn_obstacle(
            &mut state.rng,
            &state.tuning,
            state.viewport.x,
            &state.lanes,
            lane,
        );
        state.obstacles.push(obstacle);
        state.obstacles_spawned += 1;
        state.spawn_interval_ms = next_spawn_interval(state.spawn_interval_ms, &state.tuning);
        state.spawn_timer_ms = 0.0;
        log::debug!(
            "Spawned obstacle in lane {} (next interval {} ms)",
            lane,
            state.spawn_interval_ms
        );
        state.emit(GameEvent::ObstacleSpawned { lane });
    }

    // Scroll debris; each one leaving the screen is a point
    let mut passed = 0u32;
    for obstacle in &mut state.obstacles {
        if advance_obstacle(obstacle) {
            passed += 1;
        }
    }
    for _ in 0..passed {
        state.score += 1;
        state.emit(GameEvent::ScoreChanged(state.score));
    }

    let hit = state
        .obstacles
        .iter()
        .filter(|o| !o.marked_for_deletion)
        .any(|o| swimmer_hits(&state.swimmer, o));

    state.obstacles.retain(|o| !o.marked_for_deletion);

    if hit {
        state.game_over = true;
        state.phase = GamePhase::Idle;
        state.emit(GameEvent::GameOver { score: state.score });
        log::info!("Game over - final score {}", state.score);
    }
}

/// Run one animation frame at `timestamp_ms` (host clock)
///
/// The first frame of a session has a zero delta; a clock that goes backwards
/// is treated as no time passing.
pub fn frame(state: &mut GameState, timestamp_ms: f64) -> LoopControl {
    if !state.is_running() {
        return LoopControl::Stop;
    }

    let dt = match state.last_timestamp {
        Some(last) => (timestamp_ms - last).max(0.0) as f32,
        None => 0.0,
    };
    state.last_timestamp = Some(timestamp_ms);

    tick(state, dt);

    if state.is_running() {
        LoopControl::Continue
    } else {
        LoopControl::Stop
    }
}

/// Drive up to `frames` frames `frame_ms` apart without rendering.
///
/// Stops early when the session ends. Returns the number of frames run.
pub fn run_headless(state: &mut GameState, frames: u32, frame_ms: f64) -> u32 {
    if !state.is_running() {
        return 0;
    }

    let start = state.last_timestamp.unwrap_or(0.0);
    for i in 1..=frames {
        let timestamp = start + i as f64 * frame_ms;
        if frame(state, timestamp) == LoopControl::Stop {
            return i;
        }
    }
    frames
}
