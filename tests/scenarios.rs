//! End-to-end session scenarios driven through the public API

use glam::Vec2;

use dolphin_swim::Tuning;
use dolphin_swim::consts::*;
use dolphin_swim::sim::{
    Command, GameEvent, GamePhase, GameState, LaneShift, LoopControl, Obstacle, apply_command,
    frame, run_headless,
};

fn viewport() -> Vec2 {
    Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
}

/// Tuning that never spawns on its own so tests control every obstacle
fn quiet_tuning() -> Tuning {
    Tuning {
        spawn_interval_ms: 1.0e9,
        ..Tuning::default()
    }
}

fn running(tuning: Tuning) -> GameState {
    let mut state = GameState::new(42, viewport(), tuning);
    assert!(apply_command(&mut state, Command::Start));
    state.drain_events();
    state
}

#[test]
fn test_lane_up_then_locked_until_arrival() {
    let mut state = running(quiet_tuning());

    apply_command(&mut state, Command::Lane(LaneShift::Up));
    assert_eq!(state.swimmer.lane, 0);
    assert!(state.swimmer.in_transition);

    // Second request during the glide is dropped
    apply_command(&mut state, Command::Lane(LaneShift::Down));
    assert_eq!(state.swimmer.lane, 0);

    run_headless(&mut state, 30, 16.0);
    assert!(!state.swimmer.in_transition);
    assert_eq!(state.swimmer.pos.y, state.lanes.center(0));

    apply_command(&mut state, Command::Lane(LaneShift::Down));
    assert_eq!(state.swimmer.lane, 1);
}

#[test]
fn test_overlapping_debris_ends_session() {
    let mut state = running(quiet_tuning());
    let y = state.lanes.center(1);
    state
        .obstacles
        .push(Obstacle::new(Vec2::new(60.0, y), Vec2::new(50.0, 50.0), 5.0, 2));

    assert_eq!(frame(&mut state, 1000.0), LoopControl::Stop);
    assert!(state.game_over);
    assert_eq!(state.phase, GamePhase::Idle);
    assert_eq!(state.drain_events(), vec![GameEvent::GameOver { score: 0 }]);

    // Lane input after game over is ignored
    apply_command(&mut state, Command::Lane(LaneShift::Up));
    assert_eq!(state.swimmer.lane, 1);
}

#[test]
fn test_dodged_debris_scores_exactly_once() {
    let mut state = running(quiet_tuning());
    let y = state.lanes.center(0);
    state
        .obstacles
        .push(Obstacle::new(Vec2::new(800.0, y), Vec2::new(50.0, 50.0), 5.0, 0));

    // Right edge drops below zero after 171 frames
    let ran = run_headless(&mut state, 200, 16.0);
    assert_eq!(ran, 200);
    assert_eq!(state.score, 1);
    assert!(state.obstacles.is_empty());
    assert!(!state.game_over);

    let scores: Vec<_> = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::ScoreChanged(_)))
        .collect();
    assert_eq!(scores, vec![GameEvent::ScoreChanged(1)]);
}

#[test]
fn test_collision_ignores_swim_bob() {
    let mut state = running(quiet_tuning());
    // Bob at its peak: drawn 5 px lower than the base position
    state.swimmer.stroke.phase = std::f32::consts::FRAC_PI_2;
    assert!((state.swimmer.stroke.offset() - 5.0).abs() < 1e-3);

    // Base box spans 155..245; this debris starts at 245 and only the bob would reach it
    state
        .obstacles
        .push(Obstacle::new(Vec2::new(100.0, 270.0), Vec2::new(50.0, 50.0), 0.0, 0));
    assert_eq!(frame(&mut state, 0.0), LoopControl::Continue);
    assert!(!state.game_over);

    // One pixel further in and the base boxes overlap
    state.obstacles[0].pos.y = 269.0;
    assert_eq!(frame(&mut state, 16.0), LoopControl::Stop);
    assert!(state.game_over);
}

#[test]
fn test_restart_after_game_over() {
    let mut state = running(Tuning::default());
    let y = state.lanes.center(1);
    state
        .obstacles
        .push(Obstacle::new(Vec2::new(100.0, y), Vec2::new(60.0, 60.0), 5.0, 0));
    frame(&mut state, 0.0);
    assert!(state.game_over);
    state.drain_events();

    assert!(apply_command(&mut state, Command::Start));
    assert!(!state.game_over);
    assert!(state.obstacles.is_empty());
    assert_eq!(state.score, 0);
    assert_eq!(
        state.drain_events(),
        vec![GameEvent::SessionStarted, GameEvent::ScoreChanged(0)]
    );

    // Fresh clock: the first frame after restart has no delta
    frame(&mut state, 50.0);
    assert_eq!(state.spawn_timer_ms, 0.0);
}

#[test]
fn test_spawns_arrive_on_lane_centres() {
    let mut state = running(Tuning::default());
    let mut spawned = Vec::new();

    for i in 0..400 {
        if frame(&mut state, i as f64 * 16.0) == LoopControl::Stop {
            break;
        }
        for event in state.drain_events() {
            if let GameEvent::ObstacleSpawned { lane } = event {
                spawned.push(lane);
            }
        }
    }

    assert!(!spawned.is_empty());
    assert!(spawned.iter().all(|&lane| lane < LANE_COUNT));
    for obstacle in &state.obstacles {
        assert!(state.lanes.centers().contains(&obstacle.pos.y));
    }
}
