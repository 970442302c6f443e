//! Session state and core simulation types
//!
//! One `GameState` value owns everything a session needs. Nothing is global;
//! the host holds the state and passes it to the tick functions.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::lanes::Lanes;
use super::obstacle::Obstacle;
use super::swimmer::Swimmer;
use crate::Tuning;

/// Current phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not simulating; showing the start prompt or the game-over summary
    Idle,
    /// Active simulation
    Running,
}

/// Something the host should reflect in the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new session began
    SessionStarted,
    /// Score display needs the new value
    ScoreChanged(u64),
    /// An obstacle entered in `lane`
    ObstacleSpawned { lane: usize },
    /// The swimmer hit debris; session is over
    GameOver { score: u64 },
}

/// End-of-run numbers, logged by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u64,
    pub frames: u64,
    pub obstacles_spawned: u64,
    pub spawn_interval_ms: f32,
    pub phase: GamePhase,
    pub game_over: bool,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Canvas size in pixels
    pub viewport: Vec2,
    /// Lane centre lines for this viewport
    pub lanes: Lanes,
    /// Balance knobs
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Set by the first collision of a session, cleared on start
    pub game_over: bool,
    /// Obstacles dodged this session
    pub score: u64,
    /// Player swimmer
    pub swimmer: Swimmer,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Time accumulated toward the next spawn (ms)
    pub spawn_timer_ms: f32,
    /// Current time between spawns (ms), only ever shrinks within a session
    pub spawn_interval_ms: f32,
    /// Timestamp of the previous frame, None until the first frame of a session
    pub last_timestamp: Option<f64>,
    /// Frames simulated this session
    pub frames: u64,
    /// Obstacles spawned this session
    pub obstacles_spawned: u64,
    /// Session RNG (lane choice, obstacle size/speed/tint)
    pub(crate) rng: Pcg32,
    /// Pending notifications for the host
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle session for a viewport of the given size
    pub fn new(seed: u64, viewport: Vec2, tuning: Tuning) -> Self {
        let lanes = Lanes::new(viewport.y);
        let swimmer = Swimmer::new(lanes, &tuning);
        let spawn_interval_ms = tuning.spawn_interval_ms;
        Self {
            viewport,
            lanes,
            tuning,
            phase: GamePhase::Idle,
            game_over: false,
            score: 0,
            swimmer,
            obstacles: Vec::new(),
            spawn_timer_ms: 0.0,
            spawn_interval_ms,
            last_timestamp: None,
            frames: 0,
            obstacles_spawned: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Whether the simulation is active
    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Queue a notification for the host
    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Snapshot for logging
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            frames: self.frames,
            obstacles_spawned: self.obstacles_spawned,
            spawn_interval_ms: self.spawn_interval_ms,
            phase: self.phase,
            game_over: self.game_over,
        }
    }
}
