//! Simulation module
//!
//! All gameplay logic lives here:
//! - Plain data records (swimmer, obstacles) updated by free functions
//! - One explicit `GameState` per session, no globals
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod lanes;
pub mod obstacle;
pub mod state;
pub mod swimmer;
pub mod tick;

pub use autopilot::{autopilot_command, lane_clearance};
pub use collision::{Aabb, obstacle_box, swimmer_box, swimmer_hits};
pub use lanes::Lanes;
pub use obstacle::{OBSTACLE_TINTS, Obstacle, advance_obstacle, spawn_obstacle};
pub use state::{GameEvent, GamePhase, GameState, SessionSummary};
pub use swimmer::{LaneShift, SwimStroke, Swimmer, advance_swimmer, request_lane_change};
pub use tick::{
    Command, LoopControl, apply_command, frame, next_spawn_interval, run_headless, start_session,
    tick,
};
