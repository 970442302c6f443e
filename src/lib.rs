//! Dolphin Swim - A three-lane swimming arcade game
//!
//! Core modules:
//! - `sim`: Simulation (lanes, swimmer, obstacles, collisions, session loop)
//! - `renderer`: Canvas 2D drawing behind a `Surface` trait
//! - `platform`: Browser input and DOM glue
//! - `tuning`: Data-driven game balance
//! - `ui`: Overlay content (start prompt, game over)

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions (overridden by the real canvas size in the browser)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;

    /// Number of lanes the swimmer can occupy
    pub const LANE_COUNT: usize = 3;
    /// Lane centre lines as fractions of the viewport height (top to bottom)
    pub const LANE_FRACTIONS: [f32; LANE_COUNT] = [0.25, 0.5, 0.75];
    /// Lane the swimmer starts each session in
    pub const START_LANE: usize = 1;

    /// Swimmer geometry - x never changes during a session
    pub const SWIMMER_X: f32 = 50.0;
    pub const SWIMMER_WIDTH: f32 = 140.0;
    pub const SWIMMER_HEIGHT: f32 = 90.0;

    /// Sprite asset, relative to the page
    pub const SWIMMER_SPRITE: &str = "delfin100x70.png";

    /// Seed used by the native headless demo
    pub const DEMO_SEED: u64 = 0x0D01_F1A5;
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}
