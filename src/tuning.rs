//! Data-driven game balance
//!
//! Every number that shapes difficulty lives here so a page can override it
//! with a JSON blob. Missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected tuning input
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("spawn interval floor ({floor} ms) is above the initial interval ({initial} ms)")]
    FloorAboveInitial { floor: f32, initial: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} range is empty ({min}..{max})")]
    EmptyRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
}

/// Balance knobs for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Spawn interval at session start (ms)
    pub spawn_interval_ms: f32,
    /// Interval shrink applied on every spawn (ms)
    pub spawn_interval_step_ms: f32,
    /// Interval never drops below this (ms)
    pub spawn_interval_floor_ms: f32,

    /// Max vertical distance the swimmer covers per frame while changing lanes (px)
    pub lane_step: f32,

    /// Stroke phase gained per millisecond
    pub swim_speed: f32,
    /// Bobbing height (px)
    pub swim_amplitude: f32,
    /// Peak head tilt (degrees)
    pub swim_max_rotation_deg: f32,

    /// Obstacle width/height range (px)
    pub obstacle_size_min: f32,
    pub obstacle_size_max: f32,
    /// Obstacle scroll speed range (px per frame)
    pub obstacle_speed_min: f32,
    pub obstacle_speed_max: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 1500.0,
            spawn_interval_step_ms: 5.0,
            spawn_interval_floor_ms: 800.0,

            lane_step: 10.0,

            swim_speed: 0.01,
            swim_amplitude: 5.0,
            swim_max_rotation_deg: 5.0,

            obstacle_size_min: 40.0,
            obstacle_size_max: 90.0,
            obstacle_speed_min: 5.0,
            obstacle_speed_max: 8.0,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        for (field, value) in [
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("spawn_interval_floor_ms", self.spawn_interval_floor_ms),
            ("lane_step", self.lane_step),
            ("swim_speed", self.swim_speed),
            ("obstacle_size_min", self.obstacle_size_min),
            ("obstacle_speed_min", self.obstacle_speed_min),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        // Zero is allowed here: no ramp, no bob, no tilt
        for (field, value) in [
            ("spawn_interval_step_ms", self.spawn_interval_step_ms),
            ("swim_amplitude", self.swim_amplitude),
            ("swim_max_rotation_deg", self.swim_max_rotation_deg),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        if self.spawn_interval_floor_ms > self.spawn_interval_ms {
            return Err(TuningError::FloorAboveInitial {
                floor: self.spawn_interval_floor_ms,
                initial: self.spawn_interval_ms,
            });
        }

        for (field, min, max) in [
            ("obstacle_size", self.obstacle_size_min, self.obstacle_size_max),
            ("obstacle_speed", self.obstacle_speed_min, self.obstacle_speed_max),
        ] {
            if !(min < max) {
                return Err(TuningError::EmptyRange { field, min, max });
            }
        }

        Ok(())
    }

    /// Peak head tilt in radians
    pub fn swim_max_rotation(&self) -> f32 {
        crate::deg_to_rad(self.swim_max_rotation_deg)
    }

    /// Element id of the optional inline override
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "tuning";

    /// Load tuning from `<script id="tuning" type="application/json">` (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning override from page");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning override: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
