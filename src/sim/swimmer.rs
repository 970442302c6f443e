//! The player's swimmer
//!
//! Lane changes are a small state machine: a request commits the new lane
//! immediately and the base position then glides toward it a fixed step per
//! frame. The swim stroke on top of that is purely cosmetic.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::lanes::Lanes;
use crate::Tuning;
use crate::consts::*;

/// Direction of a lane change request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneShift {
    /// Toward lane 0 (top of the screen)
    Up,
    /// Toward the last lane (bottom of the screen)
    Down,
}

impl LaneShift {
    /// Signed lane delta (-1 up, +1 down)
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            LaneShift::Up => -1,
            LaneShift::Down => 1,
        }
    }
}

/// Sinusoidal bob and tilt driven by an ever-growing phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwimStroke {
    /// Phase accumulator (never decreases)
    pub phase: f32,
    /// Phase gained per millisecond
    pub speed: f32,
    /// Bob height in pixels
    pub amplitude: f32,
    /// Peak tilt in radians
    pub max_rotation: f32,
}

impl SwimStroke {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: 0.0,
            speed: tuning.swim_speed,
            amplitude: tuning.swim_amplitude,
            max_rotation: tuning.swim_max_rotation(),
        }
    }

    /// Accumulate `dt_ms` worth of stroke
    pub fn advance(&mut self, dt_ms: f32) {
        self.phase += dt_ms.max(0.0) * self.speed;
    }

    /// Vertical bob added to the drawn position
    #[inline]
    pub fn offset(&self) -> f32 {
        self.amplitude * self.phase.sin()
    }

    /// Head tilt in radians
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.phase.sin() * self.max_rotation
    }
}

/// The swimmer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swimmer {
    /// Left edge (fixed) and vertical centre (base, without the stroke bob)
    pub pos: Vec2,
    /// Bounding box size
    pub size: Vec2,
    /// Committed lane index, always a valid lane
    pub lane: usize,
    /// Lane centre lines this swimmer moves between
    pub lanes: Lanes,
    /// True while gliding toward `lane`
    pub in_transition: bool,
    /// Max vertical travel per frame while changing lanes
    pub lane_step: f32,
    pub stroke: SwimStroke,
}

impl Swimmer {
    /// Fresh swimmer resting in the start lane
    pub fn new(lanes: Lanes, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(SWIMMER_X, lanes.center(START_LANE)),
            size: Vec2::new(SWIMMER_WIDTH, SWIMMER_HEIGHT),
            lane: START_LANE,
            lanes,
            in_transition: false,
            lane_step: tuning.lane_step,
            stroke: SwimStroke::new(tuning),
        }
    }

    /// Y of the committed lane
    #[inline]
    pub fn target_y(&self) -> f32 {
        self.lanes.center(self.lane)
    }

    /// Sprite centre including the stroke bob (drawing only)
    pub fn render_anchor(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + self.size.x / 2.0,
            self.pos.y + self.stroke.offset(),
        )
    }

    /// Sprite rotation in radians (drawing only)
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.stroke.rotation()
    }
}

/// Ask the swimmer to move one lane up or down.
///
/// Ignored while a transition is in progress or when the target lane does not
/// exist. Returns whether the request was accepted.
pub fn request_lane_change(swimmer: &mut Swimmer, shift: LaneShift) -> bool {
    if swimmer.in_transition {
        return false;
    }

    let target = swimmer.lane as i32 + shift.delta();
    if !Lanes::contains(target) {
        return false;
    }

    swimmer.lane = target as usize;
    swimmer.in_transition = true;
    true
}

/// Advance lane interpolation and the swim stroke by one frame
pub fn advance_swimmer(swimmer: &mut Swimmer, dt_ms: f32) {
    if swimmer.in_transition {
        let target = swimmer.target_y();
        let distance = target - swimmer.pos.y;
        if distance.abs() < swimmer.lane_step {
            swimmer.pos.y = target;
            swimmer.in_transition = false;
        } else {
            swimmer.pos.y += distance.signum() * swimmer.lane_step;
        }
    }

    swimmer.stroke.advance(dt_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn swimmer() -> Swimmer {
        Swimmer::new(Lanes::new(VIEWPORT_HEIGHT), &Tuning::default())
    }

    #[test]
    fn test_starts_centered_in_middle_lane() {
        let s = swimmer();
        assert_eq!(s.lane, 1);
        assert_eq!(s.pos, Vec2::new(50.0, 200.0));
        assert!(!s.in_transition);
    }

    #[test]
    fn test_lane_change_commits_and_locks() {
        let mut s = swimmer();
        assert!(request_lane_change(&mut s, LaneShift::Up));
        assert_eq!(s.lane, 0);
        assert!(s.in_transition);

        // Locked until the glide finishes
        assert!(!request_lane_change(&mut s, LaneShift::Down));
        assert_eq!(s.lane, 0);
    }

    #[test]
    fn test_lane_change_out_of_range_ignored() {
        let mut s = swimmer();
        s.lane = 0;
        s.pos.y = s.lanes.center(0);
        assert!(!request_lane_change(&mut s, LaneShift::Up));
        assert_eq!(s.lane, 0);
        assert!(!s.in_transition);

        s.lane = 2;
        s.pos.y = s.lanes.center(2);
        assert!(!request_lane_change(&mut s, LaneShift::Down));
        assert_eq!(s.lane, 2);
    }

    #[test]
    fn test_glide_moves_fixed_step_then_snaps() {
        let mut s = swimmer();
        request_lane_change(&mut s, LaneShift::Up);

        // 200 -> 100 in steps of 10; the step that lands exactly on the
        // target still counts as a step, the next frame snaps and unlocks
        for i in 1..=10 {
            advance_swimmer(&mut s, 16.0);
            assert!((s.pos.y - (200.0 - 10.0 * i as f32)).abs() < 1e-4);
            assert!(s.in_transition);
        }
        advance_swimmer(&mut s, 16.0);
        assert_eq!(s.pos.y, 100.0);
        assert!(!s.in_transition);

        // Idle at the target
        advance_swimmer(&mut s, 16.0);
        assert_eq!(s.pos.y, 100.0);
        assert!(request_lane_change(&mut s, LaneShift::Down));
    }

    #[test]
    fn test_stroke_offset_and_rotation() {
        let mut stroke = SwimStroke::new(&Tuning::default());
        assert_eq!(stroke.offset(), 0.0);
        assert_eq!(stroke.rotation(), 0.0);

        // Quarter period: phase = π/2
        stroke.advance(PI / 2.0 / 0.01);
        assert!((stroke.offset() - 5.0).abs() < 1e-3);
        assert!((stroke.rotation() - 5.0_f32.to_radians()).abs() < 1e-4);

        // Back to level at every multiple of π
        for k in [1.0, 2.0] {
            stroke.phase = k * PI;
            assert!(stroke.offset().abs() < 1e-4);
            assert!(stroke.rotation().abs() < 1e-5);
        }
    }

    #[test]
    fn test_stroke_does_not_move_base_position() {
        let mut s = swimmer();
        for _ in 0..50 {
            advance_swimmer(&mut s, 33.0);
        }
        assert_eq!(s.pos.y, 200.0);
        assert_ne!(s.render_anchor().y, s.pos.y);
        assert_eq!(s.render_anchor().x, 50.0 + 70.0);
    }
}
