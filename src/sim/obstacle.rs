//! Floating debris
//!
//! Obstacles enter at the right edge of the viewport centred on a lane and
//! drift left at their own constant speed until they are fully off-screen.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::lanes::Lanes;
use crate::Tuning;

/// Number of debris tints to pick from
pub const OBSTACLE_TINTS: u8 = 5;

/// A debris entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge and vertical centre
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Pixels moved left per frame
    pub speed: f32,
    /// Palette index for rendering
    pub tint: u8,
    /// Set once the obstacle has scrolled past the left edge
    pub marked_for_deletion: bool,
}

impl Obstacle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32, tint: u8) -> Self {
        Self {
            pos,
            size,
            speed,
            tint,
            marked_for_deletion: false,
        }
    }

    /// X of the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Create an obstacle at the right edge of the viewport in `lane`
pub fn spawn_obstacle<R: Rng>(
    rng: &mut R,
    tuning: &Tuning,
    viewport_width: f32,
    lanes: &Lanes,
    lane: usize,
) -> Obstacle {
    let size_range = tuning.obstacle_size_min..tuning.obstacle_size_max;
    let width = rng.random_range(size_range.clone());
    let height = rng.random_range(size_range);
    let speed = rng.random_range(tuning.obstacle_speed_min..tuning.obstacle_speed_max);
    let tint = rng.random_range(0..OBSTACLE_TINTS);

    Obstacle::new(
        Vec2::new(viewport_width, lanes.center(lane)),
        Vec2::new(width, height),
        speed,
        tint,
    )
}

/// Scroll one frame. Returns true exactly once: on the frame the obstacle
/// leaves the screen and gets marked for deletion.
pub fn advance_obstacle(obstacle: &mut Obstacle) -> bool {
    obstacle.pos.x -= obstacle.speed;
    if obstacle.right() < 0.0 && !obstacle.marked_for_deletion {
        obstacle.marked_for_deletion = true;
        return true;
    }
    false
}
