//! Axis-aligned box collision between the swimmer and debris
//!
//! Both entities are positioned by their left edge and vertical centre. The
//! swimmer's box always uses its base y; the swim bob is never part of it.

use glam::Vec2;

use super::obstacle::Obstacle;
use super::swimmer::Swimmer;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a left edge, vertical centre and size
    pub fn from_left_center(left: f32, center_y: f32, size: Vec2) -> Self {
        let half_h = size.y / 2.0;
        Self {
            min: Vec2::new(left, center_y - half_h),
            max: Vec2::new(left + size.x, center_y + half_h),
        }
    }

    /// Strict overlap on both axes (shared edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Collision box of the swimmer at its base (un-bobbed) position
pub fn swimmer_box(swimmer: &Swimmer) -> Aabb {
    Aabb::from_left_center(swimmer.pos.x, swimmer.pos.y, swimmer.size)
}

/// Collision box of an obstacle
pub fn obstacle_box(obstacle: &Obstacle) -> Aabb {
    Aabb::from_left_center(obstacle.pos.x, obstacle.pos.y, obstacle.size)
}

/// Whether the swimmer touches the obstacle
pub fn swimmer_hits(swimmer: &Swimmer, obstacle: &Obstacle) -> bool {
    swimmer_box(swimmer).overlaps(&obstacle_box(obstacle))
}
