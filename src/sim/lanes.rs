//! Lane geometry
//!
//! Three horizontal tracks whose centre lines are fixed fractions of the
//! viewport height. Both the swimmer and the spawner read them from here.

use serde::{Deserialize, Serialize};

use crate::consts::{LANE_COUNT, LANE_FRACTIONS};

/// Vertical centre of each lane, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lanes {
    centers: [f32; LANE_COUNT],
}

impl Lanes {
    /// Lay lanes out over a viewport of the given height
    pub fn new(viewport_height: f32) -> Self {
        Self {
            centers: LANE_FRACTIONS.map(|f| viewport_height * f),
        }
    }

    /// Centre line of `lane` (clamped to the last lane)
    #[inline]
    pub fn center(&self, lane: usize) -> f32 {
        self.centers[lane.min(LANE_COUNT - 1)]
    }

    /// All centre lines, for drawing lane markers
    pub fn centers(&self) -> &[f32; LANE_COUNT] {
        &self.centers
    }

    /// Lane whose centre line is closest to `y`
    pub fn nearest(&self, y: f32) -> usize {
        let mut best = 0;
        for (lane, center) in self.centers.iter().enumerate() {
            if (center - y).abs() < (self.centers[best] - y).abs() {
                best = lane;
            }
        }
        best
    }

    /// Whether `lane` is one of the valid slots
    #[inline]
    pub fn contains(lane: i32) -> bool {
        (0..LANE_COUNT as i32).contains(&lane)
    }
}
