//! Colours and shape generation for 2D primitives

use glam::Vec2;

use crate::sim::{OBSTACLE_TINTS, Obstacle};

/// Translucent water wash over the whole canvas
pub const WATER: &str = "rgba(70, 130, 180, 0.5)";

/// Faint line along each lane centre
pub const LANE_LINE: &str = "rgba(255, 255, 255, 0.2)";
pub const LANE_LINE_WIDTH: f32 = 1.0;

/// Debris tints, indexed by `Obstacle::tint`
pub const DEBRIS_PALETTE: [&str; OBSTACLE_TINTS as usize] =
    ["#6B8E23", "#8B4513", "#708090", "#556B2F", "#4682B4"];
pub const DEBRIS_OUTLINE: &str = "rgba(0, 0, 0, 0.5)";
pub const DEBRIS_OUTLINE_WIDTH: f32 = 2.0;
/// Darkening over the debris bounding box, reads as depth in the water
pub const DEBRIS_SHADOW: &str = "rgba(0, 0, 0, 0.1)";

/// Fill colour for a debris tint (wraps out-of-range indices)
pub fn debris_color(tint: u8) -> &'static str {
    DEBRIS_PALETTE[tint as usize % DEBRIS_PALETTE.len()]
}

/// Irregular four-point outline of a piece of floating debris.
///
/// Points are proportional to the obstacle box so every size keeps the same
/// silhouette.
pub fn debris_outline(obstacle: &Obstacle) -> [Vec2; 4] {
    let Vec2 { x, y } = obstacle.pos;
    let Vec2 { x: w, y: h } = obstacle.size;
    [
        Vec2::new(x, y - h / 2.0),
        Vec2::new(x + w, y - h * 0.1),
        Vec2::new(x + w * 0.8, y + h / 2.0),
        Vec2::new(x + w * 0.2, y + h * 0.3),
    ]
}

/// Endpoints of the marker line for a lane centred at `y`
pub fn lane_line(y: f32, viewport_width: f32) -> (Vec2, Vec2) {
    (Vec2::new(0.0, y), Vec2::new(viewport_width, y))
}
