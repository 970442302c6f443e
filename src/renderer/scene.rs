//! Scene drawing: water, lane markers, swimmer sprite, debris

use super::shapes::{self, DEBRIS_OUTLINE, DEBRIS_OUTLINE_WIDTH, DEBRIS_SHADOW, LANE_LINE, WATER};
use super::surface::Surface;
use crate::sim::{GameState, Obstacle, Swimmer};

/// Draw a full frame. `sprite` is None until the swimmer image has loaded,
/// in which case the swimmer is simply not drawn.
pub fn draw_scene<S: Surface>(surface: &mut S, state: &GameState, sprite: Option<&S::Image>) {
    let (w, h) = (state.viewport.x, state.viewport.y);
    surface.clear(0.0, 0.0, w, h);

    draw_water(surface, state);

    if let Some(image) = sprite {
        draw_swimmer(surface, &state.swimmer, image);
    }

    for obstacle in &state.obstacles {
        draw_obstacle(surface, obstacle);
    }
}

/// Water wash and one marker line per lane
pub fn draw_water<S: Surface>(surface: &mut S, state: &GameState) {
    surface.set_fill(WATER);
    surface.fill_rect(0.0, 0.0, state.viewport.x, state.viewport.y);

    surface.set_stroke(LANE_LINE, shapes::LANE_LINE_WIDTH);
    for &y in state.lanes.centers() {
        let (from, to) = shapes::lane_line(y, state.viewport.x);
        surface.begin_path();
        surface.move_to(from);
        surface.line_to(to);
        surface.stroke();
    }
}

/// Sprite centred on the bobbing anchor, tilted by the stroke
pub fn draw_swimmer<S: Surface>(surface: &mut S, swimmer: &Swimmer, image: &S::Image) {
    let size = swimmer.size;
    surface.save();
    surface.translate(swimmer.render_anchor());
    surface.rotate(swimmer.rotation());
    surface.draw_image(image, -size.x / 2.0, -size.y / 2.0, size.x, size.y);
    surface.restore();
}

/// Outlined debris polygon plus its shadow box
pub fn draw_obstacle<S: Surface>(surface: &mut S, obstacle: &Obstacle) {
    surface.set_fill(shapes::debris_color(obstacle.tint));
    surface.set_stroke(DEBRIS_OUTLINE, DEBRIS_OUTLINE_WIDTH);

    let [first, rest @ ..] = shapes::debris_outline(obstacle);
    surface.begin_path();
    surface.move_to(first);
    for p in rest {
        surface.line_to(p);
    }
    surface.close_path();
    surface.fill();
    surface.stroke();

    surface.set_fill(DEBRIS_SHADOW);
    surface.fill_rect(
        obstacle.pos.x,
        obstacle.pos.y - obstacle.size.y / 2.0,
        obstacle.size.x,
        obstacle.size.y,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::renderer::surface::{DrawCmd, RecordingSurface};
    use glam::Vec2;

    fn state_with_debris() -> GameState {
        let mut state = GameState::new(3, Vec2::new(800.0, 400.0), Tuning::default());
        state
            .obstacles
            .push(Obstacle::new(Vec2::new(500.0, 100.0), Vec2::new(50.0, 60.0), 6.0, 1));
        state
    }

    #[test]
    fn test_sprite_skipped_until_loaded() {
        let state = state_with_debris();
        let mut surface = RecordingSurface::new();
        draw_scene(&mut surface, &state, None);

        assert_eq!(surface.commands[0], DrawCmd::Clear { x: 0.0, y: 0.0, w: 800.0, h: 400.0 });
        assert_eq!(surface.count(|c| matches!(c, DrawCmd::DrawImage { .. })), 0);
        assert_eq!(surface.count(|c| matches!(c, DrawCmd::Save)), 0);
        // Debris still drawn
        assert_eq!(surface.count(|c| matches!(c, DrawCmd::ClosePath)), 1);
    }

    #[test]
    fn test_sprite_drawn_centered_with_rotation() {
        let mut state = state_with_debris();
        state.swimmer.stroke.phase = std::f32::consts::FRAC_PI_2;
        let mut surface = RecordingSurface::new();
        draw_scene(&mut surface, &state, Some(&()));

        let start = surface
            .commands
            .iter()
            .position(|c| *c == DrawCmd::Save)
            .unwrap();
        let anchor = state.swimmer.render_anchor();
        assert_eq!(surface.commands[start + 1], DrawCmd::Translate(anchor));
        assert_eq!(surface.commands[start + 2], DrawCmd::Rotate(state.swimmer.rotation()));
        assert_eq!(
            surface.commands[start + 3],
            DrawCmd::DrawImage { x: -70.0, y: -45.0, w: 140.0, h: 90.0 }
        );
        assert_eq!(surface.commands[start + 4], DrawCmd::Restore);
        assert!((anchor.y - 205.0).abs() < 1e-3);
    }

    #[test]
    fn test_one_marker_per_lane() {
        let state = GameState::new(3, Vec2::new(800.0, 400.0), Tuning::default());
        let mut surface = RecordingSurface::new();
        draw_water(&mut surface, &state);

        let lines: Vec<_> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::MoveTo(p) => Some(p.y),
                _ => None,
            })
            .collect();
        assert_eq!(lines, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_obstacle_polygon_and_shadow() {
        let o = Obstacle::new(Vec2::new(500.0, 100.0), Vec2::new(50.0, 60.0), 6.0, 1);
        let mut surface = RecordingSurface::new();
        draw_obstacle(&mut surface, &o);

        assert_eq!(surface.commands[0], DrawCmd::SetFill("#8B4513".to_string()));
        assert_eq!(surface.count(|c| matches!(c, DrawCmd::LineTo(_))), 3);
        assert_eq!(
            surface.commands.last(),
            Some(&DrawCmd::FillRect { x: 500.0, y: 70.0, w: 50.0, h: 60.0 })
        );
    }
}
