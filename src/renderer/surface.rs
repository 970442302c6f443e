//! Drawing surface abstraction
//!
//! The scene is written against this trait so it can target a browser canvas
//! or a recorder in tests. It mirrors the subset of the Canvas 2D API the
//! game needs.

use glam::Vec2;

/// A 2D drawing surface with a transform stack
pub trait Surface {
    /// Bitmap type accepted by `draw_image`
    type Image;

    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_fill(&mut self, color: &str);
    fn set_stroke(&mut self, color: &str, line_width: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);

    /// Draw `image` scaled into the given rectangle
    fn draw_image(&mut self, image: &Self::Image, x: f32, y: f32, w: f32, h: f32);
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    SetFill(String),
    SetStroke { color: String, line_width: f32 },
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    ClosePath,
    Fill,
    Stroke,
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    DrawImage { x: f32, y: f32, w: f32, h: f32 },
}

/// Surface that records calls instead of drawing (tests, headless runs)
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded calls matching `pred`
    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    type Image = ();

    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCmd::Clear { x, y, w, h });
    }

    fn set_fill(&mut self, color: &str) {
        self.commands.push(DrawCmd::SetFill(color.to_string()));
    }

    fn set_stroke(&mut self, color: &str, line_width: f32) {
        self.commands.push(DrawCmd::SetStroke {
            color: color.to_string(),
            line_width,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCmd::FillRect { x, y, w, h });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCmd::BeginPath);
    }

    fn move_to(&mut self, p: Vec2) {
        self.commands.push(DrawCmd::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.commands.push(DrawCmd::LineTo(p));
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCmd::ClosePath);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCmd::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCmd::Stroke);
    }

    fn save(&mut self) {
        self.commands.push(DrawCmd::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCmd::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCmd::Translate(offset));
    }

    fn rotate(&mut self, radians: f32) {
        self.commands.push(DrawCmd::Rotate(radians));
    }

    fn draw_image(&mut self, _image: &(), x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCmd::DrawImage { x, y, w, h });
    }
}
