//! Canvas 2D rendering module
//!
//! The scene is drawn through the `Surface` trait; the browser backend wraps
//! a `CanvasRenderingContext2d`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod shapes;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw_scene;
pub use surface::{DrawCmd, RecordingSurface, Surface};
