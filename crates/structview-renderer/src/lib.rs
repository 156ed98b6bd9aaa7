//! # Structview Renderer
//!
//! Table-driven top-down rendering of structure scenes. Each element's
//! local X/Z shape is rotated, placed in the world, projected onto a canvas
//! framed by the scene's bounding box, and drawn over a background grid.

pub mod canvas;
pub mod config;
pub mod render;
pub mod shapes;
pub mod viewport;

pub use canvas::{Canvas, RasterCanvas};
pub use config::{Color, RenderConfig};
pub use render::SceneRenderer;
pub use shapes::{DrawCommand, DrawKind, ShapeTable};
pub use viewport::{CanvasGeometry, PixelPoint};
