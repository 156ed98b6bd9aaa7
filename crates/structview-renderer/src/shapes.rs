use std::collections::HashMap;

/// How a command's vertex list is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    /// Filled, closed outline.
    Polygon,
    /// Open stroked path.
    Line,
}

/// One drawing primitive in element-local X/Z coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub kind: DrawKind,
    pub stroke_width: u32,
    /// `(x, z)` pairs; local Y is always zero.
    pub vertices: Vec<(f64, f64)>,
}

impl DrawCommand {
    pub fn polygon(stroke_width: u32, vertices: &[(f64, f64)]) -> Self {
        Self {
            kind: DrawKind::Polygon,
            stroke_width,
            vertices: vertices.to_vec(),
        }
    }

    pub fn line(stroke_width: u32, vertices: &[(f64, f64)]) -> Self {
        Self {
            kind: DrawKind::Line,
            stroke_width,
            vertices: vertices.to_vec(),
        }
    }
}

/// Shape key to draw commands.
#[derive(Debug, Clone, Default)]
pub struct ShapeTable {
    shapes: HashMap<String, Vec<DrawCommand>>,
}

impl ShapeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard building pieces.
    pub fn builtin() -> Self {
        Self::new()
            .with_shape(
                "foundation.prefab",
                vec![DrawCommand::polygon(
                    1,
                    &[(-1.5, -1.5), (1.5, -1.5), (1.5, 1.5), (-1.5, 1.5)],
                )],
            )
            .with_shape(
                "foundation.triangle.prefab",
                vec![DrawCommand::polygon(1, &[(-1.5, 0.0), (1.5, 0.0), (0.0, 2.62)])],
            )
            .with_shape(
                "wall.prefab",
                vec![DrawCommand::line(5, &[(0.0, -1.5), (0.0, 1.5)])],
            )
            .with_shape(
                "wall.doorway.prefab",
                vec![
                    DrawCommand::line(5, &[(0.0, -1.5), (0.0, -0.7)]),
                    DrawCommand::line(5, &[(0.0, 0.7), (0.0, 1.5)]),
                ],
            )
    }

    pub fn with_shape(mut self, key: &str, commands: Vec<DrawCommand>) -> Self {
        self.shapes.insert(key.to_string(), commands);
        self
    }

    pub fn get(&self, key: &str) -> Option<&[DrawCommand]> {
        self.shapes.get(key).map(Vec::as_slice)
    }
}
