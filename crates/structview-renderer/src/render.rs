use image::RgbImage;
use structview_core::{ElementModel, SceneModel, Vector3};

use crate::canvas::{Canvas, RasterCanvas};
use crate::config::RenderConfig;
use crate::shapes::{DrawKind, ShapeTable};
use crate::viewport::{CanvasGeometry, PixelPoint};

/// Renders a scene as a top-down plan onto a [`Canvas`].
pub struct SceneRenderer {
    config: RenderConfig,
    shapes: ShapeTable,
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default(), ShapeTable::builtin())
    }
}

impl SceneRenderer {
    pub fn new(config: RenderConfig, shapes: ShapeTable) -> Self {
        Self { config, shapes }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn shapes(&self) -> &ShapeTable {
        &self.shapes
    }

    /// Canvas size and projection framing the scene's placement bounds.
    pub fn geometry(&self, scene: &SceneModel) -> CanvasGeometry {
        let geometry = CanvasGeometry::from_bounds(&scene.bounds(), &self.config);
        log::info!("size: {}, {}", geometry.width, geometry.height);
        geometry
    }

    /// Render into a fresh RGB image sized by [`SceneRenderer::geometry`].
    pub fn render_image(&self, scene: &SceneModel) -> RgbImage {
        let geometry = self.geometry(scene);
        let mut canvas = RasterCanvas::new(geometry.width, geometry.height);
        self.render(scene, &geometry, &mut canvas);
        canvas.into_image()
    }

    /// Background and grid first, then every element in scene order.
    pub fn render<C: Canvas>(&self, scene: &SceneModel, geometry: &CanvasGeometry, canvas: &mut C) {
        self.draw_background(canvas);
        let drawn = scene
            .elements()
            .iter()
            .filter(|element| self.draw_element(element, geometry, canvas))
            .count();
        log::debug!("Drew {} of {} elements", drawn, scene.element_count());
    }

    pub fn draw_background<C: Canvas>(&self, canvas: &mut C) {
        let (width, height) = canvas.size();
        canvas.fill(self.config.background_color);

        let step = self.config.grid_spacing.max(1) as usize;
        let (w, h) = (width as f64, height as f64);
        for x in (0..width).step_by(step) {
            let x = x as f64;
            canvas.draw_line(
                &[PixelPoint::new(x, 0.0), PixelPoint::new(x, h)],
                self.config.grid_color,
                1,
            );
        }
        for y in (0..height).step_by(step) {
            let y = y as f64;
            canvas.draw_line(
                &[PixelPoint::new(0.0, y), PixelPoint::new(w, y)],
                self.config.grid_color,
                1,
            );
        }
    }

    /// Draw one element. Returns `false` when its shape key has no entry.
    pub fn draw_element<C: Canvas>(
        &self,
        element: &ElementModel,
        geometry: &CanvasGeometry,
        canvas: &mut C,
    ) -> bool {
        let Some(commands) = self.shapes.get(element.shape_key()) else {
            log::debug!("No shape for '{}', skipping", element.shape_key());
            return false;
        };

        let world_position = element.position() + geometry.world_offset;
        for command in commands {
            let points: Vec<PixelPoint> = command
                .vertices
                .iter()
                .map(|&(lx, lz)| {
                    let local = Vector3::new(lx, 0.0, lz);
                    geometry.to_image_coords(local.rotate(element.rotation_matrix()) + world_position)
                })
                .collect();

            match command.kind {
                DrawKind::Polygon => canvas.draw_polygon(
                    &points,
                    self.config.element_fill_color,
                    self.config.element_line_color,
                    command.stroke_width,
                ),
                DrawKind::Line => canvas.draw_line(
                    &points,
                    self.config.element_line_color,
                    command.stroke_width,
                ),
            }
        }
        true
    }
}
