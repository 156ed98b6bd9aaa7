use image::RgbImage;
use raqote::{
    AntialiasMode, BlendMode, DrawOptions, DrawTarget, LineCap, LineJoin, PathBuilder,
    SolidSource, Source, StrokeStyle,
};

use crate::config::Color;
use crate::viewport::PixelPoint;

/// Drawing sink for the renderer.
pub trait Canvas {
    fn size(&self) -> (u32, u32);

    /// Paint every pixel with one color.
    fn fill(&mut self, color: Color);

    /// Stroke an open polyline through `points`.
    fn draw_line(&mut self, points: &[PixelPoint], color: Color, width: u32);

    /// Fill the closed polygon and stroke its outline.
    fn draw_polygon(&mut self, points: &[PixelPoint], fill: Color, outline: Color, width: u32);
}

// Hard-edged output so strokes cover exactly `width` pixels.
static DRAW_OPTIONS: DrawOptions = DrawOptions {
    antialias: AntialiasMode::None,
    blend_mode: BlendMode::SrcOver,
    alpha: 1.,
};

fn solid(color: Color) -> SolidSource {
    SolidSource::from_unpremultiplied_argb(255, color.r, color.g, color.b)
}

fn stroke_style(width: u32) -> StrokeStyle {
    StrokeStyle {
        width: width as f32,
        cap: LineCap::Butt,
        join: LineJoin::Miter,
        ..Default::default()
    }
}

/// A [`Canvas`] rasterized by `raqote`, exported as an RGB image.
pub struct RasterCanvas {
    target: DrawTarget,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: DrawTarget::new(width as i32, height as i32),
        }
    }

    /// Copy the drawn pixels out as an opaque RGB image.
    pub fn to_image(&self) -> RgbImage {
        let (width, height) = self.size();
        let mut image = RgbImage::new(width, height);
        for (pixel, argb) in image.pixels_mut().zip(self.target.get_data()) {
            *pixel = image::Rgb([(argb >> 16) as u8, (argb >> 8) as u8, *argb as u8]);
        }
        image
    }

    pub fn into_image(self) -> RgbImage {
        self.to_image()
    }
}

fn build_path(points: &[PixelPoint], close: bool) -> Option<raqote::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if close {
        pb.close();
    }
    Some(pb.finish())
}

impl Canvas for RasterCanvas {
    fn size(&self) -> (u32, u32) {
        (self.target.width() as u32, self.target.height() as u32)
    }

    fn fill(&mut self, color: Color) {
        self.target.clear(solid(color));
    }

    fn draw_line(&mut self, points: &[PixelPoint], color: Color, width: u32) {
        if let Some(path) = build_path(points, false) {
            self.target.stroke(
                &path,
                &Source::Solid(solid(color)),
                &stroke_style(width),
                &DRAW_OPTIONS,
            );
        }
    }

    fn draw_polygon(&mut self, points: &[PixelPoint], fill: Color, outline: Color, width: u32) {
        let Some(path) = build_path(points, true) else {
            return;
        };
        self.target
            .fill(&path, &Source::Solid(solid(fill)), &DRAW_OPTIONS);
        self.target.stroke(
            &path,
            &Source::Solid(solid(outline)),
            &stroke_style(width),
            &DRAW_OPTIONS,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);
    const WHITE: Color = Color::new(255, 255, 255);

    fn row_colors(image: &RgbImage, y: u32) -> Vec<Color> {
        (0..image.width())
            .map(|x| {
                let [r, g, b] = image.get_pixel(x, y).0;
                Color::new(r, g, b)
            })
            .collect()
    }

    fn count(row: &[Color], color: Color) -> usize {
        row.iter().filter(|&&c| c == color).count()
    }

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<PixelPoint> {
        vec![
            PixelPoint::new(x0, y0),
            PixelPoint::new(x1, y0),
            PixelPoint::new(x1, y1),
            PixelPoint::new(x0, y1),
        ]
    }

    #[test]
    fn test_fill() {
        let mut canvas = RasterCanvas::new(4, 3);
        canvas.fill(RED);
        assert_eq!(canvas.size(), (4, 3));
        assert!(canvas.to_image().pixels().all(|p| p.0 == [255, 0, 0]));
    }

    #[test]
    fn test_polygon_fill_and_outline() {
        let mut canvas = RasterCanvas::new(40, 40);
        canvas.fill(WHITE);
        canvas.draw_polygon(&square(10.0, 10.0, 30.0, 30.0), BLUE, RED, 1);
        let image = canvas.into_image();

        let row = row_colors(&image, 20);
        // One outline pixel on each side, 20 pixel centers inside the square.
        assert_eq!(count(&row, RED), 2);
        assert_eq!(count(&row, BLUE), 19);
        assert_eq!(row[20], BLUE);
        assert_eq!(row[5], WHITE);
        assert_eq!(row[35], WHITE);
    }

    #[test]
    fn test_line_covers_exactly_its_width() {
        for width in [1, 2, 5] {
            let mut canvas = RasterCanvas::new(40, 40);
            canvas.fill(WHITE);
            canvas.draw_line(
                &[PixelPoint::new(20.0, 5.0), PixelPoint::new(20.0, 35.0)],
                RED,
                width,
            );
            let row = row_colors(&canvas.to_image(), 10);
            assert_eq!(count(&row, RED), width as usize, "width {}", width);
            assert_eq!(row[20 - width as usize / 2 - 2], WHITE);
            assert_eq!(row[20 + width as usize / 2 + 1], WHITE);
        }
    }

    #[test]
    fn test_offscreen_geometry_is_clipped() {
        let mut canvas = RasterCanvas::new(10, 10);
        canvas.fill(WHITE);
        canvas.draw_polygon(&square(-50.0, -50.0, -20.0, -20.0), BLUE, RED, 3);
        canvas.draw_line(
            &[PixelPoint::new(-5.0, 5.5), PixelPoint::new(50.0, 5.5)],
            RED,
            1,
        );
        let image = canvas.into_image();
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(count(&row_colors(&image, 5), RED), 10);
        assert_eq!(count(&row_colors(&image, 4), RED), 0);
    }

    #[test]
    fn test_empty_point_list_draws_nothing() {
        let mut canvas = RasterCanvas::new(5, 5);
        canvas.fill(WHITE);
        canvas.draw_line(&[], RED, 3);
        canvas.draw_polygon(&[], BLUE, RED, 1);
        assert!(canvas.to_image().pixels().all(|p| p.0 == [255, 255, 255]));
    }
}
