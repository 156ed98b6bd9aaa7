use structview_core::{Bounds, Vector3};

use crate::config::RenderConfig;

/// A position on the output image, Y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas size and the world → pixel projection for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Canvas center.
    pub pivot: PixelPoint,
    /// Pixels per world unit.
    pub scale: f64,
    /// Added to every element position so the bounds midpoint lands at the origin.
    pub world_offset: Vector3,
}

impl CanvasGeometry {
    /// Frame a plan view (X right, Z up) of the given placement bounds.
    ///
    /// Each dimension is clamped independently; elevation is ignored.
    pub fn from_bounds(bounds: &Bounds, config: &RenderConfig) -> Self {
        let size = bounds.size();
        let width = clamp_dimension(size.x * config.scale, config.min_width, config.max_width);
        let height = clamp_dimension(size.z * config.scale, config.min_height, config.max_height);

        Self {
            width,
            height,
            pivot: PixelPoint::new(width as f64 * 0.5, height as f64 * 0.5),
            scale: config.scale,
            world_offset: -bounds.center(),
        }
    }

    /// Project a world point (already offset) onto the image plane.
    pub fn to_image_coords(&self, v: Vector3) -> PixelPoint {
        PixelPoint::new(
            v.x * self.scale + self.pivot.x,
            -v.z * self.scale + self.pivot.y,
        )
    }
}

/// Truncate a raw pixel extent and clamp it into `[min, max]`.
fn clamp_dimension(raw: f64, min: u32, max: u32) -> u32 {
    // `as` saturates: NaN → 0, negatives → 0, huge values → u32::MAX.
    let truncated = raw as u32;
    truncated.max(min).min(max)
}
