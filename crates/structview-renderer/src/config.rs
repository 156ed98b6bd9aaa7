/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

/// Fixed rendering parameters, handed to the renderer at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub background_color: Color,
    pub grid_color: Color,
    /// Grid line interval in pixels.
    pub grid_spacing: u32,
    pub element_fill_color: Color,
    pub element_line_color: Color,
    /// Pixels per world unit.
    pub scale: f64,
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background_color: Color::new(67, 101, 138),
            grid_color: Color::new(89, 123, 160),
            grid_spacing: 20,
            element_fill_color: Color::new(67, 101, 138),
            element_line_color: Color::new(200, 200, 200),
            scale: 30.0,
            min_width: 300,
            min_height: 300,
            max_width: 1024,
            max_height: 768,
        }
    }
}

impl RenderConfig {
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_limits(mut self, min: (u32, u32), max: (u32, u32)) -> Self {
        (self.min_width, self.min_height) = min;
        (self.max_width, self.max_height) = max;
        self
    }
}
