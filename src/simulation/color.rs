//! Radius to display color ramp.

/// 8-bit RGB color handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Linear violet-blue -> red ramp over `[0, saturation]`, flat above it
pub fn color_from_radius(radius: f64, saturation: f64) -> Rgb {
    let f = (radius / saturation).clamp(0.0, 1.0);
    Rgb {
        r: (128.0 + 127.0 * f) as u8,
        g: 0,
        b: (128.0 - 128.0 * f) as u8,
    }
}
