use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Packed `0xRRGGBB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const LIGHT: Color = Color(0xC7F0D8);
    pub const DARK: Color = Color(0x43523D);

    pub const fn rgba8(self) -> [u8; 4] {
        [
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
            0xff,
        ]
    }

    pub const fn from_rgba8(rgba: [u8; 4]) -> Self {
        Color(((rgba[0] as u32) << 16) | ((rgba[1] as u32) << 8) | rgba[2] as u32)
    }
}

/// CPU-side RGBA8 framebuffer the simulation draws into each frame.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color(0).rgba8(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.rgba8());
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Color::from_rgba8(
            self.pixels[y as usize * self.width as usize + x as usize],
        ))
    }

    /// Number of pixels currently holding `color`.
    pub fn count(&self, color: Color) -> usize {
        let rgba = color.rgba8();
        self.pixels.iter().filter(|px| **px == rgba).count()
    }

    /// Raw bytes in row-major RGBA order, ready for a texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Fills every sample strictly inside the circle.
    ///
    /// Samples sit at `center - radius + k` on each axis for `k = 0, 1, ..`
    /// while below `center + radius`; each one lands on the pixel obtained by
    /// truncating its coordinates toward zero. Pixels off the canvas are
    /// dropped.
    pub fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        let rgba = color.rgba8();
        let low = center - DVec2::splat(radius);
        let high = center + DVec2::splat(radius);
        let radius_sq = radius * radius;

        let mut x = low.x;
        while x < high.x {
            let mut y = low.y;
            while y < high.y {
                let offset = DVec2::new(x - center.x, y - center.y);
                if offset.length_squared() < radius_sq {
                    self.put(x as i64, y as i64, rgba);
                }
                y += 1.0;
            }
            x += 1.0;
        }
    }

    fn put(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = rgba;
    }
}
