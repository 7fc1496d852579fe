//! Output pixel buffer.

use crate::camera::Resolution;
use crate::color::Color;

/// A bounds-checked RGBA8 pixel store for render output.
///
/// Pixels start fully transparent black; `(0, 0)` is the top-left corner.
#[derive(Debug, Clone)]
pub struct Film {
    resolution: Resolution,
    pixels: Vec<[u8; 4]>,
}

impl Film {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            pixels: vec![[0; 4]; resolution.pixel_count()],
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.resolution.width || y >= self.resolution.height {
            return None;
        }
        Some((y * self.resolution.width + x) as usize)
    }

    /// Writes a pixel; returns false if `(x, y)` is out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color.to_rgba8();
                true
            }
            None => false,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Consumes the film into a flat RGBA byte buffer, row-major from the
    /// top-left.
    pub fn into_raw(self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in self.pixels {
            raw.extend_from_slice(&pixel);
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_pixel() {
        let mut film = Film::new(Resolution::new(4, 2));
        assert!(film.set_pixel(3, 1, Color::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(film.pixel(3, 1), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut film = Film::new(Resolution::new(4, 2));
        assert!(!film.set_pixel(4, 0, Color::WHITE));
        assert!(!film.set_pixel(0, 2, Color::WHITE));
        assert_eq!(film.pixel(4, 0), None);
    }

    #[test]
    fn test_into_raw_layout() {
        let mut film = Film::new(Resolution::new(2, 1));
        film.set_pixel(1, 0, Color::WHITE);
        assert_eq!(film.into_raw(), vec![0, 0, 0, 0, 255, 255, 255, 255]);
    }
}
