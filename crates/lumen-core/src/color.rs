//! Linear-space RGBA color arithmetic.

use std::ops::{Add, Mul, MulAssign};

/// A linear-space RGBA color.
///
/// Components are unbounded `f32`s during accumulation; clamping happens
/// only on conversion to 8-bit output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Linearly interpolates toward `other` by `t`, clamped to [0, 1].
    pub fn modulate(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        self * (1.0 - t) + other * t
    }

    /// Converts to 8-bit RGBA, clamping each component to [0, 1].
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, scalar: f32) -> Color {
        Color::new(
            self.r * scalar,
            self.g * scalar,
            self.b * scalar,
            self.a * scalar,
        )
    }
}

impl MulAssign for Color {
    fn mul_assign(&mut self, rhs: Color) {
        *self = *self * rhs;
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

/// Linear interpolation with `t` clamped to [0, 1].
pub fn lerp(first: f32, second: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    first * (1.0 - t) + second * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_range() {
        for i in 0..100 {
            let t = i as f32 / 100.0;
            assert_eq!(lerp(0.0, 1.0, t), t);
        }
    }

    #[test]
    fn test_lerp_clamps() {
        assert_eq!(lerp(0.0, 1.0, -10.0), 0.0);
        assert_eq!(lerp(0.0, 1.0, 10.0), 1.0);
    }

    #[test]
    fn test_component_multiply() {
        let c = Color::new(0.5, 1.0, 0.0, 1.0) * Color::new(0.5, 0.5, 0.5, 1.0);
        assert_eq!(c, Color::new(0.25, 0.5, 0.0, 1.0));
    }

    #[test]
    fn test_to_rgba8_clamps() {
        assert_eq!(Color::new(2.0, -1.0, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_modulate_clamps_factor() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.modulate(b, 2.0), b);
        assert_eq!(a.modulate(b, -1.0), a);
        assert_eq!(a.modulate(b, 0.5), Color::new(0.5, 0.5, 0.5, 1.0));
    }
}
