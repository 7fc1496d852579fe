//! Rays and intersection records.

use glam::Vec3;

/// A ray with an origin and an (unnormalized) direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// The point `t` units along the normalized direction.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction.normalize() * t
    }
}

/// An intersection between a ray and a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance from the ray origin along the normalized direction.
    pub depth: f32,
    /// Intersection point in world space.
    pub point: Vec3,
    /// Surface normal at the intersection (unit length).
    pub normal: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(ray.at(2.0), Vec3::new(0.0, 0.0, 2.0));
    }
}
