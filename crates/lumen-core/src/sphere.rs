//! Sphere primitive.

use std::sync::Arc;

use glam::Vec3;

use crate::material::Bsdf;
use crate::ray::{Hit, Ray};
use crate::scene::Intersectable;

pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Bsdf>,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Bsdf>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let direction = ray.direction.normalize();
        let to_center = self.center - ray.origin;
        let projection = to_center.dot(direction);

        let delta =
            projection * projection + self.radius * self.radius - to_center.length_squared();
        if delta < 0.0 {
            return None;
        }

        // The nearest depth is the "minus" root since delta is non-negative.
        let depth = projection - delta.sqrt();

        // Negative depth means the intersection is behind the origin or the
        // ray starts inside the sphere (backface).
        if depth < 0.0 {
            return None;
        }

        let point = ray.origin + direction * depth;
        let normal = (point - self.center).normalize();

        Some(Hit {
            depth,
            point,
            normal,
        })
    }

    fn material(&self) -> &dyn Bsdf {
        self.material.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::material::Diffuse;

    fn unit_sphere() -> Sphere {
        Sphere::new(
            Vec3::ZERO,
            1.0,
            Arc::new(Diffuse::new(Color::WHITE, 0.0)),
        )
    }

    #[test]
    fn test_head_on_intersection() {
        let ray = Ray::new(Vec3::new(-2.0, 0.0, 0.0), Vec3::X);
        let hit = unit_sphere().intersect(&ray).unwrap();
        assert_eq!(hit.depth, 1.0);
        assert_eq!(hit.normal, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_tangent_intersection() {
        let ray = Ray::new(Vec3::new(-2.0, 1.0, 0.0), Vec3::X);
        assert!(unit_sphere().intersect(&ray).is_some());
    }

    #[test]
    fn test_near_miss() {
        let ray = Ray::new(Vec3::new(-2.0, 1.1, 0.0), Vec3::X);
        assert!(unit_sphere().intersect(&ray).is_none());
    }

    #[test]
    fn test_diagonal_intersection() {
        let ray = Ray::new(Vec3::new(-2.0, 2.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        assert!(unit_sphere().intersect(&ray).is_some());
    }

    #[test]
    fn test_ray_from_inside_is_backface() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(unit_sphere().intersect(&ray).is_none());
    }
}
