//! Material scattering models.

use rand::RngCore;

use crate::color::Color;
use crate::ray::{Hit, Ray};
use crate::sampling::random_in_unit_sphere;

/// A bidirectional scattering model attached to a primitive.
///
/// `surface_color` is the throughput multiplier applied on a hit;
/// `scatter` produces the continuation ray, or `None` to terminate the
/// path (emitters).
pub trait Bsdf: Send + Sync {
    fn surface_color(&self) -> Color;

    fn scatter(&self, hit: &Hit, incoming: &Ray, rng: &mut dyn RngCore) -> Option<Ray>;
}

/// Lambertian-style diffuse surface.
///
/// Scatters around the surface normal, widened by `roughness`.
#[derive(Debug, Clone)]
pub struct Diffuse {
    pub color: Color,
    pub roughness: f32,
}

impl Diffuse {
    pub fn new(color: Color, roughness: f32) -> Self {
        Self { color, roughness }
    }
}

impl Bsdf for Diffuse {
    fn surface_color(&self) -> Color {
        self.color
    }

    fn scatter(&self, hit: &Hit, _incoming: &Ray, rng: &mut dyn RngCore) -> Option<Ray> {
        let direction = hit.normal.normalize() + random_in_unit_sphere(rng) * self.roughness;
        Some(Ray::new(hit.point, direction))
    }
}

/// Mirror-like surface with roughness-jittered reflections.
#[derive(Debug, Clone)]
pub struct Glossy {
    pub color: Color,
    pub roughness: f32,
}

impl Glossy {
    pub fn new(color: Color, roughness: f32) -> Self {
        Self { color, roughness }
    }
}

impl Bsdf for Glossy {
    fn surface_color(&self) -> Color {
        self.color
    }

    fn scatter(&self, hit: &Hit, incoming: &Ray, rng: &mut dyn RngCore) -> Option<Ray> {
        let in_direction = incoming.direction.normalize();
        let normal = hit.normal.normalize();

        let reflection = in_direction - normal * 2.0 * in_direction.dot(normal);
        let jittered = reflection + random_in_unit_sphere(rng) * self.roughness;

        // A jitter that dips below the surface falls back to the pure
        // reflection.
        if jittered.dot(normal) <= 0.0 {
            Some(Ray::new(hit.point, reflection))
        } else {
            Some(Ray::new(hit.point, jittered))
        }
    }
}

/// Light-emitting surface; terminates the path.
#[derive(Debug, Clone)]
pub struct Emissive {
    pub color: Color,
    pub strength: f32,
}

impl Emissive {
    pub fn new(color: Color, strength: f32) -> Self {
        Self { color, strength }
    }
}

impl Bsdf for Emissive {
    fn surface_color(&self) -> Color {
        Color::new(
            self.color.r * self.strength,
            self.color.g * self.strength,
            self.color.b * self.strength,
            self.color.a,
        )
    }

    fn scatter(&self, _hit: &Hit, _incoming: &Ray, _rng: &mut dyn RngCore) -> Option<Ray> {
        None
    }
}
