//! Scene container and environment model.

use glam::Vec3;

use crate::color::Color;
use crate::material::Bsdf;
use crate::ray::{Hit, Ray};

/// A primitive that rays can intersect.
pub trait Intersectable: Send + Sync {
    /// Returns the nearest front-facing intersection, if any.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;

    /// The material covering this primitive.
    fn material(&self) -> &dyn Bsdf;
}

/// Environment lighting surrounding the scene.
///
/// Rays that escape the scene pick up the sky color above the horizon and
/// the ground color below it; rays that exhaust their bounce budget pick up
/// the ambient color.
#[derive(Debug, Clone)]
pub struct World {
    pub sky_color: Color,
    pub ground_color: Color,
    pub ambient_color: Color,
}

impl Default for World {
    fn default() -> Self {
        Self {
            sky_color: Color::new(0.7, 0.9, 1.0, 1.0),
            ground_color: Color::new(0.6, 0.3, 0.15, 1.0),
            ambient_color: Color::new(0.1, 0.1, 0.1, 1.0),
        }
    }
}

impl World {
    /// Background color seen by a ray leaving the scene in `direction`.
    pub fn background(&self, direction: Vec3) -> Color {
        if direction.y > 0.0 {
            self.sky_color
        } else {
            self.ground_color
        }
    }
}

/// All renderable content: intersectable objects plus the world environment.
pub struct Scene {
    objects: Vec<Box<dyn Intersectable>>,
    world: World,
}

impl Scene {
    /// Creates an empty scene with the default world.
    pub fn new() -> Self {
        Self::with_world(World::default())
    }

    pub fn with_world(world: World) -> Self {
        Self {
            objects: Vec::new(),
            world,
        }
    }

    pub fn add_object(&mut self, object: Box<dyn Intersectable>) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[Box<dyn Intersectable>] {
        &self.objects
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Finds the nearest intersection across all objects, together with the
    /// intersected object's material.
    pub fn intersect(&self, ray: &Ray) -> Option<(Hit, &dyn Bsdf)> {
        let mut nearest: Option<(Hit, &dyn Bsdf)> = None;
        for object in &self.objects {
            if let Some(hit) = object.intersect(ray) {
                let closer = nearest
                    .as_ref()
                    .map(|(best, _)| hit.depth < best.depth)
                    .unwrap_or(true);
                if closer {
                    nearest = Some((hit, object.material()));
                }
            }
        }
        nearest
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
