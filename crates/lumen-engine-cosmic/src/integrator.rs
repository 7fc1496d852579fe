//! The path-tracing integrator.

use rand::RngCore;

use lumen_core::{Camera, Color, Ray, Scene};

/// Traces a single ray through the scene, returning its accumulated color.
///
/// On each hit the throughput is multiplied by the surface color and the ray
/// follows the material's scatter direction. A miss picks up the world
/// background; hitting the bounce budget picks up the ambient color.
pub(crate) fn trace(
    ray: Ray,
    scene: &Scene,
    max_bounces: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut throughput = Color::WHITE;
    let mut current = Some(ray);
    let mut bounces = 0;

    while let Some(ray) = current {
        match scene.intersect(&ray) {
            Some((hit, material)) => {
                throughput *= material.surface_color();
                current = material.scatter(&hit, &ray, rng);
            }
            None => {
                throughput *= scene.world().background(ray.direction);
                current = None;
            }
        }

        bounces += 1;
        if bounces == max_bounces {
            throughput *= scene.world().ambient_color;
            break;
        }
    }

    throughput
}

/// Renders one pixel: averages `samples` jittered rays.
pub(crate) fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    samples: u32,
    max_bounces: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut sum = Color::new(0.0, 0.0, 0.0, 0.0);
    for _ in 0..samples {
        let ray = camera.sample_ray(x, y, rng);
        sum = sum + trace(ray, scene, max_bounces, rng);
    }
    sum * (1.0 / samples as f32)
}
