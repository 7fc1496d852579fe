//! The King render engine.

use lumen_core::{Camera, Color, Film, Scene};
use lumen_host::{RenderEngine, RenderError, RenderSettings};

/// Facing-ratio preview engine.
///
/// Ignores `samples` and `max_bounces`; every pixel is a single primary
/// ray shaded without recursion.
#[derive(Debug, Default)]
pub struct KingEngine;

impl KingEngine {
    /// Registry key for this engine.
    pub const NAME: &'static str = "king";

    pub fn new() -> Self {
        Self
    }

    fn shade(scene: &Scene, camera: &Camera, x: u32, y: u32) -> Color {
        let ray = camera.primary_ray(x, y);
        match scene.intersect(&ray) {
            Some((hit, material)) => {
                let facing = hit.normal.dot(-ray.direction.normalize()).max(0.0);
                let albedo = material.surface_color();
                Color::new(
                    albedo.r * facing,
                    albedo.g * facing,
                    albedo.b * facing,
                    albedo.a,
                )
            }
            None => scene.world().background(ray.direction),
        }
    }
}

impl RenderEngine for KingEngine {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(
        &self,
        scene: &Scene,
        camera: &Camera,
        _settings: &RenderSettings,
    ) -> Result<Film, RenderError> {
        let resolution = camera.resolution();
        tracing::info!(
            width = resolution.width,
            height = resolution.height,
            objects = scene.len(),
            "king preview render started"
        );

        let mut film = Film::new(resolution);
        for y in 0..resolution.height {
            for x in 0..resolution.width {
                film.set_pixel(x, y, Self::shade(scene, camera, x, y));
            }
        }
        Ok(film)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec3;
    use lumen_core::{Diffuse, Resolution, Sphere};

    use super::*;

    fn camera() -> Camera {
        Camera::new(Resolution::new(3, 3), Vec3::ZERO, Vec3::X, 50.0, 18.0)
    }

    #[test]
    fn test_miss_shades_background() {
        let scene = Scene::new();
        let film = KingEngine::new()
            .render(&scene, &camera(), &RenderSettings::default())
            .unwrap();

        // Top row looks above the horizon, bottom row below it.
        assert_eq!(film.pixel(1, 0), Some(scene.world().sky_color.to_rgba8()));
        assert_eq!(film.pixel(1, 2), Some(scene.world().ground_color.to_rgba8()));
    }

    #[test]
    fn test_head_on_hit_shades_full_albedo() {
        let albedo = Color::new(0.8, 0.2, 0.1, 1.0);
        let mut scene = Scene::new();
        scene.add_object(Box::new(Sphere::new(
            Vec3::new(5.0, 0.0, 0.0),
            1.0,
            Arc::new(Diffuse::new(albedo, 0.5)),
        )));

        // The center pixel hits the sphere dead on, so the facing ratio
        // is 1 and the pixel is the raw albedo.
        let film = KingEngine::new()
            .render(&scene, &camera(), &RenderSettings::default())
            .unwrap();
        assert_eq!(film.pixel(1, 1), Some(albedo.to_rgba8()));
    }

    #[test]
    fn test_deterministic_output() {
        let mut scene = Scene::new();
        scene.add_object(Box::new(Sphere::new(
            Vec3::new(5.0, 0.0, 0.0),
            1.0,
            Arc::new(Diffuse::new(Color::new(0.5, 0.5, 0.5, 1.0), 0.5)),
        )));

        let engine = KingEngine::new();
        let first = engine
            .render(&scene, &camera(), &RenderSettings::default())
            .unwrap();
        let second = engine
            .render(&scene, &camera(), &RenderSettings::default())
            .unwrap();
        assert_eq!(first.into_raw(), second.into_raw());
    }
}
