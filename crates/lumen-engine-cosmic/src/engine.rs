//! The Cosmic render engine.

use lumen_core::{Camera, Film, Scene};
use lumen_host::{RenderEngine, RenderError, RenderSettings};

use crate::pool;

/// Path-traced CPU render engine.
#[derive(Debug, Default)]
pub struct CosmicEngine;

impl CosmicEngine {
    /// Registry key for this engine.
    pub const NAME: &'static str = "cosmic";

    pub fn new() -> Self {
        Self
    }
}

impl RenderEngine for CosmicEngine {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(
        &self,
        scene: &Scene,
        camera: &Camera,
        settings: &RenderSettings,
    ) -> Result<Film, RenderError> {
        if settings.samples == 0 {
            return Err(RenderError::InvalidSettings(
                "samples must be at least 1".to_string(),
            ));
        }
        if settings.max_bounces == 0 {
            return Err(RenderError::InvalidSettings(
                "max_bounces must be at least 1".to_string(),
            ));
        }

        tracing::info!(
            samples = settings.samples,
            max_bounces = settings.max_bounces,
            objects = scene.len(),
            "cosmic render started"
        );
        pool::render(scene, camera, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use lumen_core::Resolution;

    #[test]
    fn test_zero_samples_rejected() {
        let camera = Camera::new(Resolution::new(2, 2), Vec3::ZERO, Vec3::X, 50.0, 18.0);
        let settings = RenderSettings {
            samples: 0,
            ..Default::default()
        };
        let err = CosmicEngine::new()
            .render(&Scene::new(), &camera, &settings)
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidSettings(_)));
    }

    #[test]
    fn test_zero_bounces_rejected() {
        let camera = Camera::new(Resolution::new(2, 2), Vec3::ZERO, Vec3::X, 50.0, 18.0);
        let settings = RenderSettings {
            max_bounces: 0,
            ..Default::default()
        };
        let err = CosmicEngine::new()
            .render(&Scene::new(), &camera, &settings)
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidSettings(_)));
    }

    #[test]
    fn test_empty_scene_renders_background() {
        let camera = Camera::new(Resolution::new(4, 4), Vec3::ZERO, Vec3::X, 50.0, 18.0);
        let film = CosmicEngine::new()
            .render(&Scene::new(), &camera, &RenderSettings::default())
            .unwrap();

        let scene = Scene::new();
        let expected = scene.world().ground_color.to_rgba8();
        // A forward-looking camera on the horizon sees ground color for
        // rays bending below the horizon (bottom half of the frame).
        assert_eq!(film.pixel(2, 3), Some(expected));
    }
}
