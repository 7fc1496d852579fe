//! The render engine trait and its settings.

use thiserror::Error;

use lumen_core::{Camera, Film, Scene};

/// Settings controlling a render invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Rays traced per pixel.
    pub samples: u32,
    /// Bounce budget per ray before the ambient color is applied.
    pub max_bounces: u32,
    /// Worker thread cap; 0 means all available cores.
    pub threads: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            samples: 1,
            max_bounces: 4,
            threads: 0,
        }
    }
}

/// Errors raised while rendering.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("a render worker terminated unexpectedly")]
    WorkerLost,
}

/// A pluggable rendering backend.
///
/// Engines are registered with the host's registry under their `name` and
/// invoked with a scene, a camera, and render settings.
pub trait RenderEngine: Send + Sync {
    /// The registry key for this engine.
    fn name(&self) -> &str;

    /// Renders the scene through the camera onto a new film.
    fn render(
        &self,
        scene: &Scene,
        camera: &Camera,
        settings: &RenderSettings,
    ) -> Result<Film, RenderError>;
}

impl std::fmt::Debug for dyn RenderEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderEngine")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
