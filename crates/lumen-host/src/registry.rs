//! Engine registry with versioned handles.
//!
//! Registration hands out an [`EngineHandle`] carrying a revision number.
//! Hot-swapping an engine bumps the revision, so handles issued before the
//! swap are detectably stale instead of silently resolving to the old
//! implementation.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::engine::RenderEngine;
use crate::error::RegistryError;

/// A versioned reference to a registered engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineHandle {
    id: Uuid,
    name: String,
    revision: u32,
}

impl EngineHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }
}

struct EngineSlot {
    id: Uuid,
    revision: u32,
    engine: Arc<dyn RenderEngine>,
}

/// Registry of render engines keyed by engine name.
#[derive(Default)]
pub struct EngineRegistry {
    engines: HashMap<String, EngineSlot>,
}

impl EngineRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an engine under its name.
    ///
    /// Fails if an engine with the same name is already registered; use
    /// [`EngineRegistry::hot_swap`] to replace one in place.
    pub fn register(&mut self, engine: Arc<dyn RenderEngine>) -> Result<EngineHandle, RegistryError> {
        let name = engine.name().to_string();
        if self.engines.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }

        let slot = EngineSlot {
            id: Uuid::new_v4(),
            revision: 0,
            engine,
        };
        let handle = EngineHandle {
            id: slot.id,
            name: name.clone(),
            revision: slot.revision,
        };
        self.engines.insert(name, slot);

        tracing::info!(engine = %handle.name, "registered render engine");
        Ok(handle)
    }

    /// Removes an engine, returning it.
    pub fn unregister(&mut self, name: &str) -> Result<Arc<dyn RenderEngine>, RegistryError> {
        let slot = self
            .engines
            .remove(name)
            .ok_or_else(|| RegistryError::NotRegistered(name.to_string()))?;
        tracing::info!(engine = name, "unregistered render engine");
        Ok(slot.engine)
    }

    /// Replaces a registered engine in place, bumping the handle revision.
    ///
    /// Handles issued before the swap become stale.
    pub fn hot_swap(
        &mut self,
        name: &str,
        engine: Arc<dyn RenderEngine>,
    ) -> Result<EngineHandle, RegistryError> {
        let slot = self
            .engines
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotRegistered(name.to_string()))?;

        slot.revision += 1;
        slot.engine = engine;

        tracing::info!(
            engine = name,
            revision = slot.revision,
            "hot-swapped render engine"
        );
        Ok(EngineHandle {
            id: slot.id,
            name: name.to_string(),
            revision: slot.revision,
        })
    }

    /// Resolves a handle to its engine, rejecting stale handles.
    pub fn resolve(&self, handle: &EngineHandle) -> Result<Arc<dyn RenderEngine>, RegistryError> {
        let slot = self
            .engines
            .get(&handle.name)
            .ok_or_else(|| RegistryError::NotRegistered(handle.name.clone()))?;

        if slot.id != handle.id || slot.revision != handle.revision {
            return Err(RegistryError::StaleHandle {
                name: handle.name.clone(),
                held: handle.revision,
                current: slot.revision,
            });
        }

        Ok(Arc::clone(&slot.engine))
    }

    /// Looks up an engine by name, ignoring handle revisions.
    pub fn get(&self, name: &str) -> Option<Arc<dyn RenderEngine>> {
        self.engines.get(name).map(|slot| Arc::clone(&slot.engine))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.engines.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Iterates over the registered engine names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.engines.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RenderError, RenderSettings};
    use lumen_core::{Camera, Film, Scene};

    struct TestEngine {
        name: String,
        tag: u32,
    }

    impl TestEngine {
        fn new(name: &str, tag: u32) -> Arc<dyn RenderEngine> {
            Arc::new(Self {
                name: name.to_string(),
                tag,
            })
        }
    }

    impl RenderEngine for TestEngine {
        fn name(&self) -> &str {
            &self.name
        }

        fn render(
            &self,
            _scene: &Scene,
            camera: &Camera,
            _settings: &RenderSettings,
        ) -> Result<Film, RenderError> {
            // Encode the tag so tests can tell engine instances apart.
            let mut film = Film::new(camera.resolution());
            film.set_pixel(
                0,
                0,
                lumen_core::Color::new(self.tag as f32 / 255.0, 0.0, 0.0, 1.0),
            );
            Ok(film)
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = EngineRegistry::new();
        let handle = registry.register(TestEngine::new("test", 1)).unwrap();

        assert_eq!(handle.name(), "test");
        assert_eq!(handle.revision(), 0);
        assert!(registry.contains("test"));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("test").is_some());
        assert!(registry.get("other").is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = EngineRegistry::new();
        registry.register(TestEngine::new("test", 1)).unwrap();
        let err = registry.register(TestEngine::new("test", 2)).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered(name) if name == "test"));
    }

    #[test]
    fn test_unregister_removes() {
        let mut registry = EngineRegistry::new();
        registry.register(TestEngine::new("test", 1)).unwrap();
        registry.unregister("test").unwrap();
        assert!(registry.is_empty());

        let err = registry.unregister("test").unwrap_err();
        assert!(matches!(err, RegistryError::NotRegistered(_)));
    }

    #[test]
    fn test_hot_swap_bumps_revision_and_stales_old_handle() {
        let mut registry = EngineRegistry::new();
        let old_handle = registry.register(TestEngine::new("test", 1)).unwrap();

        let new_handle = registry
            .hot_swap("test", TestEngine::new("test", 2))
            .unwrap();
        assert_eq!(new_handle.revision(), 1);

        assert!(registry.resolve(&new_handle).is_ok());
        let err = registry.resolve(&old_handle).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::StaleHandle { held: 0, current: 1, .. }
        ));
    }

    #[test]
    fn test_hot_swap_replaces_implementation() {
        let mut registry = EngineRegistry::new();
        registry.register(TestEngine::new("test", 1)).unwrap();
        let handle = registry
            .hot_swap("test", TestEngine::new("test", 7))
            .unwrap();

        let engine = registry.resolve(&handle).unwrap();
        let camera = Camera::new(
            lumen_core::Resolution::new(2, 2),
            glam::Vec3::ZERO,
            glam::Vec3::X,
            50.0,
            18.0,
        );
        let film = engine
            .render(&Scene::new(), &camera, &RenderSettings::default())
            .unwrap();
        assert_eq!(film.pixel(0, 0), Some([7, 0, 0, 255]));
    }

    #[test]
    fn test_resolve_after_reregistration_is_stale() {
        let mut registry = EngineRegistry::new();
        let old_handle = registry.register(TestEngine::new("test", 1)).unwrap();
        registry.unregister("test").unwrap();
        registry.register(TestEngine::new("test", 2)).unwrap();

        // Same name and revision, but a different registration identity.
        let err = registry.resolve(&old_handle).unwrap_err();
        assert!(matches!(err, RegistryError::StaleHandle { .. }));
    }
}
