//! Addon adapter exposing the King engine to the host.

use std::sync::Arc;

use lumen_host::{Addon, AddonError, AddonInfo, EngineHandle, EngineRegistry, HostVersion, RenderEngine};

use crate::engine::KingEngine;

/// Registers [`KingEngine`] with a render host.
#[derive(Debug)]
pub struct KingAddon {
    info: AddonInfo,
}

impl KingAddon {
    pub fn new() -> Self {
        Self {
            info: AddonInfo {
                name: "King Render Engine".to_string(),
                author: "Lumen Contributors".to_string(),
                description: "Deterministic facing-ratio preview renderer".to_string(),
                host_version: HostVersion::new(3, 2, 0),
                category: "Render".to_string(),
            },
        }
    }
}

impl Default for KingAddon {
    fn default() -> Self {
        Self::new()
    }
}

impl Addon for KingAddon {
    fn info(&self) -> &AddonInfo {
        &self.info
    }

    fn engine(&self) -> Arc<dyn RenderEngine> {
        Arc::new(KingEngine::new())
    }

    fn register(&self, registry: &mut EngineRegistry) -> Result<EngineHandle, AddonError> {
        Ok(registry.register(self.engine())?)
    }

    fn unregister(&self, registry: &mut EngineRegistry) -> Result<(), AddonError> {
        registry.unregister(KingEngine::NAME)?;
        Ok(())
    }
}
