//! Addon adapter exposing the Cosmic engine to the host.

use std::sync::Arc;

use lumen_host::{Addon, AddonError, AddonInfo, EngineHandle, EngineRegistry, HostVersion, RenderEngine};

use crate::engine::CosmicEngine;

/// Registers [`CosmicEngine`] with a render host.
#[derive(Debug)]
pub struct CosmicAddon {
    info: AddonInfo,
}

impl CosmicAddon {
    pub fn new() -> Self {
        Self {
            info: AddonInfo {
                name: "Cosmic Render Engine".to_string(),
                author: "Lumen Contributors".to_string(),
                description: "Path-traced CPU renderer with scanline workers".to_string(),
                host_version: HostVersion::new(3, 5, 0),
                category: "Render".to_string(),
            },
        }
    }
}

impl Default for CosmicAddon {
    fn default() -> Self {
        Self::new()
    }
}

impl Addon for CosmicAddon {
    fn info(&self) -> &AddonInfo {
        &self.info
    }

    fn engine(&self) -> Arc<dyn RenderEngine> {
        Arc::new(CosmicEngine::new())
    }

    fn register(&self, registry: &mut EngineRegistry) -> Result<EngineHandle, AddonError> {
        Ok(registry.register(self.engine())?)
    }

    fn unregister(&self, registry: &mut EngineRegistry) -> Result<(), AddonError> {
        registry.unregister(CosmicEngine::NAME)?;
        Ok(())
    }
}
