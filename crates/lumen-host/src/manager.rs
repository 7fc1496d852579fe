//! Addon manager driving the per-addon state machine.

use std::sync::Arc;

use crate::addon::{Addon, AddonInfo, HostVersion};
use crate::engine::RenderEngine;
use crate::error::AddonError;
use crate::registry::{EngineHandle, EngineRegistry};

/// Explicit host state handed to the addon system by the embedder.
///
/// `is_live_reload` replaces runtime-namespace sniffing: the embedder sets
/// it when addon code has been reloaded within a running host process, and
/// the manager then swaps engines on re-enable instead of rejecting the
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostContext {
    pub version: HostVersion,
    pub is_live_reload: bool,
}

impl HostContext {
    pub fn new(version: HostVersion) -> Self {
        Self {
            version,
            is_live_reload: false,
        }
    }

    pub fn with_live_reload(mut self, is_live_reload: bool) -> Self {
        self.is_live_reload = is_live_reload;
        self
    }
}

/// Lifecycle state of an installed addon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddonState {
    /// Installed but not registered with the engine registry.
    Loaded,
    /// Enabled; its engine is registered.
    Registered,
}

struct AddonEntry {
    addon: Box<dyn Addon>,
    state: AddonState,
    handle: Option<EngineHandle>,
}

/// Owns installed addons and the engine registry, and drives each addon
/// through `Loaded -> Registered -> Loaded`.
///
/// Addon lifecycle calls are synchronous and assume a single driving
/// thread, matching how a host's addon UI invokes them.
pub struct AddonManager {
    host: HostContext,
    registry: EngineRegistry,
    addons: Vec<AddonEntry>,
}

impl AddonManager {
    pub fn new(host: HostContext) -> Self {
        Self {
            host,
            registry: EngineRegistry::new(),
            addons: Vec::new(),
        }
    }

    pub fn host(&self) -> &HostContext {
        &self.host
    }

    pub fn registry(&self) -> &EngineRegistry {
        &self.registry
    }

    /// Installs an addon, checking its minimum host version.
    ///
    /// The addon lands in `Loaded`; nothing is registered yet.
    pub fn install(&mut self, addon: Box<dyn Addon>) -> Result<(), AddonError> {
        let info = addon.info();
        if !self.host.version.at_least(info.host_version) {
            return Err(AddonError::IncompatibleHost {
                name: info.name.clone(),
                required: info.host_version,
                actual: self.host.version,
            });
        }
        if self.addons.iter().any(|e| e.addon.info().name == info.name) {
            return Err(AddonError::AlreadyInstalled(info.name.clone()));
        }

        tracing::info!(addon = %info.name, "installed addon");
        self.addons.push(AddonEntry {
            addon,
            state: AddonState::Loaded,
            handle: None,
        });
        Ok(())
    }

    /// Enables an addon by name, delegating to its `register`.
    ///
    /// Re-enabling an already-enabled addon is an error, except under a
    /// live-reload host context, where it hot-swaps the engine and returns
    /// a fresh handle.
    pub fn enable(&mut self, name: &str) -> Result<EngineHandle, AddonError> {
        let index = self.find(name)?;
        let entry = &mut self.addons[index];

        match entry.state {
            AddonState::Loaded => {
                let handle = entry.addon.register(&mut self.registry)?;
                entry.state = AddonState::Registered;
                entry.handle = Some(handle.clone());
                tracing::info!(addon = name, engine = handle.name(), "enabled addon");
                Ok(handle)
            }
            AddonState::Registered => {
                if !self.host.is_live_reload {
                    return Err(AddonError::AlreadyEnabled(name.to_string()));
                }

                // Live reload: the addon code may have changed, so rebuild
                // the engine and swap it in place.
                let engine_name = entry
                    .handle
                    .as_ref()
                    .map(|h| h.name().to_string())
                    .ok_or_else(|| AddonError::NotEnabled(name.to_string()))?;
                let handle = self
                    .registry
                    .hot_swap(&engine_name, entry.addon.engine())?;
                entry.handle = Some(handle.clone());
                tracing::info!(addon = name, engine = %engine_name, "reloaded addon engine");
                Ok(handle)
            }
        }
    }

    /// Disables an addon, delegating to its `unregister`.
    pub fn disable(&mut self, name: &str) -> Result<(), AddonError> {
        let index = self.find(name)?;
        let entry = &mut self.addons[index];

        if entry.state != AddonState::Registered {
            return Err(AddonError::NotEnabled(name.to_string()));
        }

        entry.addon.unregister(&mut self.registry)?;
        entry.state = AddonState::Loaded;
        entry.handle = None;
        tracing::info!(addon = name, "disabled addon");
        Ok(())
    }

    /// Removes an addon entirely, disabling it first if needed.
    pub fn remove(&mut self, name: &str) -> Result<Box<dyn Addon>, AddonError> {
        let index = self.find(name)?;
        if self.addons[index].state == AddonState::Registered {
            self.addons[index].addon.unregister(&mut self.registry)?;
        }
        let entry = self.addons.remove(index);
        tracing::info!(addon = name, "removed addon");
        Ok(entry.addon)
    }

    /// Current state of an installed addon.
    pub fn state(&self, name: &str) -> Option<AddonState> {
        self.addons
            .iter()
            .find(|e| e.addon.info().name == name)
            .map(|e| e.state)
    }

    /// Looks up a registered engine by engine name.
    pub fn engine(&self, name: &str) -> Option<Arc<dyn RenderEngine>> {
        self.registry.get(name)
    }

    /// Iterates over installed addon descriptors and their states.
    pub fn addons(&self) -> impl Iterator<Item = (&AddonInfo, AddonState)> {
        self.addons.iter().map(|e| (e.addon.info(), e.state))
    }

    fn find(&self, name: &str) -> Result<usize, AddonError> {
        self.addons
            .iter()
            .position(|e| e.addon.info().name == name)
            .ok_or_else(|| AddonError::UnknownAddon(name.to_string()))
    }
}
