//! Addon descriptors and the lifecycle adapter trait.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::RenderEngine;
use crate::error::AddonError;
use crate::registry::{EngineHandle, EngineRegistry};

/// A host version as an ordered (major, minor, patch) triple.
///
/// The derived ordering is lexicographic, so `HostVersion::new(3, 5, 0) >
/// HostVersion::new(3, 2, 1)` holds as expected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HostVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl HostVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// True if this version satisfies the given minimum requirement.
    pub fn at_least(self, required: HostVersion) -> bool {
        self >= required
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Static metadata describing an addon.
///
/// Created once per addon and never mutated; the host's addon browser
/// consumes it for listing and compatibility filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonInfo {
    pub name: String,
    pub author: String,
    pub description: String,
    /// Minimum host version this addon supports.
    pub host_version: HostVersion,
    pub category: String,
}

/// The addon lifecycle adapter.
///
/// Implementations are thin pass-throughs: `register` hands the addon's
/// engine to the registry, `unregister` reverses it. Errors from the
/// engine side must propagate unmodified; the adapter performs no
/// recovery of its own.
pub trait Addon: Send {
    /// The addon's static descriptor.
    fn info(&self) -> &AddonInfo;

    /// Builds the addon's engine instance.
    ///
    /// Called again on hot-swap, so a changed implementation becomes
    /// observable without restarting the host.
    fn engine(&self) -> Arc<dyn RenderEngine>;

    /// Registers the addon's engine with the registry.
    fn register(&self, registry: &mut EngineRegistry) -> Result<EngineHandle, AddonError>;

    /// Removes the addon's engine from the registry.
    fn unregister(&self, registry: &mut EngineRegistry) -> Result<(), AddonError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_ordering() {
        assert!(HostVersion::new(3, 5, 0) > HostVersion::new(3, 2, 0));
        assert!(HostVersion::new(4, 0, 0) > HostVersion::new(3, 9, 9));
        assert!(HostVersion::new(3, 2, 1) > HostVersion::new(3, 2, 0));
        assert_eq!(HostVersion::new(1, 2, 3), HostVersion::new(1, 2, 3));
    }

    #[test]
    fn test_at_least() {
        let host = HostVersion::new(3, 5, 0);
        assert!(host.at_least(HostVersion::new(3, 2, 0)));
        assert!(host.at_least(HostVersion::new(3, 5, 0)));
        assert!(!host.at_least(HostVersion::new(3, 6, 0)));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(HostVersion::new(3, 5, 0).to_string(), "3.5.0");
    }
}
