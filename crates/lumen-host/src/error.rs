//! Error types for the addon host.

use thiserror::Error;

use crate::addon::HostVersion;

/// Errors from the engine registry.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("engine '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("engine '{0}' is not registered")]
    NotRegistered(String),

    #[error("stale handle for engine '{name}': held revision {held}, current revision {current}")]
    StaleHandle {
        name: String,
        held: u32,
        current: u32,
    },
}

/// Errors surfaced by addon lifecycle operations.
///
/// Failures inside an addon's engine implementation cross the adapter
/// boundary unmodified via the `Delegation` variant.
#[derive(Debug, Error)]
pub enum AddonError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// An error raised by the addon's implementation, passed through
    /// without rewrapping or local recovery.
    #[error(transparent)]
    Delegation(Box<dyn std::error::Error + Send + Sync>),

    #[error("addon '{name}' requires host {required}, but the host is {actual}")]
    IncompatibleHost {
        name: String,
        required: HostVersion,
        actual: HostVersion,
    },

    #[error("addon '{0}' is already installed")]
    AlreadyInstalled(String),

    #[error("addon '{0}' is already enabled")]
    AlreadyEnabled(String),

    #[error("addon '{0}' is not enabled")]
    NotEnabled(String),

    #[error("no installed addon named '{0}'")]
    UnknownAddon(String),
}
