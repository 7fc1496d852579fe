//! Lumen Addon Host
//!
//! The lifecycle host that render-engine addons register with:
//!
//! - [`addon::AddonInfo`] - Static addon metadata consumed by the host
//! - [`addon::Addon`] - The register/unregister lifecycle adapter
//! - [`engine::RenderEngine`] - Trait implemented by render engines
//! - [`registry::EngineRegistry`] - Engine registry with versioned handles
//! - [`manager::AddonManager`] - Drives the addon state machine
//!
//! # Lifecycle
//!
//! An addon moves through three states: installed (`Loaded`), enabled
//! (`Registered`), and removed. Enabling delegates to the addon's
//! [`Addon::register`], which registers one engine with the registry;
//! disabling reverses it. When the host context carries the live-reload
//! flag, re-enabling an already-enabled addon hot-swaps its engine and
//! invalidates previously issued handles.
//!
//! # Example
//!
//! ```ignore
//! use lumen_host::{AddonManager, HostContext, HostVersion};
//!
//! let host = HostContext::new(HostVersion::new(4, 5, 0));
//! let mut manager = AddonManager::new(host);
//! manager.install(Box::new(MyAddon::default()))?;
//! let handle = manager.enable("My Render Engine")?;
//! let engine = manager.registry().resolve(&handle)?;
//! ```

pub mod addon;
pub mod engine;
pub mod error;
pub mod manager;
pub mod registry;

pub use addon::*;
pub use engine::*;
pub use error::*;
pub use manager::*;
pub use registry::*;
