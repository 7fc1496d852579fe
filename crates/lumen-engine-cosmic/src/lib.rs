//! Cosmic Render Engine
//!
//! A CPU path tracer: per pixel, a number of jittered camera rays are
//! traced through the scene, bouncing off materials until they terminate
//! at an emitter, escape to the world background, or exhaust their bounce
//! budget. Rendering is parallelised over scanlines on a worker pool.
//!
//! The crate also exposes [`CosmicAddon`], the lifecycle adapter that
//! registers the engine with a Lumen addon host.

mod addon;
mod engine;
mod integrator;
mod pool;

pub use addon::CosmicAddon;
pub use engine::CosmicEngine;
