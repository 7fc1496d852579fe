//! Single-bounce preview render engine.
//!
//! Renders one primary ray per pixel and shades hits by the facing ratio
//! between the surface normal and the view direction. No sampling, no
//! bounces, so output is deterministic and fast enough for viewport
//! preview use.

mod addon;
mod engine;

pub use addon::KingAddon;
pub use engine::KingEngine;
