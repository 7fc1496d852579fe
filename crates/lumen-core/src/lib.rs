//! Lumen Renderer Core
//!
//! Scene, material, and camera primitives shared by every Lumen render
//! engine:
//! - Color: linear-space RGBA arithmetic
//! - Ray/Hit: ray casting and intersection records
//! - Camera: pinhole camera with jittered sub-pixel sampling
//! - Bsdf: material scattering (diffuse, glossy, emissive)
//! - Sphere/TriangleMesh: intersectable primitives
//! - Scene/World: object container and environment lighting
//! - Film: bounds-checked RGBA8 output buffer
//! - import: OBJ file import
//! - presets: built-in demo scenes

pub mod camera;
pub mod color;
pub mod film;
pub mod import;
pub mod material;
pub mod mesh;
pub mod presets;
pub mod ray;
pub mod sampling;
pub mod scene;
pub mod sphere;

pub use camera::*;
pub use color::*;
pub use film::*;
pub use import::*;
pub use material::*;
pub use mesh::*;
pub use presets::*;
pub use ray::*;
pub use sampling::*;
pub use scene::*;
pub use sphere::*;
