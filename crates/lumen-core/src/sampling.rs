//! Random sampling helpers shared by materials and camera jitter.

use glam::Vec3;
use rand::Rng;
use rand::RngCore;

/// Rejection-samples a vector inside the unit sphere.
///
/// Based on the "Ray Tracing in One Weekend" diffuse sampling approach.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if v.length_squared() < 1.0 {
            return v;
        }
    }
}
