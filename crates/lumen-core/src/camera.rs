//! Pinhole camera model.

use glam::Vec3;
use rand::Rng;
use rand::RngCore;

use crate::ray::Ray;

const MM_IN_M: f32 = 1000.0;

/// Output image resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A pinhole camera with a physical sensor model.
///
/// Rays leave the camera position through a sensor plane placed one focal
/// length in front of it. Focal length and sensor width are in millimetres,
/// matching typical photographic conventions.
#[derive(Debug, Clone)]
pub struct Camera {
    resolution: Resolution,
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    focal_length_mm: f32,
    sensor_width_mm: f32,
}

impl Camera {
    /// Creates a camera at `position` looking along `forward`.
    ///
    /// The right/up basis is derived from the world Y axis; straight-up and
    /// straight-down forward vectors get a fixed basis since the cross
    /// product degenerates there.
    pub fn new(
        resolution: Resolution,
        position: Vec3,
        forward: Vec3,
        focal_length_mm: f32,
        sensor_width_mm: f32,
    ) -> Self {
        let forward = forward.normalize();

        let (right, up) = if forward == Vec3::new(0.0, 1.0, 0.0) {
            (Vec3::new(0.0, 0.0, 1.0), Vec3::new(-1.0, 0.0, 0.0))
        } else if forward == Vec3::new(0.0, -1.0, 0.0) {
            (Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0))
        } else {
            let right = forward.cross(Vec3::Y).normalize();
            (right, right.cross(forward).normalize())
        };

        Self {
            resolution,
            position,
            forward,
            right,
            up,
            focal_length_mm,
            sensor_width_mm,
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Sensor width in metres.
    fn sensor_width_m(&self) -> f32 {
        self.sensor_width_mm / MM_IN_M
    }

    /// Sensor height in metres, preserving the pixel aspect ratio.
    fn sensor_height_m(&self) -> f32 {
        self.sensor_width_m() * self.resolution.height as f32 / self.resolution.width as f32
    }

    /// Side length of one pixel on the sensor plane, in metres.
    pub fn pixel_size_m(&self) -> f32 {
        self.sensor_width_m() / self.resolution.width as f32
    }

    /// The ray through the center of pixel `(x, y)`.
    ///
    /// `(0, 0)` is the top-left pixel. The returned direction is not
    /// normalized; its length is the distance to the sensor plane.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let near_plane_center = self.position + self.forward * (self.focal_length_mm / MM_IN_M);

        let horizontal =
            ((2 * x + 1) as f32 / self.resolution.width as f32 - 1.0) * self.sensor_width_m();
        let vertical =
            (-((2 * y + 1) as f32) / self.resolution.height as f32 + 1.0) * self.sensor_height_m();

        let direction =
            near_plane_center + self.right * horizontal + self.up * vertical - self.position;

        Ray::new(self.position, direction)
    }

    /// A jittered ray through pixel `(x, y)` for antialiasing.
    ///
    /// The central ray direction is offset by up to half a pixel on the
    /// sensor plane in each axis.
    pub fn sample_ray(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray {
        let central = self.primary_ray(x, y);
        let pixel_size = self.pixel_size_m();
        let jitter_x: f32 = rng.gen_range(-0.5..=0.5);
        let jitter_y: f32 = rng.gen_range(-0.5..=0.5);

        let direction = central.direction
            + self.right * (jitter_x * pixel_size)
            + self.up * (jitter_y * pixel_size);

        Ray::new(self.position, direction)
    }
}
