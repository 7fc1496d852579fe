//! Built-in demo scenes.

use std::sync::Arc;

use glam::Vec3;
use rand::Rng;
use rand::RngCore;

use crate::camera::{Camera, Resolution};
use crate::color::{Color, lerp};
use crate::material::{Diffuse, Emissive};
use crate::mesh::{MeshError, TriangleMesh};
use crate::scene::Scene;
use crate::sphere::Sphere;

const FOCAL_LENGTH_MM: f32 = 50.0;
const SENSOR_WIDTH_MM: f32 = 18.0;

/// Built-in scene selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetScene {
    /// Scattered diffuse spheres with one emitter above a ground sphere.
    Spheres,
    /// A single diffuse sphere lit by a small emitter.
    SingleSphere,
    /// A 15x15 grid of emissive spheres viewed from above.
    SphereArray,
    /// A diffuse cube mesh with emitters inside, behind, and beside it.
    Cube,
}

fn random_color(rng: &mut dyn RngCore) -> Color {
    Color::new(rng.r#gen(), rng.r#gen(), rng.r#gen(), 1.0)
}

fn random_roughness(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    lerp(min, max, rng.r#gen())
}

/// Builds the selected preset scene and its camera.
pub fn load_preset(
    preset: PresetScene,
    resolution: Resolution,
    rng: &mut dyn RngCore,
) -> Result<(Scene, Camera), MeshError> {
    match preset {
        PresetScene::Spheres => Ok(spheres(resolution, rng)),
        PresetScene::SingleSphere => Ok(single_sphere(resolution)),
        PresetScene::SphereArray => Ok(sphere_array(resolution, rng)),
        PresetScene::Cube => cube(resolution, rng),
    }
}

fn spheres(resolution: Resolution, rng: &mut dyn RngCore) -> (Scene, Camera) {
    let camera = Camera::new(
        resolution,
        Vec3::new(0.0, 0.25, 0.0),
        Vec3::X,
        FOCAL_LENGTH_MM,
        SENSOR_WIDTH_MM,
    );

    let mut scene = Scene::new();
    let positions = [
        Vec3::new(9.0, 0.0, -3.0),
        Vec3::new(14.0, 1.0, -3.0),
        Vec3::new(10.0, -1.0, 0.0),
        Vec3::new(14.0, 0.0, 1.0),
        Vec3::new(18.0, 1.0, 2.0),
        Vec3::new(16.0, -1.0, 4.0),
    ];
    for position in positions {
        scene.add_object(Box::new(Sphere::new(
            position,
            1.0,
            Arc::new(Diffuse::new(
                random_color(rng),
                random_roughness(rng, 0.0, 0.3),
            )),
        )));
    }
    scene.add_object(Box::new(Sphere::new(
        Vec3::new(12.0, 0.0, 4.0),
        1.0,
        Arc::new(Emissive::new(random_color(rng), 10.0)),
    )));
    // Ground sphere.
    scene.add_object(Box::new(Sphere::new(
        Vec3::new(0.0, -1002.0, 0.0),
        1000.0,
        Arc::new(Diffuse::new(Color::new(0.5, 0.5, 0.5, 1.0), 0.5)),
    )));

    (scene, camera)
}

fn single_sphere(resolution: Resolution) -> (Scene, Camera) {
    let camera = Camera::new(
        resolution,
        Vec3::ZERO,
        Vec3::X,
        FOCAL_LENGTH_MM,
        SENSOR_WIDTH_MM,
    );

    let mut scene = Scene::new();
    scene.add_object(Box::new(Sphere::new(
        Vec3::new(5.0, 0.0, -1.0),
        0.5,
        Arc::new(Diffuse::new(Color::new(1.0, 0.0, 1.0, 1.0), 0.3)),
    )));
    scene.add_object(Box::new(Sphere::new(
        Vec3::new(5.0, 0.0, 1.0),
        0.1,
        Arc::new(Emissive::new(Color::new(0.0, 0.0, 1.0, 1.0), 100.0)),
    )));

    (scene, camera)
}

fn sphere_array(resolution: Resolution, rng: &mut dyn RngCore) -> (Scene, Camera) {
    let count = 15;
    let half = (count - 1) as f32 / 2.0;

    let camera = Camera::new(
        resolution,
        Vec3::new(half, count as f32 * 2.5, half),
        Vec3::new(0.0, -1.0, 0.0),
        FOCAL_LENGTH_MM,
        SENSOR_WIDTH_MM,
    );

    let mut scene = Scene::new();
    for i in 0..count {
        for j in 0..count {
            scene.add_object(Box::new(Sphere::new(
                Vec3::new(i as f32, 0.0, j as f32),
                0.4,
                Arc::new(Emissive::new(random_color(rng), 5.0)),
            )));
        }
    }

    (scene, camera)
}

fn cube(resolution: Resolution, rng: &mut dyn RngCore) -> Result<(Scene, Camera), MeshError> {
    let camera = Camera::new(
        resolution,
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        FOCAL_LENGTH_MM,
        SENSOR_WIDTH_MM,
    );

    let vertices = vec![
        Vec3::new(-0.25, -0.25, 0.25),  //  [0] bottom-left front
        Vec3::new(0.25, -0.25, 0.25),   //  [1] bottom-right front
        Vec3::new(-0.25, 0.25, 0.25),   //  [2] top-left front
        Vec3::new(0.25, 0.25, 0.25),    //  [3] top-right front
        Vec3::new(-0.25, -0.25, -0.25), //  [4] bottom-left back
        Vec3::new(0.25, -0.25, -0.25),  //  [5] bottom-right back
        Vec3::new(-0.25, 0.25, -0.25),  //  [6] top-left back
        Vec3::new(0.25, 0.25, -0.25),   //  [7] top-right back
    ];
    let faces = vec![
        [0, 1, 2],
        [2, 1, 3],
        [4, 0, 2],
        [2, 6, 4],
        [5, 3, 1],
        [5, 7, 3],
        [5, 4, 6],
        [6, 7, 5],
        [6, 2, 3],
        [3, 7, 6],
        [1, 0, 4],
        [4, 5, 1],
    ];

    let cube_material = Arc::new(Diffuse::new(
        Color::new(1.0, 0.0, 0.0, 1.0),
        random_roughness(rng, 0.0, 0.3),
    ));

    let mut scene = Scene::new();
    scene.add_object(Box::new(TriangleMesh::new(cube_material, vertices, faces)?));
    // An emitter hidden inside the cube.
    scene.add_object(Box::new(Sphere::new(
        Vec3::ZERO,
        0.2,
        Arc::new(Emissive::new(random_color(rng), 10.0)),
    )));
    // One behind the cube, one beside it.
    scene.add_object(Box::new(Sphere::new(
        Vec3::new(0.5, 0.0, 0.0),
        0.2,
        Arc::new(Emissive::new(Color::new(0.0, 1.0, 0.0, 1.0), 1.0)),
    )));
    scene.add_object(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, 0.5),
        0.2,
        Arc::new(Emissive::new(Color::new(0.0, 0.0, 1.0, 1.0), 1.0)),
    )));

    Ok((scene, camera))
}
