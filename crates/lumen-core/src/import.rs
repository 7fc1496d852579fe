//! OBJ import.
//!
//! Builds a renderable scene from a Wavefront OBJ file: one triangle mesh
//! per OBJ shape, a shared default material, and a default camera pose
//! looking at the origin area.

use std::path::Path;
use std::sync::Arc;

use glam::Vec3;
use thiserror::Error;

use crate::camera::{Camera, Resolution};
use crate::color::Color;
use crate::material::Diffuse;
use crate::mesh::{MeshError, TriangleMesh};
use crate::scene::Scene;

/// Import options for OBJ loading.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Material applied to every imported shape.
    pub default_color: Color,
    pub default_roughness: f32,
    /// Camera placement for the imported scene.
    pub camera_position: Vec3,
    pub camera_forward: Vec3,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            default_color: Color::new(1.0, 0.0, 0.0, 1.0),
            default_roughness: 0.3,
            camera_position: Vec3::new(-5.0, 5.0, 5.0),
            camera_forward: Vec3::new(1.0, -1.0, -1.0),
        }
    }
}

/// Errors that can occur during OBJ import.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to parse OBJ: {0}")]
    ObjParse(#[from] tobj::LoadError),

    #[error("shape '{name}' is invalid: {source}")]
    InvalidShape {
        name: String,
        #[source]
        source: MeshError,
    },

    #[error("OBJ file contains no geometry")]
    EmptyObj,
}

/// Imports an OBJ file into a scene plus a camera framing it.
pub fn import_obj(
    path: &Path,
    resolution: Resolution,
    options: &ImportOptions,
) -> Result<(Scene, Camera), ImportError> {
    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };
    let (models, _materials) = tobj::load_obj(path, &load_options)?;

    if models.iter().all(|m| m.mesh.indices.is_empty()) {
        return Err(ImportError::EmptyObj);
    }

    let mut scene = Scene::new();
    for model in &models {
        if model.mesh.indices.is_empty() {
            continue;
        }

        let vertices: Vec<Vec3> = model
            .mesh
            .positions
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
            .collect();
        let faces: Vec<[usize; 3]> = model
            .mesh
            .indices
            .chunks_exact(3)
            .map(|f| [f[0] as usize, f[1] as usize, f[2] as usize])
            .collect();

        let material = Arc::new(Diffuse::new(options.default_color, options.default_roughness));
        let mesh = TriangleMesh::new(material, vertices, faces).map_err(|source| {
            ImportError::InvalidShape {
                name: model.name.clone(),
                source,
            }
        })?;

        tracing::debug!(
            shape = %model.name,
            triangles = mesh.triangle_count(),
            "imported OBJ shape"
        );
        scene.add_object(Box::new(mesh));
    }

    let camera = Camera::new(
        resolution,
        options.camera_position,
        options.camera_forward,
        50.0,
        18.0,
    );

    Ok((scene, camera))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE_OBJ: &str = "\
v 0.0 0.0 1.0
v 1.0 0.0 1.0
v 0.0 1.0 1.0
f 1 2 3
";

    fn write_temp_obj(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_import_single_triangle() {
        let path = write_temp_obj("lumen_import_triangle.obj", TRIANGLE_OBJ);
        let (scene, camera) =
            import_obj(&path, Resolution::new(64, 64), &ImportOptions::default()).unwrap();

        assert_eq!(scene.len(), 1);
        assert_eq!(camera.position(), Vec3::new(-5.0, 5.0, 5.0));

        let ray = crate::ray::Ray::new(Vec3::new(0.1, 0.1, 0.0), Vec3::Z);
        let (hit, _) = scene.intersect(&ray).unwrap();
        assert_eq!(hit.depth, 1.0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_import_empty_obj_rejected() {
        let path = write_temp_obj("lumen_import_empty.obj", "# nothing here\n");
        let result = import_obj(&path, Resolution::new(64, 64), &ImportOptions::default());
        assert!(matches!(result, Err(ImportError::EmptyObj)));
        std::fs::remove_file(&path).ok();
    }
}
