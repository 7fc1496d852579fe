//! Triangle mesh primitive with Möller–Trumbore intersection.

use std::sync::Arc;

use glam::Vec3;
use thiserror::Error;

use crate::material::Bsdf;
use crate::ray::{Hit, Ray};
use crate::scene::Intersectable;

/// Errors raised while constructing a mesh.
#[derive(Debug, Clone, Error)]
pub enum MeshError {
    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfBounds {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct Triangle {
    a: Vec3,
    b: Vec3,
    c: Vec3,
}

impl Triangle {
    /// Möller–Trumbore ray/triangle intersection.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let edge_1 = self.b - self.a;
        let edge_2 = self.c - self.a;

        let direction = ray.direction.normalize();
        let h = direction.cross(edge_2);
        let det = edge_1.dot(h);

        if det == 0.0 {
            // The ray is parallel to the triangle plane.
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin - self.a;
        let u = inv_det * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge_1);
        let v = inv_det * direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = inv_det * edge_2.dot(q);

        // A negative t is a line intersection behind the ray origin.
        if t <= 0.0 {
            return None;
        }

        Some(Hit {
            depth: t,
            point: ray.origin + direction * t,
            normal: edge_1.cross(edge_2).normalize(),
        })
    }
}

/// An indexed triangle mesh with a single material.
pub struct TriangleMesh {
    vertices: Vec<Vec3>,
    faces: Vec<[usize; 3]>,
    triangles: Vec<Triangle>,
    material: Arc<dyn Bsdf>,
}

impl TriangleMesh {
    /// Builds a mesh, validating that every face index is in bounds.
    pub fn new(
        material: Arc<dyn Bsdf>,
        vertices: Vec<Vec3>,
        faces: Vec<[usize; 3]>,
    ) -> Result<Self, MeshError> {
        let mut triangles = Vec::with_capacity(faces.len());
        for (face_index, face) in faces.iter().enumerate() {
            for &index in face {
                if index >= vertices.len() {
                    return Err(MeshError::IndexOutOfBounds {
                        face: face_index,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
            }
            triangles.push(Triangle {
                a: vertices[face[0]],
                b: vertices[face[1]],
                c: vertices[face[2]],
            });
        }

        Ok(Self {
            vertices,
            faces,
            triangles,
            material,
        })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

impl Intersectable for TriangleMesh {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;
        for triangle in &self.triangles {
            if let Some(hit) = triangle.intersect(ray) {
                if nearest.map(|best| hit.depth < best.depth).unwrap_or(true) {
                    nearest = Some(hit);
                }
            }
        }
        nearest
    }

    fn material(&self) -> &dyn Bsdf {
        self.material.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::material::Diffuse;

    fn material() -> Arc<dyn Bsdf> {
        Arc::new(Diffuse::new(Color::WHITE, 0.0))
    }

    fn single_triangle() -> TriangleMesh {
        TriangleMesh::new(
            material(),
            vec![
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_triangle_hit() {
        let ray = Ray::new(Vec3::new(0.1, 0.1, 0.0), Vec3::Z);
        let hit = single_triangle().intersect(&ray).unwrap();
        assert_eq!(hit.depth, 1.0);
    }

    #[test]
    fn test_triangle_miss_outside_hypotenuse() {
        let ray = Ray::new(Vec3::new(0.6, 0.6, 0.0), Vec3::Z);
        assert!(single_triangle().intersect(&ray).is_none());
    }

    #[test]
    fn test_quad_second_face_hit() {
        let mesh = TriangleMesh::new(
            material(),
            vec![
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(1.0, 1.0, 1.0),
            ],
            vec![[0, 1, 2], [2, 1, 3]],
        )
        .unwrap();

        let ray = Ray::new(Vec3::new(0.6, 0.6, 0.0), Vec3::Z);
        let hit = mesh.intersect(&ray).unwrap();
        assert_eq!(hit.depth, 1.0);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.1, 0.1, 0.0), Vec3::X);
        assert!(single_triangle().intersect(&ray).is_none());
    }

    #[test]
    fn test_behind_origin_misses() {
        let ray = Ray::new(Vec3::new(0.1, 0.1, 2.0), Vec3::Z);
        assert!(single_triangle().intersect(&ray).is_none());
    }

    #[test]
    fn test_out_of_bounds_index_rejected() {
        let result = TriangleMesh::new(
            material(),
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![[0, 1, 3]],
        );
        assert!(matches!(
            result,
            Err(MeshError::IndexOutOfBounds { face: 0, index: 3, .. })
        ));
    }
}
