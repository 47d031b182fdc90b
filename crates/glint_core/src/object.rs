//! Renderable objects: a primitive paired with its material.

use std::sync::Arc;

use glint_math::{DVec3, Sphere, Triangle};

use crate::material::Material;

/// A sphere with a material.
#[derive(Debug, Clone)]
pub struct SphereObject {
    pub sphere: Sphere,
    pub material: Arc<Material>,
}

impl SphereObject {
    pub fn new(sphere: Sphere, material: Arc<Material>) -> Self {
        Self { sphere, material }
    }
}

/// A mesh triangle with a material and optional per-vertex normals.
#[derive(Debug, Clone)]
pub struct TriangleObject {
    pub triangle: Triangle,
    /// Vertex normals in the same order as the triangle's vertices
    pub normals: Option<[DVec3; 3]>,
    pub material: Arc<Material>,
}

impl TriangleObject {
    pub fn new(triangle: Triangle, material: Arc<Material>) -> Self {
        Self {
            triangle,
            normals: None,
            material,
        }
    }

    /// Attach per-vertex normals for smooth shading.
    pub fn with_normals(mut self, normals: [DVec3; 3]) -> Self {
        self.normals = Some(normals);
        self
    }

    /// Outward shading normal at `position` (a point on the triangle).
    ///
    /// Interpolates the vertex normals when present, otherwise returns
    /// the face normal.
    pub fn shading_normal(&self, position: DVec3) -> DVec3 {
        match self.normals {
            Some([n0, n1, n2]) => {
                let w = self.triangle.barycentric(position);
                let n = w.x * n0 + w.y * n1 + w.z * n2;
                n.try_normalize().unwrap_or(self.triangle.normal())
            }
            None => self.triangle.normal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> Triangle {
        Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y)
    }

    #[test]
    fn test_flat_shading_uses_face_normal() {
        let obj = TriangleObject::new(flat(), Arc::new(Material::default()));
        assert_eq!(obj.shading_normal(DVec3::new(0.25, 0.25, 0.0)), DVec3::Z);
    }

    #[test]
    fn test_smooth_shading_interpolates() {
        let tilted = DVec3::new(1.0, 0.0, 1.0).normalize();
        let obj = TriangleObject::new(flat(), Arc::new(Material::default()))
            .with_normals([DVec3::Z, tilted, DVec3::Z]);

        // At v0 the normal is exactly v0's
        assert!((obj.shading_normal(DVec3::ZERO) - DVec3::Z).length() < 1e-12);
        // At v1 it is v1's
        assert!((obj.shading_normal(DVec3::X) - tilted).length() < 1e-12);

        let mid = obj.shading_normal(DVec3::new(0.5, 0.0, 0.0));
        assert!((mid.length() - 1.0).abs() < 1e-12);
        assert!(mid.x > 0.0 && mid.x < tilted.x);
    }

    #[test]
    fn test_opposing_normals_fall_back_to_face() {
        let obj = TriangleObject::new(flat(), Arc::new(Material::default()))
            .with_normals([DVec3::Z, -DVec3::Z, DVec3::Z]);
        let n = obj.shading_normal(DVec3::new(0.5, 0.0, 0.0));
        assert_eq!(n, DVec3::Z);
    }
}
