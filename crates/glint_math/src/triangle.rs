//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::intersection::in_front;
use crate::{DVec3, Intersection, Ray};

/// Determinants below this are treated as a ray parallel to the plane.
const PARALLEL_EPSILON: f64 = 1e-12;

/// A triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices
    vertices: [DVec3; 3],
    /// Face normal from the winding order (unit length unless degenerate)
    normal: DVec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The face normal follows the right-hand rule over `v0, v1, v2`.
    pub fn new(v0: DVec3, v1: DVec3, v2: DVec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();
        Self {
            vertices: [v0, v1, v2],
            normal,
        }
    }

    pub fn vertices(&self) -> &[DVec3; 3] {
        &self.vertices
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Twice the triangle area.
    pub fn double_area(&self) -> f64 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v0).length()
    }

    /// True when the vertices are collinear and no ray can hit the face.
    pub fn is_degenerate(&self) -> bool {
        self.normal == DVec3::ZERO
    }

    /// Barycentric weights of `p` with respect to `v0, v1, v2`.
    ///
    /// `p` is assumed to lie in the triangle's plane.
    pub fn barycentric(&self, p: DVec3) -> DVec3 {
        let [v0, v1, v2] = self.vertices;
        let area = self.double_area();
        if area == 0.0 {
            return DVec3::new(1.0, 0.0, 0.0);
        }
        let w0 = (v1 - p).cross(v2 - p).length() / area;
        let w1 = (v2 - p).cross(v0 - p).length() / area;
        DVec3::new(w0, w1, 1.0 - w0 - w1)
    }

    /// Möller-Trumbore ray-triangle intersection, hits in front of the
    /// ray origin only.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let [v0, v1, v2] = self.vertices;
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        if !in_front(t) {
            return None;
        }

        Some(Intersection::new(ray, t, self.normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_triangle(z: f64) -> Triangle {
        Triangle::new(
            DVec3::new(-1.0, -1.0, z),
            DVec3::new(1.0, -1.0, z),
            DVec3::new(0.0, 1.0, z),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let tri = xy_triangle(-1.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        let hit = tri.intersect(&ray).unwrap();
        assert!((hit.distance - 1.0).abs() < 1e-12);
        assert!(hit.front_face);
        assert_eq!(hit.normal, DVec3::Z);
    }

    #[test]
    fn test_triangle_miss() {
        let tri = xy_triangle(-1.0);

        // Ray pointing away
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 1.0));
        assert!(tri.intersect(&ray).is_none());

        // Ray passing beside the triangle
        let ray = Ray::new(DVec3::new(5.0, 0.0, 0.0), -DVec3::Z);
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_back_face() {
        let tri = xy_triangle(1.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        let hit = tri.intersect(&ray).unwrap();
        assert!(!hit.front_face);
        assert_eq!(hit.normal, -DVec3::Z);
    }

    #[test]
    fn test_degenerate_triangle() {
        let tri = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
        assert!(tri.is_degenerate());
        let ray = Ray::new(DVec3::new(0.5, 0.0, 1.0), -DVec3::Z);
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_barycentric_vertices_and_centroid() {
        let tri = xy_triangle(0.0);
        let [v0, v1, v2] = *tri.vertices();

        assert!((tri.barycentric(v0) - DVec3::X).length() < 1e-12);
        assert!((tri.barycentric(v1) - DVec3::Y).length() < 1e-12);
        assert!((tri.barycentric(v2) - DVec3::Z).length() < 1e-12);

        let centroid = (v0 + v1 + v2) / 3.0;
        assert!((tri.barycentric(centroid) - DVec3::splat(1.0 / 3.0)).length() < 1e-12);
    }
}
