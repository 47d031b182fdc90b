//! Sphere primitive.

use crate::intersection::in_front;
use crate::{DVec3, Intersection, Ray};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Intersect a ray with the sphere, returning the nearest hit in front
    /// of the ray origin.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let oc = self.center - ray.origin();
        // Direction is unit length, so a == 1
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root in front of the origin
        let mut root = h - sqrtd;
        if !in_front(root) {
            root = h + sqrtd;
            if !in_front(root) {
                return None;
            }
        }

        let position = ray.at(root);
        let outward_normal = (position - self.center) / self.radius;
        Some(Intersection::new(ray, root, outward_normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.distance - 0.5).abs() < 1e-12);
        assert!(hit.front_face);
        assert!((hit.normal - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, 2.0), 0.5);
        let ray = Ray::new(DVec3::ZERO, -DVec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::new(DVec3::ZERO, 2.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::X);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-12);
        assert!(!hit.front_face);
        // Normal flipped to face the ray origin
        assert!((hit.normal + DVec3::X).length() < 1e-12);
    }
}
