use crate::{DVec3, Ray};

/// Record of a ray hitting a surface.
///
/// Owned by value: primitive tests build a fresh one per query and the
/// tracer copies the winner out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Distance along the ray (finite, non-negative)
    pub distance: f64,
    /// Point of intersection
    pub position: DVec3,
    /// Unit surface normal, always facing against the ray
    pub normal: DVec3,
    /// Whether the ray hit the outward side of the surface
    pub front_face: bool,
}

/// Whether a root `t` is a usable hit distance: strictly in front of the
/// origin and finite.
pub(crate) fn in_front(t: f64) -> bool {
    t > 0.0 && t < f64::MAX
}

impl Intersection {
    /// Build an intersection at `distance` along `ray`, orienting
    /// `outward_normal` against the ray.
    pub fn new(ray: &Ray, distance: f64, outward_normal: DVec3) -> Self {
        let mut hit = Self {
            distance,
            position: ray.at(distance),
            normal: outward_normal,
            front_face: true,
        };
        hit.set_face_normal(ray, outward_normal);
        hit
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: DVec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}
