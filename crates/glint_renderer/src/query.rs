//! Nearest-hit search across the scene's object kinds.
//!
//! The tracer queries triangles first and spheres second. Both queries
//! share one [`HitAccumulator`], so the second query only wins where it is
//! strictly closer than whatever the first one found. Ties therefore go
//! to triangles.

use glint_core::{Material, SphereObject, TriangleObject};
use glint_math::{Intersection, Ray};

/// Capabilities the tracer needs from a renderable object.
pub trait Shadeable {
    /// Intersect a ray with the object's geometry.
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;

    /// The object's surface material.
    fn material(&self) -> &Material;

    /// Replace the geometric normal of a hit with the shading normal,
    /// still facing against `ray`. Called once the object is known to be
    /// the visible one.
    fn orient_normal(&self, _ray: &Ray, _hit: &mut Intersection) {}

    /// Whether `ray` is travelling through the object's interior at `hit`.
    ///
    /// The default treats every back-face hit as inside. That is exact
    /// for closed surfaces, but it makes an open triangle single-sided:
    /// seen from behind, it counts as inside, so it gets no reflection
    /// and its refraction is not attenuated.
    fn is_inside(&self, _ray: &Ray, hit: &Intersection) -> bool {
        !hit.front_face
    }
}

impl Shadeable for SphereObject {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        self.sphere.intersect(ray)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

impl Shadeable for TriangleObject {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        self.triangle.intersect(ray)
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn orient_normal(&self, ray: &Ray, hit: &mut Intersection) {
        let normal = self.shading_normal(hit.position);
        hit.set_face_normal(ray, normal);
    }
}

/// The best hit found so far for one ray, across every object kind.
#[derive(Debug, Clone, Default)]
pub struct HitAccumulator {
    best: Option<Intersection>,
}

impl HitAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate hit.
    ///
    /// The first hit is always taken; later ones only if strictly closer.
    /// Returns whether the candidate was taken.
    pub fn offer(&mut self, hit: Intersection) -> bool {
        let accept = match &self.best {
            None => true,
            Some(best) => hit.distance < best.distance,
        };
        if accept {
            self.best = Some(hit);
        }
        accept
    }

    /// The current best hit.
    pub fn best(&self) -> Option<&Intersection> {
        self.best.as_ref()
    }

    /// Consume the accumulator, returning the best hit.
    pub fn into_best(self) -> Option<Intersection> {
        self.best
    }
}

/// Find the object in `objects` whose hit beats everything in `acc`.
///
/// Every candidate is tested in order. Returns the object whose hit ended
/// up in the accumulator, or `None` if this collection improved nothing
/// (the accumulator is then left untouched).
pub fn find_nearest<'a, T: Shadeable>(
    objects: &'a [T],
    ray: &Ray,
    acc: &mut HitAccumulator,
) -> Option<&'a T> {
    let mut nearest = None;
    for object in objects {
        if let Some(hit) = object.intersect(ray) {
            if acc.offer(hit) {
                nearest = Some(object);
            }
        }
    }
    nearest
}
