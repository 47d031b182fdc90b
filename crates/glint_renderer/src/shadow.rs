//! Hard shadows from point lights.

use glint_core::{Light, Scene};
use glint_math::{DVec3, Ray};

use crate::query::{find_nearest, HitAccumulator};

/// How far the first surface seen from a light may be from the shaded
/// point and still count as the point itself.
pub const SHADOW_TOLERANCE: f64 = 1e-6;

/// Check whether `point` is hidden from `light` by some other surface.
///
/// Casts a ray from the light towards the point and looks at the first
/// surface it meets. If that surface is the point itself the light gets
/// through. A ray that meets nothing at all (possible only through
/// rounding at grazing angles) leaves the point lit.
pub fn is_in_shadow(scene: &Scene, light: &Light, point: DVec3) -> bool {
    let to_point = point - light.position;
    if to_point.length_squared() == 0.0 {
        return false;
    }
    let light_ray = Ray::new(light.position, to_point);

    let mut nearest = HitAccumulator::new();
    find_nearest(scene.triangles(), &light_ray, &mut nearest);
    find_nearest(scene.spheres(), &light_ray, &mut nearest);

    match nearest.best() {
        Some(hit) => hit.position.distance(point) > SHADOW_TOLERANCE,
        None => false,
    }
}
