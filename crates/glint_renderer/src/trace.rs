//! The recursive ray cast.

use glint_core::{Color, Scene};
use glint_math::Ray;

use crate::options::RenderOptions;
use crate::query::{find_nearest, HitAccumulator, Shadeable};
use crate::shading::shade;

/// Compute the color seen along `ray` with `depth` levels of recursion left.
///
/// Returns black when the depth is exhausted or the ray escapes the scene.
/// Triangles are queried before spheres, so a sphere is only visible where
/// it is strictly closer than every triangle.
pub fn ray_cast(scene: &Scene, ray: &Ray, depth: u32, options: &RenderOptions) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let mut nearest = HitAccumulator::new();
    let triangle = find_nearest(scene.triangles(), ray, &mut nearest);
    let sphere = find_nearest(scene.spheres(), ray, &mut nearest);

    let Some(mut hit) = nearest.into_best() else {
        // Nothing hit - background is visible
        return Color::ZERO;
    };

    if let Some(sphere) = sphere {
        shade(scene, ray, depth, options, &hit, sphere)
    } else if let Some(triangle) = triangle {
        triangle.orient_normal(ray, &mut hit);
        shade(scene, ray, depth, options, &hit, triangle)
    } else {
        Color::ZERO
    }
}
