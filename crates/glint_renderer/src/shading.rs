//! Surface shading: Phong lighting plus recursive reflection and refraction.

use glint_core::{Color, Scene};
use glint_math::{reflect, refract, Intersection, Ray};

use crate::options::{RenderMode, RenderOptions};
use crate::query::Shadeable;
use crate::shadow::is_in_shadow;
use crate::trace::ray_cast;

/// Offset applied to secondary ray origins so they do not immediately
/// re-hit the surface they leave.
pub const SELF_INTERSECTION_EPSILON: f64 = 1e-5;

/// Compute the color leaving `hit` towards the viewer.
///
/// `depth` is the remaining depth of the cast that found the hit;
/// reflected and refracted rays are traced with `depth - 1`.
pub fn shade<T: Shadeable + ?Sized>(
    scene: &Scene,
    view_ray: &Ray,
    depth: u32,
    options: &RenderOptions,
    hit: &Intersection,
    object: &T,
) -> Color {
    match options.mode {
        RenderMode::Depth => Color::splat(hit.distance),
        RenderMode::Normal => hit.normal,
        RenderMode::Full => shade_full(scene, view_ray, depth, options, hit, object),
    }
}

fn shade_full<T: Shadeable + ?Sized>(
    scene: &Scene,
    view_ray: &Ray,
    depth: u32,
    options: &RenderOptions,
    hit: &Intersection,
    object: &T,
) -> Color {
    let material = object.material();
    let albedo = material.albedo;
    let base = material.intensity + material.ambient_color;

    // Local lighting
    let mut diffuse = Color::ZERO;
    let mut specular = Color::ZERO;
    for light in scene.lights() {
        if is_in_shadow(scene, light, hit.position) {
            continue;
        }
        let light_dir = (hit.position - light.position).normalize_or_zero();

        let l_d = (-light_dir).dot(hit.normal).max(0.0);
        let l_s = (-view_ray.direction())
            .dot(reflect(light_dir, hit.normal))
            .max(0.0)
            .powf(material.specular_exponent);

        diffuse += l_d * light.intensity * material.diffuse_color;
        specular += l_s * light.intensity * material.specular_color;
    }

    let depth = depth.saturating_sub(1);
    let inside = object.is_inside(view_ray, hit);

    // Refraction. Leaving the object is not attenuated again.
    let mut refracted = Color::ZERO;
    if albedo.refractive > 0.0 {
        let eta = 1.0 / material.refraction_index;
        if let Some(direction) = refract(view_ray.direction(), hit.normal, eta) {
            let direction = direction.normalize();
            let origin = hit.position + SELF_INTERSECTION_EPSILON * direction;
            refracted = ray_cast(scene, &Ray::new(origin, direction), depth, options);
            if !inside {
                refracted *= albedo.refractive;
            }
        }
    }

    // Reflection, only off the outside of a surface
    let mut reflected = Color::ZERO;
    if albedo.reflective > 0.0 && !inside {
        let direction = reflect(view_ray.direction(), hit.normal).normalize();
        let origin = hit.position + SELF_INTERSECTION_EPSILON * hit.normal;
        reflected = ray_cast(scene, &Ray::new(origin, direction), depth, options);
    }

    base + albedo.diffuse * (diffuse + specular) + albedo.reflective * reflected + refracted
}
