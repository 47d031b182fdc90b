//! Glint renderer - recursive Whitted-style ray tracing.
//!
//! One primary ray per pixel, nearest-hit search over the scene's
//! triangles and spheres, Phong lighting with hard shadows, and mirror
//! reflection and refraction recursion bounded by a depth budget.

mod camera;
mod options;
mod postprocess;
mod query;
mod renderer;
mod shading;
mod shadow;
mod trace;

pub use camera::{Camera, CameraOptions};
pub use options::{RenderMode, RenderOptions};
pub use postprocess::{color_to_rgb, post_process};
pub use query::{find_nearest, HitAccumulator, Shadeable};
pub use renderer::{render, render_colors, render_file, ColorBuffer, RenderError, RenderResult};
pub use shading::{shade, SELF_INTERSECTION_EPSILON};
pub use shadow::{is_in_shadow, SHADOW_TOLERANCE};
pub use trace::ray_cast;

/// Re-export scene and math types used in the public API
pub use glint_core::{Color, Light, Material, Scene};
pub use glint_math::{DVec3, Intersection, Ray};
