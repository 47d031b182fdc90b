//! Glint math - vectors, rays and the geometric primitives the tracer hits.
//!
//! Everything is double precision. The tracer compares hit positions
//! against absolute tolerances, which single precision cannot resolve
//! once a scene is a few units across.

// Re-export glam for convenience
pub use glam::*;

mod intersection;
mod optics;
mod ray;
mod sphere;
mod triangle;

pub use intersection::Intersection;
pub use optics::{reflect, refract};
pub use ray::Ray;
pub use sphere::Sphere;
pub use triangle::Triangle;
