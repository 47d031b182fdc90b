//! Mirror reflection and Snell refraction.

use crate::DVec3;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `uv` through a surface with unit normal `n`
/// facing against it, using the relative index `eta` (incident over
/// transmitted).
///
/// Returns `None` on total internal reflection.
pub fn refract(uv: DVec3, n: DVec3, eta: f64) -> Option<DVec3> {
    let cos_i = (-uv).dot(n).min(1.0);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }
    Some(eta * uv + (eta * cos_i - k.sqrt()) * n)
}
