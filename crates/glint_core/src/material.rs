//! Phong-style surface materials.

use glint_math::DVec3;

use crate::scene::{SceneError, SceneResult};

/// Color type alias (linear RGB, unbounded)
pub type Color = DVec3;

/// Energy split between the local, mirror and transmitted response.
///
/// The weights are independent and are not required to sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Albedo {
    /// Weight of the diffuse + specular (local) term
    pub diffuse: f64,
    /// Weight of the mirror reflection
    pub reflective: f64,
    /// Weight of the refracted ray
    pub refractive: f64,
}

impl Albedo {
    pub fn new(diffuse: f64, reflective: f64, refractive: f64) -> Self {
        Self {
            diffuse,
            reflective,
            refractive,
        }
    }
}

impl Default for Albedo {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

/// A surface material.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name (from `newmtl`)
    pub name: String,

    /// Ambient color (`Ka`)
    pub ambient_color: Color,

    /// Diffuse color (`Kd`)
    pub diffuse_color: Color,

    /// Specular color (`Ks`)
    pub specular_color: Color,

    /// Emitted base color (`Ke`), added regardless of lighting
    pub intensity: Color,

    /// Phong exponent (`Ns`)
    pub specular_exponent: f64,

    /// Index of refraction (`Ni`)
    pub refraction_index: f64,

    /// Response weights (`al`)
    pub albedo: Albedo,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            ambient_color: Color::ZERO,
            diffuse_color: Color::ZERO,
            specular_color: Color::ZERO,
            intensity: Color::ZERO,
            specular_exponent: 1.0,
            refraction_index: 1.0,
            albedo: Albedo::default(),
        }
    }
}

impl Material {
    /// Create a new material with just a name and diffuse color.
    pub fn new(name: impl Into<String>, diffuse_color: Color) -> Self {
        Self {
            name: name.into(),
            diffuse_color,
            ..Default::default()
        }
    }

    /// Check the material can be shaded without producing NaNs.
    ///
    /// Called once when the material enters a scene so the tracing path
    /// never has to.
    pub fn validate(&self) -> SceneResult<()> {
        let invalid = |reason: &str| {
            Err(SceneError::InvalidMaterial {
                name: self.name.clone(),
                reason: reason.to_string(),
            })
        };

        if !(self.refraction_index.is_finite() && self.refraction_index > 0.0) {
            return invalid("refraction index must be finite and positive");
        }
        if !(self.specular_exponent.is_finite() && self.specular_exponent >= 0.0) {
            return invalid("specular exponent must be finite and non-negative");
        }
        let colors = [
            self.ambient_color,
            self.diffuse_color,
            self.specular_color,
            self.intensity,
        ];
        if colors.iter().any(|c| !c.is_finite() || c.min_element() < 0.0) {
            return invalid("colors must be finite and non-negative");
        }
        let Albedo {
            diffuse,
            reflective,
            refractive,
        } = self.albedo;
        if [diffuse, reflective, refractive]
            .iter()
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            return invalid("albedo weights must be finite and non-negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material_is_valid() {
        let material = Material::default();
        assert!(material.validate().is_ok());
        assert_eq!(material.albedo, Albedo::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_refraction_index_rejected() {
        let material = Material {
            name: "glass".into(),
            refraction_index: 0.0,
            ..Default::default()
        };
        match material.validate() {
            Err(SceneError::InvalidMaterial { name, .. }) => assert_eq!(name, "glass"),
            other => panic!("expected invalid material, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_albedo_rejected() {
        let material = Material {
            albedo: Albedo::new(1.0, -0.5, 0.0),
            ..Default::default()
        };
        assert!(material.validate().is_err());
    }

    #[test]
    fn test_nan_color_rejected() {
        let material = Material::new("bad", Color::new(f64::NAN, 0.0, 0.0));
        assert!(material.validate().is_err());
    }
}
