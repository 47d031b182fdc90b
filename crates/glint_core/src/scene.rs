//! Scene container for the tracer.
//!
//! A scene holds triangles and spheres in separate ordered collections,
//! because the tracer resolves the two kinds in a fixed priority order,
//! plus the point lights. Everything that enters a scene is validated
//! here, so a finished scene can be traced without error checks.

use std::sync::Arc;

use glint_math::{DVec3, Triangle};
use thiserror::Error;

use crate::material::{Color, Material};
use crate::object::{SphereObject, TriangleObject};

/// Errors raised while assembling a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Invalid material '{name}': {reason}")]
    InvalidMaterial { name: String, reason: String },

    #[error("Invalid sphere at {center}: radius {radius}")]
    InvalidSphere { center: DVec3, radius: f64 },

    #[error("Invalid light at {position}: {reason}")]
    InvalidLight { position: DVec3, reason: String },

    #[error("Non-finite triangle vertex")]
    InvalidTriangle,
}

/// Result type for scene assembly.
pub type SceneResult<T> = Result<T, SceneError>;

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: DVec3,
    pub intensity: Color,
}

impl Light {
    pub fn new(position: DVec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// A complete, read-only-at-render-time scene.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    triangles: Vec<TriangleObject>,
    spheres: Vec<SphereObject>,
    lights: Vec<Light>,
    materials: Vec<Arc<Material>>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a material and register it with the scene.
    pub fn add_material(&mut self, material: Material) -> SceneResult<Arc<Material>> {
        material.validate()?;
        let material = Arc::new(material);
        self.materials.push(Arc::clone(&material));
        Ok(material)
    }

    /// Add a triangle object.
    pub fn add_triangle(&mut self, object: TriangleObject) -> SceneResult<()> {
        object.material.validate()?;
        if object.triangle.vertices().iter().any(|v| !v.is_finite()) {
            return Err(SceneError::InvalidTriangle);
        }
        if object.triangle.is_degenerate() {
            log::warn!(
                "Degenerate triangle {:?} can never be hit",
                object.triangle.vertices()
            );
        }
        self.triangles.push(object);
        Ok(())
    }

    /// Add a sphere object.
    pub fn add_sphere(&mut self, object: SphereObject) -> SceneResult<()> {
        object.material.validate()?;
        let (center, radius) = (object.sphere.center(), object.sphere.radius());
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::InvalidSphere { center, radius });
        }
        self.spheres.push(object);
        Ok(())
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: Light) -> SceneResult<()> {
        if !light.position.is_finite() {
            return Err(SceneError::InvalidLight {
                position: light.position,
                reason: "position must be finite".into(),
            });
        }
        if !light.intensity.is_finite() || light.intensity.min_element() < 0.0 {
            return Err(SceneError::InvalidLight {
                position: light.position,
                reason: "intensity must be finite and non-negative".into(),
            });
        }
        self.lights.push(light);
        Ok(())
    }

    /// Convenience: add a flat-shaded triangle with the given material.
    pub fn add_flat_triangle(
        &mut self,
        vertices: [DVec3; 3],
        material: &Arc<Material>,
    ) -> SceneResult<()> {
        let [v0, v1, v2] = vertices;
        self.add_triangle(TriangleObject::new(
            Triangle::new(v0, v1, v2),
            Arc::clone(material),
        ))
    }

    /// Triangle-like objects, in load order.
    pub fn triangles(&self) -> &[TriangleObject] {
        &self.triangles
    }

    /// Sphere-like objects, in load order.
    pub fn spheres(&self) -> &[SphereObject] {
        &self.spheres
    }

    /// Point lights, in load order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Materials registered through [`Scene::add_material`].
    pub fn materials(&self) -> &[Arc<Material>] {
        &self.materials
    }

    /// Total number of renderable objects.
    pub fn object_count(&self) -> usize {
        self.triangles.len() + self.spheres.len()
    }
}
