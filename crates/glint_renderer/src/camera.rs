//! Pinhole camera for primary ray generation.

use glint_math::{DVec3, Ray};
use serde::{Deserialize, Serialize};

use crate::renderer::{RenderError, RenderResult};

/// Camera placement and image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Vertical field of view in radians
    pub fov: f64,
    pub look_from: DVec3,
    pub look_to: DVec3,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            fov: std::f64::consts::FRAC_PI_2,
            look_from: DVec3::ZERO,
            look_to: DVec3::NEG_Z,
        }
    }
}

impl CameraOptions {
    /// Check that the options describe a usable camera.
    pub fn validate(&self) -> RenderResult<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(RenderError::InvalidCamera(format!(
                "image size {}x{} is empty",
                self.screen_width, self.screen_height
            )));
        }
        if !(self.fov > 0.0 && self.fov < std::f64::consts::PI) {
            return Err(RenderError::InvalidCamera(format!(
                "field of view {} is outside (0, pi)",
                self.fov
            )));
        }
        if !self.look_from.is_finite() || !self.look_to.is_finite() {
            return Err(RenderError::InvalidCamera("non-finite position".into()));
        }
        if self.look_from == self.look_to {
            return Err(RenderError::InvalidCamera(
                "look_from and look_to coincide".into(),
            ));
        }
        Ok(())
    }
}

/// Camera with a precomputed orthonormal basis.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: DVec3,
    forward: DVec3,
    right: DVec3,
    up: DVec3,
    width: u32,
    height: u32,
    // tan(fov / 2), and the same scaled by the aspect ratio
    half_height: f64,
    half_width: f64,
}

impl Camera {
    /// Build a camera, rejecting invalid options.
    pub fn new(options: &CameraOptions) -> RenderResult<Self> {
        options.validate()?;

        let forward = (options.look_to - options.look_from).normalize();
        // Fall back to +Z as the world up when looking straight up or down
        let world_up = if forward.cross(DVec3::Y).length_squared() < 1e-12 {
            DVec3::Z
        } else {
            DVec3::Y
        };
        let right = forward.cross(world_up).normalize();
        let up = right.cross(forward);

        let aspect = options.screen_width as f64 / options.screen_height as f64;
        let half_height = (options.fov / 2.0).tan();

        Ok(Self {
            origin: options.look_from,
            forward,
            right,
            up,
            width: options.screen_width,
            height: options.screen_height,
            half_height,
            half_width: half_height * aspect,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Primary ray through the center of pixel `(row, col)`.
    ///
    /// Row 0 is the top of the image.
    pub fn make_ray(&self, row: u32, col: u32) -> Ray {
        let x = (2.0 * (col as f64 + 0.5) / self.width as f64 - 1.0) * self.half_width;
        let y = (1.0 - 2.0 * (row as f64 + 0.5) / self.height as f64) * self.half_height;
        let direction = self.forward + x * self.right + y * self.up;
        Ray::new(self.origin, direction)
    }
}
