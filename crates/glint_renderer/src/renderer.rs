//! Image render loop.

use std::path::Path;
use std::time::Instant;

use glint_core::{load_scene, Color, LoadError, Scene};
use image::RgbImage;
use thiserror::Error;

use crate::camera::{Camera, CameraOptions};
use crate::options::RenderOptions;
use crate::postprocess::post_process;
use crate::trace::ray_cast;

/// Errors that can occur while setting up a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Failed to load scene: {0}")]
    Load(#[from] LoadError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Raw per-pixel shading results, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ColorBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Trace one primary ray per pixel and return the unprocessed colors.
pub fn render_colors(scene: &Scene, camera: &Camera, options: &RenderOptions) -> ColorBuffer {
    let mut buffer = ColorBuffer::new(camera.width(), camera.height());

    log::info!(
        "Rendering {}x{} ({:?} mode, depth {}) over {} objects and {} lights",
        camera.width(),
        camera.height(),
        options.mode,
        options.depth,
        scene.object_count(),
        scene.lights().len()
    );
    let start = Instant::now();

    for row in 0..camera.height() {
        for col in 0..camera.width() {
            let ray = camera.make_ray(row, col);
            buffer.set(col, row, ray_cast(scene, &ray, options.depth, options));
        }
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    buffer
}

/// Render `scene` to an 8-bit image.
pub fn render(
    scene: &Scene,
    camera_options: &CameraOptions,
    options: &RenderOptions,
) -> RenderResult<RgbImage> {
    let camera = Camera::new(camera_options)?;
    let colors = render_colors(scene, &camera, options);
    Ok(post_process(&colors, options.mode))
}

/// Load an OBJ scene from disk and render it.
pub fn render_file<P: AsRef<Path>>(
    path: P,
    camera_options: &CameraOptions,
    options: &RenderOptions,
) -> RenderResult<RgbImage> {
    // Reject a bad camera before paying for the load
    camera_options.validate()?;
    let scene = load_scene(path)?;
    render(&scene, camera_options, options)
}
