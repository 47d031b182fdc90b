//! Render job files.
//!
//! A job bundles camera and render settings so a scene can be re-rendered
//! the same way. Every field is optional in the JSON; flags given on the
//! command line win over the file.

use std::path::Path;

use anyhow::{Context, Result};
use glint_renderer::{CameraOptions, RenderOptions};
use serde::{Deserialize, Serialize};

use crate::cli::Args;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderJob {
    pub camera: CameraOptions,
    pub render: RenderOptions,
}

impl RenderJob {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid render job")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("In {}", path.display()))
    }

    /// Overwrite settings with whatever was given on the command line.
    pub fn apply_args(&mut self, args: &Args) {
        let camera = &mut self.camera;
        if let Some(width) = args.width {
            camera.screen_width = width;
        }
        if let Some(height) = args.height {
            camera.screen_height = height;
        }
        if let Some(fov) = args.fov {
            camera.fov = fov.to_radians();
        }
        if let Some(from) = args.from {
            camera.look_from = from;
        }
        if let Some(to) = args.to {
            camera.look_to = to;
        }
        if let Some(depth) = args.depth {
            self.render.depth = depth;
        }
        if let Some(mode) = args.mode {
            self.render.mode = mode.into();
        }
    }
}
