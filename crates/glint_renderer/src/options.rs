//! Render options.

use serde::{Deserialize, Serialize};

/// What a pixel's color means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Distance to the visible surface in every channel
    Depth,
    /// Visible surface normal as RGB
    Normal,
    /// Ambient, diffuse, specular, shadows, reflection and refraction
    #[default]
    Full,
}

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Maximum recursion depth; 0 renders black
    pub depth: u32,
    /// Output semantics
    pub mode: RenderMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            depth: 4,
            mode: RenderMode::Full,
        }
    }
}

impl RenderOptions {
    pub fn new(depth: u32, mode: RenderMode) -> Self {
        Self { depth, mode }
    }
}
