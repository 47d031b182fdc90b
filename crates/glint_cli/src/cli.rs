//! Command line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_math::DVec3;
use glint_renderer::RenderMode;
use log::LevelFilter;

/// Log levels selectable with `--log-level`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// `--mode` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Depth,
    Normal,
    Full,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Depth => RenderMode::Depth,
            ModeArg::Normal => RenderMode::Normal,
            ModeArg::Full => RenderMode::Full,
        }
    }
}

/// Render an OBJ scene with the Glint ray tracer
#[derive(Debug, Parser)]
#[command(name = "glint", version)]
#[command(about = "Recursive Whitted-style ray tracer")]
pub struct Args {
    /// Scene to render (.obj, materials from its mtllib)
    pub scene: PathBuf,

    /// Output image (format from the extension)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// JSON render job with camera and render settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    pub fov: Option<f64>,

    /// Camera position as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub from: Option<DVec3>,

    /// Point the camera looks at, as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub to: Option<DVec3>,

    /// Maximum recursion depth
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// What the output encodes
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Parse `x,y,z` into a vector.
pub fn parse_vec3(s: &str) -> Result<DVec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got '{}'", s));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("'{}' is not a number", part))?;
    }
    Ok(DVec3::from_array(out))
}
