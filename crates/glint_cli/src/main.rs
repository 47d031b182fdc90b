mod cli;
mod job;
mod logger;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Args;
use glint_renderer::render;
use job::RenderJob;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let mut job = match &args.config {
        Some(path) => RenderJob::load(path)?,
        None => RenderJob::default(),
    };
    job.apply_args(&args);
    log::debug!("Render job: {:?}", job);

    let scene = glint_core::load_scene(&args.scene)
        .with_context(|| format!("Failed to load {}", args.scene.display()))?;

    let image = render(&scene, &job.camera, &job.render)?;

    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Wrote {}", args.output.display());

    Ok(())
}
