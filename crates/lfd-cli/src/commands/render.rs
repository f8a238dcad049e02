//! Ray trace the sample scene into a camera or projector stack.

use crate::RenderArgs;
use anyhow::{Context, Result, bail};
use lfd_render::{Scene, render_camera_array, render_projector_array};
use std::time::Instant;
use tracing::{info, trace};

/// Runs the render command.
pub fn run(args: RenderArgs, verbose: u8) -> Result<()> {
    trace!(output = %args.output.display(), "render::run");
    let format = super::parse_format(&args.format)?;

    let mut scene = Scene::sample();
    if let Some(depth) = args.max_depth {
        scene.set_max_depth(depth)?;
    }

    let start = Instant::now();
    let (stack, kind) = if let Some(path) = &args.projectors {
        let projectors = super::load_projectors(path)?;
        let stack = render_projector_array(&scene, &projectors)
            .with_context(|| format!("Failed to render projectors of {}", path.display()))?;
        (stack, "projector")
    } else if let Some(path) = &args.cameras {
        let cameras = super::load_cameras(path)?;
        let stack = render_camera_array(&scene, &cameras)
            .with_context(|| format!("Failed to render cameras of {}", path.display()))?;
        (stack, "camera")
    } else {
        bail!("Either --projectors or --cameras is required");
    };

    info!(
        kind,
        layers = stack.depth(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Rendered stack"
    );

    super::save_stack(&args.output, &stack, format)?;

    if verbose > 0 {
        println!(
            "Rendered {} {} images ({}x{}) -> {}",
            stack.depth(),
            kind,
            stack.width(),
            stack.height(),
            args.output.display()
        );
    }
    Ok(())
}
