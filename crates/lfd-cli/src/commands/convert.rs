//! Stack conversion between camera and projector arrays.

use crate::{ConvertArgs, Direction};
use anyhow::{Context, Result};
use lfd_interp::{InterpolationConfig, LightFieldInterpolation};
use std::time::Instant;
use tracing::{debug, info, trace};

/// Runs the convert command.
pub fn run(args: ConvertArgs, config: &InterpolationConfig, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "convert::run");
    let format = super::parse_format(&args.format)?;

    let projectors = super::load_projectors(&args.projectors)?;
    let cameras = super::load_cameras(&args.cameras)?;
    let engine = LightFieldInterpolation::with_config(projectors, cameras, *config)
        .context("Invalid display models")?;
    engine
        .check_compatible()
        .context("Projector and camera models cannot be converted")?;

    let input_depth = match args.direction {
        Direction::ViewsToProjectors => engine.camera_model().num_cameras,
        Direction::ProjectorsToViews => engine.projector_model().num_projectors,
    };
    debug!(depth = input_depth, direction = ?args.direction, "Loading input stack");
    let input = super::load_stack(&args.input, input_depth, format)?;

    let start = Instant::now();
    let output = match args.direction {
        Direction::ViewsToProjectors => engine.convert_views_to_projectors(&input),
        Direction::ProjectorsToViews => engine.convert_projectors_to_views(&input),
    }
    .context("Conversion failed")?;

    info!(
        direction = ?args.direction,
        from = input.depth(),
        to = output.depth(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Converted stack"
    );

    super::save_stack(&args.output, &output, format)?;

    if verbose > 0 {
        println!(
            "Converted {} -> {} layers: {} -> {}",
            input.depth(),
            output.depth(),
            args.input.display(),
            args.output.display()
        );
    }
    Ok(())
}
