//! Perceived-view simulation of a projector stack.

use crate::SimulateArgs;
use anyhow::{Context, Result, bail};
use lfd_interp::{InterpolationConfig, simulate_camera_array, simulate_view};
use lfd_model::DisplayModel;
use std::time::Instant;
use tracing::{info, trace};

/// Runs the simulate command.
///
/// With `--observer` a single image is written to `--output`; with
/// `--cameras` one image per camera goes to the `--output` directory.
pub fn run(args: SimulateArgs, config: &InterpolationConfig, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "simulate::run");
    let format = super::parse_format(&args.format)?;
    let normalize = !args.no_normalize;

    let projectors = super::load_projectors(&args.projectors)?;
    projectors.validate().context("Invalid projector model")?;
    let stack = super::load_stack(&args.input, projectors.num_projectors, format)?;

    let start = Instant::now();
    if let Some(observer) = &args.observer {
        let observer = super::parse_vec3(observer)?;
        let image = simulate_view(&stack, &projectors, observer, normalize, config)
            .context("Simulation failed")?;
        lfd_io::write(&args.output, &image)
            .with_context(|| format!("Failed to save: {}", args.output.display()))?;

        info!(
            x = observer.x,
            y = observer.y,
            z = observer.z,
            normalize,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Simulated observer view"
        );
        if verbose > 0 {
            println!(
                "Observer ({}, {}, {}) -> {}",
                observer.x,
                observer.y,
                observer.z,
                args.output.display()
            );
        }
    } else if let Some(path) = &args.cameras {
        let cameras = super::load_cameras(path)?;
        let views = simulate_camera_array(&stack, &projectors, &cameras, normalize, config)
            .context("Simulation failed")?;
        super::save_stack(&args.output, &views, format)?;

        info!(
            views = views.depth(),
            normalize,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Simulated camera positions"
        );
        if verbose > 0 {
            println!("Simulated {} views -> {}", views.depth(), args.output.display());
        }
    } else {
        bail!("Either --observer or --cameras is required");
    }
    Ok(())
}
