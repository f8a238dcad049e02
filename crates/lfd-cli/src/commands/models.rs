//! Sample descriptor generation.
//!
//! Writes the reference 21-projector display and 21-camera array.

use crate::ModelsArgs;
use anyhow::{Context, Result};
use lfd_model::{CameraArrayModel, ProjectorArrayModel};
use std::fs;
use tracing::{info, trace};

/// File name of the sample projector descriptor.
pub const PROJECTORS_FILE: &str = "projectors.json";
/// File name of the sample camera descriptor.
pub const CAMERAS_FILE: &str = "cameras.json";

/// Runs the models command.
pub fn run(args: ModelsArgs, verbose: u8) -> Result<()> {
    trace!(out_dir = %args.out_dir.display(), "models::run");

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let projectors = ProjectorArrayModel::sample();
    let cameras = CameraArrayModel::sample();

    let projectors_path = args.out_dir.join(PROJECTORS_FILE);
    let cameras_path = args.out_dir.join(CAMERAS_FILE);
    projectors
        .save(&projectors_path)
        .with_context(|| format!("Failed to save: {}", projectors_path.display()))?;
    cameras
        .save(&cameras_path)
        .with_context(|| format!("Failed to save: {}", cameras_path.display()))?;

    info!(dir = %args.out_dir.display(), "Wrote sample descriptors");

    if verbose > 0 {
        println!(
            "{}: {} projectors, scattering {:.6} rad",
            projectors_path.display(),
            projectors.num_projectors,
            projectors.angular_scattering
        );
        println!("{}: {} cameras", cameras_path.display(), cameras.num_cameras);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_loadable_samples() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("nested/models");
        run(ModelsArgs { out_dir: out_dir.clone() }, 0).unwrap();

        let projectors = ProjectorArrayModel::load(out_dir.join(PROJECTORS_FILE)).unwrap();
        let cameras = CameraArrayModel::load(out_dir.join(CAMERAS_FILE)).unwrap();
        assert_eq!(projectors, ProjectorArrayModel::sample());
        assert_eq!(cameras, CameraArrayModel::sample());
    }
}
