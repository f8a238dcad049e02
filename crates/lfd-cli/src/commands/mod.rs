//! CLI command implementations

pub mod convert;
pub mod info;
pub mod models;
pub mod render;
pub mod simulate;

use anyhow::{Context, Result, bail};
use lfd_core::{LayeredImage, Vec3};
use lfd_interp::InterpolationConfig;
use lfd_io::Format;
use lfd_model::{CameraArrayModel, ProjectorArrayModel};
use std::path::Path;

/// Loads tunables, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<InterpolationConfig> {
    match path {
        Some(path) => InterpolationConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(InterpolationConfig::default()),
    }
}

/// Load projector descriptor from path
pub fn load_projectors(path: &Path) -> Result<ProjectorArrayModel> {
    ProjectorArrayModel::load(path)
        .with_context(|| format!("Failed to load projector model: {}", path.display()))
}

/// Load camera descriptor from path
pub fn load_cameras(path: &Path) -> Result<CameraArrayModel> {
    CameraArrayModel::load(path)
        .with_context(|| format!("Failed to load camera model: {}", path.display()))
}

/// Load `count` layers from a stack directory
pub fn load_stack(dir: &Path, count: usize, format: Format) -> Result<LayeredImage> {
    lfd_io::load_stack(dir, count, format)
        .with_context(|| format!("Failed to load stack: {}", dir.display()))
}

/// Save every layer to a stack directory
pub fn save_stack(dir: &Path, stack: &LayeredImage, format: Format) -> Result<()> {
    lfd_io::save_stack(stack, dir, format)
        .with_context(|| format!("Failed to save stack: {}", dir.display()))
}

/// Parses a layer format name.
pub fn parse_format(name: &str) -> Result<Format> {
    match Format::from_name(name) {
        Format::Unknown => bail!("Unknown layer format '{}' (expected exr or ppm)", name),
        format => Ok(format),
    }
}

/// Parses `x,y,z`.
pub fn parse_vec3(text: &str) -> Result<Vec3> {
    let parts: Vec<f32> = text
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("Invalid position '{}'", text))?;
    match parts[..] {
        [x, y, z] => Ok(Vec3::new(x, y, z)),
        _ => bail!("Position '{}' must have 3 components, got {}", text, parts.len()),
    }
}
