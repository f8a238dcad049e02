//! Descriptor, image and stack information.

use crate::InfoArgs;
use anyhow::{Context, Result, bail};
use lfd_core::Image;
use lfd_io::stack::detect_depth;
use lfd_model::{CameraArrayModel, DisplayModel, ProjectorArrayModel};
use std::fs;
use std::path::Path;
use tracing::trace;

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    let format = super::parse_format(&args.format)?;

    for path in &args.input {
        trace!(path = %path.display(), "info::run");

        if path.is_dir() {
            print_stack(path, format, verbose)?;
        } else if is_json(path) {
            print_model(path, verbose)?;
        } else {
            let image = lfd_io::read(path)
                .with_context(|| format!("Failed to load: {}", path.display()))?;
            println!("{}", path.display());
            print_image(&image, verbose);
        }

        if args.input.len() > 1 {
            println!();
        }
    }
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn print_model(path: &Path, verbose: u8) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;

    // Descriptor kind is told apart by its count field
    if let Ok(model) = ProjectorArrayModel::from_json_str(&text) {
        println!("{}", path.display());
        println!("  Kind:        projector array");
        print_common(&model, verbose);
        println!("  Observer:    {}", model.observer_distance);
        println!("  Scattering:  {:.6} rad", model.angular_scattering);
        return Ok(());
    }
    match CameraArrayModel::from_json_str(&text) {
        Ok(model) => {
            println!("{}", path.display());
            println!("  Kind:        camera array");
            print_common(&model, verbose);
            Ok(())
        }
        Err(e) => bail!("{} is not a display descriptor: {}", path.display(), e),
    }
}

fn print_common(model: &dyn DisplayModel, verbose: u8) {
    let (width, height) = model.image_size();
    let screen = model.screen_size();
    println!("  Name:        {}", model.name());
    println!("  Views:       {}", model.view_count());
    println!("  Resolution:  {}x{}", width, height);
    println!("  Screen:      {}x{}", screen.x, screen.y);
    match model.validate() {
        Ok(()) => println!("  Valid:       yes"),
        Err(e) => println!("  Valid:       no ({})", e),
    }
    if verbose > 0 {
        let views = model.view_array();
        for (id, p) in views.positions().iter().enumerate() {
            println!("    [{:>3}] ({}, {}, {})", id, p.x, p.y, p.z);
        }
    }
}

fn print_stack(dir: &Path, format: lfd_io::Format, verbose: u8) -> Result<()> {
    let depth = detect_depth(dir, format);
    println!("{}", dir.display());
    println!("  Layers:      {} ({})", depth, format.extension());
    if depth == 0 {
        return Ok(());
    }
    let stack = super::load_stack(dir, depth, format)?;
    println!("  Resolution:  {}x{}", stack.width(), stack.height());
    if verbose > 0 {
        for (id, layer) in stack.layers().iter().enumerate() {
            let (min, max, avg) = compute_stats(layer);
            println!("    [{:>4}] min {:.4}  max {:.4}  avg {:.4}", id, min, max, avg);
        }
    }
    Ok(())
}

fn print_image(image: &Image, verbose: u8) {
    println!("  Resolution:  {}x{}", image.width(), image.height());
    println!("  Pixels:      {}", image.width() as u64 * image.height() as u64);
    let (min, max, avg) = compute_stats(image);
    println!("  Min value:   {:.6}", min);
    println!("  Max value:   {:.6}", max);
    println!("  Avg value:   {:.6}", avg);
    if verbose > 0 {
        let center = image.at(image.width() as i64 / 2, image.height() as i64 / 2);
        println!("  Center:      ({:.4}, {:.4}, {:.4})", center.x, center.y, center.z);
    }
}

/// Min, max and mean over every channel.
fn compute_stats(image: &Image) -> (f32, f32, f32) {
    if image.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    let mut sum = 0.0f64;
    for c in image.data() {
        min = min.min(c.min_element());
        max = max.max(c.max_element());
        sum += c.element_sum() as f64;
    }
    (min, max, (sum / (image.data().len() * 3) as f64) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lfd_core::Color;

    #[test]
    fn test_stats() {
        let image = Image::from_data(2, 1, vec![Color::new(0.0, 1.0, 2.0), Color::splat(-1.0)]).unwrap();
        let (min, max, avg) = compute_stats(&image);
        assert_eq!(min, -1.0);
        assert_eq!(max, 2.0);
        assert_eq!(avg, 0.0);
    }

    #[test]
    fn test_json_detection() {
        assert!(is_json(Path::new("a/b.JSON")));
        assert!(!is_json(Path::new("a/b.exr")));
    }
}
