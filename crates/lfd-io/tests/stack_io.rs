//! Stack directories on disk.

use lfd_core::{Color, Image, LayeredImage};
use lfd_io::stack::{detect_depth, layer_path};
use lfd_io::{Format, IoError, load_stack, load_stack_into, save_stack};
use tempfile::TempDir;

fn gradient_stack(width: usize, height: usize, depth: usize) -> LayeredImage {
    let mut stack = LayeredImage::new(width, height, depth);
    for (z, layer) in stack.layers_mut().iter_mut().enumerate() {
        for y in 0..height {
            for x in 0..width {
                layer.set(
                    x as i64,
                    y as i64,
                    Color::new(x as f32 / width as f32, y as f32 * 2.0, z as f32 - 1.5),
                );
            }
        }
    }
    stack
}

#[test]
fn test_exr_stack_roundtrip() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nested/views");
    let stack = gradient_stack(9, 4, 3);

    save_stack(&stack, &out, Format::Exr).unwrap();
    assert!(out.join("0000.exr").is_file());
    assert!(out.join("0002.exr").is_file());
    assert_eq!(detect_depth(&out, Format::Exr), 3);

    let loaded = load_stack(&out, 3, Format::Exr).unwrap();
    assert_eq!(loaded, stack);
}

#[test]
fn test_ppm_stack_is_clamped() {
    let dir = TempDir::new().unwrap();
    let stack = gradient_stack(4, 2, 2);
    save_stack(&stack, dir.path(), Format::Ppm).unwrap();

    let loaded = load_stack(dir.path(), 2, Format::Ppm).unwrap();
    assert_eq!(loaded.depth(), 2);
    for layer in loaded.layers() {
        for c in layer.data() {
            assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
        }
    }
    // Layer 0 has blue = -1.5, layer 1 has -0.5: both clamp to 0
    assert_eq!(loaded.at(0, 0, 0).z, 0.0);
    assert_eq!(loaded.at(0, 1, 1).y, 1.0);
}

#[test]
fn test_partial_load_reads_prefix() {
    let dir = TempDir::new().unwrap();
    save_stack(&gradient_stack(3, 3, 4), dir.path(), Format::Exr).unwrap();
    let loaded = load_stack(dir.path(), 2, Format::Exr).unwrap();
    assert_eq!(loaded.depth(), 2);
}

#[test]
fn test_missing_layer_fails() {
    let dir = TempDir::new().unwrap();
    save_stack(&gradient_stack(3, 3, 2), dir.path(), Format::Exr).unwrap();
    let err = load_stack(dir.path(), 3, Format::Exr).unwrap_err();
    assert!(matches!(err, IoError::DecodeError(_) | IoError::Io(_)));
}

#[test]
fn test_mixed_sizes_clear_stack() {
    let dir = TempDir::new().unwrap();
    for id in 0..5 {
        let width = if id == 3 { 8 } else { 6 };
        lfd_io::write(
            layer_path(dir.path(), id, Format::Exr),
            &Image::filled(width, 4, Color::splat(0.25)),
        )
        .unwrap();
    }

    let mut stack = gradient_stack(2, 2, 7);
    let err = load_stack_into(&mut stack, dir.path(), 5, Format::Exr).unwrap_err();
    assert!(matches!(err, IoError::DimensionMismatch { .. }));
    assert_eq!(stack.depth(), 0);
    assert!(stack.is_empty());
}

#[test]
fn test_load_into_replaces_on_success() {
    let dir = TempDir::new().unwrap();
    let source = gradient_stack(5, 3, 2);
    save_stack(&source, dir.path(), Format::Exr).unwrap();

    let mut stack = gradient_stack(2, 2, 7);
    load_stack_into(&mut stack, dir.path(), 2, Format::Exr).unwrap();
    assert_eq!(stack, source);
}

#[test]
fn test_extension_dispatch() {
    let dir = TempDir::new().unwrap();
    let image = Image::filled(2, 2, Color::new(1.0, 0.0, 0.0));

    lfd_io::write(dir.path().join("a.PPM"), &image).unwrap();
    assert_eq!(lfd_io::read(dir.path().join("a.PPM")).unwrap(), image);

    let err = lfd_io::write(dir.path().join("a.png"), &image).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat(_)));
}
