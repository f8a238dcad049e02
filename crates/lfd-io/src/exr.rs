//! OpenEXR layer support.
//!
//! Layers are stored as 32-bit float RGB so values outside `[0, 1]` survive
//! a write/read cycle unchanged. Alpha, when present on read, is dropped.

use crate::{IoError, IoResult};
use lfd_core::Color;
use std::path::Path;

/// Reads the first RGB(A) layer of an EXR file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<lfd_core::Image> {
    use exr::prelude::*;

    let path = path.as_ref();

    let image = read_first_rgba_layer_from_file(
        path,
        |resolution, _| {
            let width = resolution.width();
            let size = width * resolution.height();
            (width, vec![Color::ZERO; size])
        },
        |(width, buffer), position, (r, g, b, _a): (f32, f32, f32, f32)| {
            let idx = position.y() * *width + position.x();
            if idx < buffer.len() {
                buffer[idx] = Color::new(r, g, b);
            }
        },
    )
    .map_err(|e| IoError::DecodeError(format!("{}: {}", path.display(), e)))?;

    let width = image.layer_data.size.width();
    let height = image.layer_data.size.height();
    let (_, pixels) = image.layer_data.channel_data.pixels;

    Ok(lfd_core::Image::from_data(width, height, pixels)?)
}

/// Writes an image as a single-layer float RGB EXR file.
pub fn write<P: AsRef<Path>>(path: P, image: &lfd_core::Image) -> IoResult<()> {
    use exr::prelude::*;

    let path = path.as_ref();
    if image.is_empty() {
        return Err(IoError::EncodeError(format!(
            "{}: cannot write an empty image",
            path.display()
        )));
    }

    let width = image.width();
    let pixels = image.data();

    let layer = Layer::new(
        (width, image.height()),
        LayerAttributes::named("RGB"),
        Encoding::SMALL_LOSSLESS,
        SpecificChannels::rgb(|pos: Vec2<usize>| {
            let c = pixels[pos.y() * width + pos.x()];
            (c.x, c.y, c.z)
        }),
    );

    Image::from_layer(layer)
        .write()
        .to_file(path)
        .map_err(|e| IoError::EncodeError(format!("{}: {}", path.display(), e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_roundtrip_keeps_hdr_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("0000.exr");

        let mut image = lfd_core::Image::new(7, 5);
        for y in 0..5 {
            for x in 0..7 {
                image.set(x, y, Color::new(x as f32 * 0.5, -(y as f32), 3.25));
            }
        }

        write(&path, &image).unwrap();
        let loaded = read(&path).unwrap();

        assert_eq!(loaded.dimensions(), (7, 5));
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_empty_image_rejected() {
        let dir = TempDir::new().unwrap();
        let err = write(dir.path().join("e.exr"), &lfd_core::Image::default()).unwrap_err();
        assert!(matches!(err, IoError::EncodeError(_)));
    }

    #[test]
    fn test_garbage_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.exr");
        std::fs::write(&path, b"not an exr").unwrap();
        assert!(matches!(read(&path), Err(IoError::DecodeError(_))));
    }
}
