//! Numbered layer directories.
//!
//! A stack of depth `D` is stored as `D` files named by zero-padded 4-digit
//! layer id:
//!
//! ```text
//! out/0000.exr
//! out/0001.exr
//! ...
//! ```
//!
//! ```rust
//! use lfd_io::{stack::layer_path, Format};
//!
//! let path = layer_path("out", 7, Format::Ppm);
//! assert!(path.ends_with("0007.ppm"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use lfd_core::{Image, LayeredImage};
use tracing::{debug, trace, warn};

use crate::{Format, IoError, IoResult};

/// Path of layer `id` inside `dir`.
pub fn layer_path<P: AsRef<Path>>(dir: P, id: usize, format: Format) -> PathBuf {
    dir.as_ref().join(format!("{:04}.{}", id, format.extension()))
}

/// Number of consecutive layer files `0000`, `0001`, ... present in `dir`.
pub fn detect_depth<P: AsRef<Path>>(dir: P, format: Format) -> usize {
    let dir = dir.as_ref();
    (0..).take_while(|&id| layer_path(dir, id, format).is_file()).count()
}

/// Reads `count` layers from `dir`.
///
/// # Errors
///
/// Fails if `count` is zero, if any layer is missing or unreadable, or if
/// layers disagree on resolution.
pub fn load_stack<P: AsRef<Path>>(dir: P, count: usize, format: Format) -> IoResult<LayeredImage> {
    let dir = dir.as_ref();
    check_format(format)?;
    if count == 0 {
        return Err(IoError::MissingData(format!(
            "no layers requested from {}",
            dir.display()
        )));
    }

    let mut layers: Vec<Image> = Vec::with_capacity(count);
    for id in 0..count {
        let path = layer_path(dir, id, format);
        trace!(path = %path.display(), "reading layer");
        let layer = crate::read_as(&path, format)?;
        if let Some(first) = layers.first() {
            if first.dimensions() != layer.dimensions() {
                return Err(IoError::DimensionMismatch {
                    expected: format!("{}x{}", first.width(), first.height()),
                    actual: format!("{}x{} in {}", layer.width(), layer.height(), path.display()),
                });
            }
        }
        layers.push(layer);
    }

    let stack = LayeredImage::from_layers(layers)?;
    debug!(
        dir = %dir.display(),
        width = stack.width(),
        height = stack.height(),
        depth = stack.depth(),
        "loaded stack"
    );
    Ok(stack)
}

/// Replaces `stack` with `count` layers read from `dir`.
///
/// On failure the stack is left empty (depth 0), never partially loaded.
pub fn load_stack_into<P: AsRef<Path>>(
    stack: &mut LayeredImage,
    dir: P,
    count: usize,
    format: Format,
) -> IoResult<()> {
    match load_stack(dir.as_ref(), count, format) {
        Ok(loaded) => {
            *stack = loaded;
            Ok(())
        }
        Err(e) => {
            warn!(dir = %dir.as_ref().display(), error = %e, "stack load failed");
            stack.clear();
            Err(e)
        }
    }
}

/// Writes every layer of `stack` to `dir`, creating the directory if needed.
///
/// Files are written in id order; a failure stops at the failing layer.
pub fn save_stack<P: AsRef<Path>>(stack: &LayeredImage, dir: P, format: Format) -> IoResult<()> {
    let dir = dir.as_ref();
    check_format(format)?;
    if stack.is_empty() {
        return Err(IoError::MissingData(format!(
            "no layers to write to {}",
            dir.display()
        )));
    }

    fs::create_dir_all(dir)?;
    for (id, layer) in stack.layers().iter().enumerate() {
        let path = layer_path(dir, id, format);
        trace!(path = %path.display(), "writing layer");
        crate::write_as(&path, layer, format)?;
    }
    debug!(dir = %dir.display(), depth = stack.depth(), "saved stack");
    Ok(())
}

fn check_format(format: Format) -> IoResult<()> {
    match format {
        Format::Unknown => Err(IoError::UnsupportedFormat("unknown layer format".into())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_path_padding() {
        assert_eq!(layer_path("d", 0, Format::Exr), PathBuf::from("d/0000.exr"));
        assert_eq!(layer_path("d", 42, Format::Ppm), PathBuf::from("d/0042.ppm"));
        assert_eq!(layer_path("d", 12345, Format::Exr), PathBuf::from("d/12345.exr"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let stack = LayeredImage::new(1, 1, 1);
        let err = save_stack(&stack, "unused", Format::Unknown).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_zero_count_rejected() {
        let err = load_stack("unused", 0, Format::Exr).unwrap_err();
        assert!(matches!(err, IoError::MissingData(_)));
    }

    #[test]
    fn test_empty_stack_rejected() {
        let err = save_stack(&LayeredImage::default(), "unused", Format::Ppm).unwrap_err();
        assert!(matches!(err, IoError::MissingData(_)));
    }
}
