//! # lfd-io
//!
//! Layer I/O for light-field display stacks.
//!
//! A view or projector stack is a directory of numbered single-layer images
//! (`0000.exr`, `0001.exr`, ...). This crate reads and writes those layers:
//!
//! - **EXR** - 32-bit float RGB, lossless, keeps out-of-range values
//! - **PPM** - 8-bit binary `P6` on write; `P6` and `P3` on read
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lfd_io::{stack, Format};
//!
//! let views = stack::load_stack("views", 21, Format::Exr)?;
//! stack::save_stack(&views, "preview", Format::Ppm)?;
//! ```
//!
//! # Feature Flags
//!
//! - `exr` - OpenEXR via the `exr` crate (default)
//! - `ppm` - PPM codec (default)

#![warn(missing_docs)]

use std::path::Path;

use lfd_core::Image;

pub mod detect;
mod error;
pub mod stack;

#[cfg(feature = "exr")]
pub mod exr;

#[cfg(feature = "ppm")]
pub mod ppm;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use stack::{load_stack, load_stack_into, save_stack};

/// Reads a single layer, choosing the codec from the file extension.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    read_as(path, Format::from_extension(path))
}

/// Writes a single layer, choosing the codec from the file extension.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let path = path.as_ref();
    write_as(path, image, Format::from_extension(path))
}

/// Reads a single layer with an explicit codec.
pub fn read_as<P: AsRef<Path>>(path: P, format: Format) -> IoResult<Image> {
    let path = path.as_ref();
    match format {
        #[cfg(feature = "exr")]
        Format::Exr => exr::read(path),

        #[cfg(feature = "ppm")]
        Format::Ppm => ppm::read(path),

        #[allow(unreachable_patterns)]
        _ => Err(unsupported(path)),
    }
}

/// Writes a single layer with an explicit codec.
pub fn write_as<P: AsRef<Path>>(path: P, image: &Image, format: Format) -> IoResult<()> {
    let path = path.as_ref();
    match format {
        #[cfg(feature = "exr")]
        Format::Exr => exr::write(path, image),

        #[cfg(feature = "ppm")]
        Format::Ppm => ppm::write(path, image),

        #[allow(unreachable_patterns)]
        _ => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("none")
            .to_string(),
    )
}
