//! # lfd-core
//!
//! Core types for light-field display simulation.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`Image`] - Dense 2D grid of RGB float colors with clamped access
//! - [`LayeredImage`] - Ordered stack of same-sized images, one per view or projector
//! - [`ScreenGeometry`] - Mapping from pixel coordinates to physical screen positions
//! - [`Error`] - Shared error type for buffer and dimension failures
//!
//! ## Coordinate Conventions
//!
//! The display screen is a flat rectangle in the `z = 0` plane, centered at the
//! origin. Cameras sit in front of it (`z > 0`), projectors behind it (`z < 0`).
//! All lengths share one unit (millimeters in the sample descriptors).
//!
//! ## Crate Structure
//!
//! ```text
//! lfd-core (this crate)
//!    ^
//!    |
//!    +-- lfd-model (display descriptors)
//!    +-- lfd-io (codecs, stack directories)
//!    +-- lfd-interp (angular search, resampling, compositing)
//!    +-- lfd-render (sample ray tracer)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod geometry;
pub mod image;
pub mod layered;

pub use error::*;
pub use geometry::*;
pub use image::*;
pub use layered::*;

pub use glam::{Vec2, Vec3};

/// RGB color stored as three linear float channels.
///
/// Channels are `x = R`, `y = G`, `z = B`. Values are not restricted to
/// `[0, 1]`; codecs clamp when writing low-precision formats.
pub type Color = Vec3;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use lfd_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::ScreenGeometry;
    pub use crate::image::Image;
    pub use crate::layered::LayeredImage;
    pub use crate::Color;
    pub use glam::{Vec2, Vec3};
}
