//! # lfd-interp
//!
//! Light-field conversion between multi-view camera arrays and
//! multi-projector displays, and simulation of what such a display shows an
//! observer.
//!
//! # Overview
//!
//! - [`angular_index`] - locate a ray inside a sorted view array
//! - [`convert_stack`] - two-tap resampling of a whole stack into another
//!   array's views
//! - [`simulate_view`] - Gaussian blend of projector lobes seen from an
//!   arbitrary position
//! - [`LightFieldInterpolation`] - the above bound to one projector and one
//!   camera descriptor
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lfd_interp::LightFieldInterpolation;
//!
//! let engine = LightFieldInterpolation::new(projectors, cameras)?;
//! let projector_stack = engine.convert_views_to_projectors(&views)?;
//! let perceived = engine.simulate_perceived_view(&projector_stack, observer, true)?;
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - fill output scanlines with rayon (default)
//!
//! # Dependencies
//!
//! - [`lfd_core`] - images and screen geometry
//! - [`lfd_model`] - display descriptors

#![warn(missing_docs)]

pub mod composite;
mod config;
mod engine;
mod error;
pub mod resample;
mod scanline;
pub mod search;

pub use composite::{projector_weight, simulate_camera_array, simulate_view};
pub use config::{GAUSSIAN_HALF_DECAY, InterpolationConfig};
pub use engine::LightFieldInterpolation;
pub use error::{InterpError, InterpResult};
pub use resample::{check_compatible, check_stack, convert_stack, resample_view};
pub use search::{AngularIndex, TwoTap, angular_index};
