//! # lfd-model
//!
//! Geometry descriptors for the two light-field display representations.
//!
//! - [`ProjectorArrayModel`] - Multi-projector display: projectors behind the
//!   screen whose angularly blended emissions form a continuous-parallax image
//! - [`CameraArrayModel`] - Multi-view display: pinhole cameras in front of the
//!   screen sampling the light field from discrete viewpoints
//! - [`DisplayModel`] - Common view of both, used by the interpolation engine
//! - [`ViewArray`] / [`ArraySide`] - Sorted view positions plus the side of the
//!   screen they live on
//!
//! Both descriptors persist as JSON documents whose field names are part of the
//! on-disk format:
//!
//! ```rust
//! use lfd_model::ProjectorArrayModel;
//!
//! let model = ProjectorArrayModel::sample();
//! let json = model.to_json_string().unwrap();
//! let back = ProjectorArrayModel::from_json_str(&json).unwrap();
//! assert_eq!(model, back);
//! ```
//!
//! # Dependencies
//!
//! - [`serde`] / [`serde_json`] - Descriptor persistence
//! - `lfd-core` - Screen geometry and vector types
//!
//! # Used By
//!
//! - `lfd-interp` - Resampling and perceptual compositing
//! - `lfd-render` - Rendering input stacks
//! - `lfd-cli` - Loading descriptors from disk

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod camera;
mod display;
mod error;
mod json;
mod projector;
pub mod layout;
pub mod view_array;

pub use camera::CameraArrayModel;
pub use display::DisplayModel;
pub use error::{ModelError, ModelResult};
pub use layout::UniformLayout;
pub use projector::ProjectorArrayModel;
pub use view_array::{ArraySide, ViewArray};
