//! # lfd-render
//!
//! A small Whitted-style ray tracer used to synthesize light-field stacks:
//! one pinhole image per camera of a multi-view array, or one emitted image
//! per projector of a multi-projector display.
//!
//! The scene is fixed-function: spheres with Phong materials, point lights
//! with hard shadows, and a checkerboard floor. Reflection and refraction
//! recurse up to a configurable depth.
//!
//! ```rust,ignore
//! use lfd_render::{render_camera_array, Scene};
//!
//! let views = render_camera_array(&Scene::sample(), &cameras)?;
//! ```
//!
//! # Dependencies
//!
//! - [`lfd_core`] - images and screen geometry
//! - [`lfd_model`] - camera and projector positions
//! - [`rayon`] - scanline-parallel rendering

#![warn(missing_docs)]

mod error;
mod material;
pub mod render;
pub mod scene;
pub mod tracer;

pub use error::{RenderError, RenderResult};
pub use material::Material;
pub use render::{
    projector_ray_origin, render_camera_array, render_pinhole, render_projector,
    render_projector_array,
};
pub use scene::{Checkerboard, Light, Scene, Sphere};
pub use tracer::{Hit, reflect, refract};
