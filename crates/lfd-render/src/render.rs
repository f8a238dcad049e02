//! Image generation for pinhole cameras and projectors.
//!
//! Both renders use display row order: row 0 is the top of the screen.

use lfd_core::{Image, LayeredImage, ScreenGeometry, Vec3};
use lfd_model::{CameraArrayModel, DisplayModel, ProjectorArrayModel};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::{RenderResult, Scene};

/// Renders what a pinhole camera at `position` sees through the screen.
pub fn render_pinhole(scene: &Scene, screen: ScreenGeometry, position: Vec3) -> Image {
    render_rays(screen, |point| {
        let dir = (point - position).normalize_or_zero();
        scene.cast_ray(position, dir)
    })
}

/// Renders the image a projector at `position` must emit.
///
/// Each pixel traces the projector's ray through its screen point, starting
/// where that ray crosses the observer plane `z = observer_distance`.
pub fn render_projector(
    scene: &Scene,
    screen: ScreenGeometry,
    position: Vec3,
    observer_distance: f32,
) -> Image {
    render_rays(screen, |point| {
        let origin = projector_ray_origin(point, position, observer_distance);
        let dir = (point - origin).normalize_or_zero();
        scene.cast_ray(origin, dir)
    })
}

/// Point on the observer plane seen along the projector ray through `screen`.
pub fn projector_ray_origin(screen: Vec3, projector: Vec3, observer_distance: f32) -> Vec3 {
    let x = screen.x - (screen.x - projector.x) / projector.z * observer_distance;
    Vec3::new(x, 0.0, observer_distance)
}

/// Renders one pinhole view per camera of `cameras`.
pub fn render_camera_array(scene: &Scene, cameras: &CameraArrayModel) -> RenderResult<LayeredImage> {
    cameras.validate()?;
    let screen = cameras.screen();
    let positions = cameras.view_array();

    info!(cameras = positions.len(), "rendering camera array");
    let layers = positions
        .positions()
        .iter()
        .enumerate()
        .map(|(id, &position)| {
            debug!(id, total = positions.len(), "rendering view");
            render_pinhole(scene, screen, position)
        })
        .collect();
    Ok(LayeredImage::from_layers(layers)?)
}

/// Renders one image per projector of `projectors`.
pub fn render_projector_array(
    scene: &Scene,
    projectors: &ProjectorArrayModel,
) -> RenderResult<LayeredImage> {
    projectors.validate()?;
    let screen = projectors.screen();
    let positions = projectors.view_array();

    info!(projectors = positions.len(), "rendering projector array");
    let layers = positions
        .positions()
        .iter()
        .enumerate()
        .map(|(id, &position)| {
            debug!(id, total = positions.len(), "rendering projector");
            render_projector(scene, screen, position, projectors.observer_distance)
        })
        .collect();
    Ok(LayeredImage::from_layers(layers)?)
}

fn render_rays<F>(screen: ScreenGeometry, shade: F) -> Image
where
    F: Fn(Vec3) -> lfd_core::Color + Sync + Send,
{
    let mut image = Image::new(screen.width, screen.height);
    if screen.is_empty() {
        return image;
    }
    image
        .data_mut()
        .par_chunks_mut(screen.width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = shade(screen.pixel_center_flipped(x, y));
            }
        });
    image
}
