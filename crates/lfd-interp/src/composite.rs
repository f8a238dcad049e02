//! Perceived-view simulation for multi-projector displays.
//!
//! Each projector emits a lobe around its central ray through a screen point.
//! An observer receives, at that point, the superposition of the lobes of the
//! projectors near its line of sight:
//!
//! ```text
//! w_i = exp(-(theta_i - theta_obs)^2 / sigma^2),  sigma = scattering / half_decay
//! ```
//!
//! Only a window of `2K` projectors around the bracketing pair is visited,
//! and weights at or below the contribution epsilon are dropped from both
//! the color sum and the normalization.

use lfd_core::{Color, Image, LayeredImage, Vec3};
use lfd_model::{CameraArrayModel, DisplayModel, ProjectorArrayModel};
use tracing::debug;

use crate::resample::{check_compatible, check_stack};
use crate::scanline::fill_rows;
use crate::search::{TwoTap, angular_index, ray_tangent};
use crate::{InterpError, InterpResult, InterpolationConfig};

/// Gaussian weight of one projector's lobe as seen by `observer` through
/// `screen`.
///
/// Angles are horizontal and measured from the screen point. A zero
/// `angular_scattering` is a lobe of zero width: weight 1 on its exact ray,
/// 0 elsewhere.
pub fn projector_weight(
    projector: Vec3,
    screen: Vec3,
    observer: Vec3,
    angular_scattering: f32,
    config: &InterpolationConfig,
) -> f32 {
    let projector_angle = ray_tangent(screen, projector).atan();
    let observer_angle = ray_tangent(screen, observer).atan();
    let diff = projector_angle - observer_angle;

    let sigma_sqr = (angular_scattering / config.gaussian_half_decay).powi(2);
    if sigma_sqr <= 0.0 {
        return if diff == 0.0 { 1.0 } else { 0.0 };
    }
    (-(diff * diff) / sigma_sqr).exp()
}

/// Simulates what an observer at `observer` sees on the display.
///
/// With `normalize` the gathered weights are divided out whenever their sum
/// exceeds the contribution epsilon. Otherwise the raw weighted sum is kept,
/// so pixels no projector reaches stay dark.
///
/// # Errors
///
/// Fails if `projectors` is invalid or `stack` does not match it.
pub fn simulate_view(
    stack: &LayeredImage,
    projectors: &ProjectorArrayModel,
    observer: Vec3,
    normalize: bool,
    config: &InterpolationConfig,
) -> InterpResult<Image> {
    check_stack(stack, projectors)?;
    Ok(render_perceived(stack, projectors, observer, normalize, config))
}

/// Simulates the perceived view from every camera position of `cameras`.
///
/// Layer `i` of the result is what camera `i` sees.
pub fn simulate_camera_array(
    stack: &LayeredImage,
    projectors: &ProjectorArrayModel,
    cameras: &CameraArrayModel,
    normalize: bool,
    config: &InterpolationConfig,
) -> InterpResult<LayeredImage> {
    check_stack(stack, projectors)?;
    cameras.validate()?;
    check_compatible(projectors, cameras)?;

    let layers: Vec<Image> = cameras
        .view_array()
        .positions()
        .iter()
        .map(|&camera| render_perceived(stack, projectors, camera, normalize, config))
        .collect();

    debug!(
        projectors = projectors.name(),
        cameras = cameras.name(),
        views = layers.len(),
        normalize,
        "simulated display"
    );

    LayeredImage::from_layers(layers).map_err(|reason| InterpError::StackMismatch {
        model: cameras.name().to_string(),
        reason,
    })
}

/// Gaussian window accumulation; inputs are already validated.
fn render_perceived(
    stack: &LayeredImage,
    projectors: &ProjectorArrayModel,
    observer: Vec3,
    normalize: bool,
    config: &InterpolationConfig,
) -> Image {
    let views = projectors.view_array();
    let screen = projectors.screen();
    let count = views.len();
    let half_window = config.contribution_half_window;
    let epsilon = config.contribution_epsilon;
    let scattering = projectors.angular_scattering;
    let layers = stack.layers();

    let mut out = Image::new(screen.width, screen.height);
    fill_rows(&mut out, |y, row| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let point = screen.pixel_center(x, y);
            let index = angular_index(point, observer, &views, config);
            let left = TwoTap::from_index(index.index(), count).left;

            let first = (left + 1).saturating_sub(half_window);
            let last = (left + half_window).min(count - 1);
            let offset = y * screen.width + x;

            let mut color = Color::ZERO;
            let mut total = 0.0;
            for id in first..=last {
                let weight = projector_weight(views.position(id), point, observer, scattering, config);
                if weight > epsilon {
                    color += layers[id].data()[offset] * weight;
                    total += weight;
                }
            }
            if normalize && total > epsilon {
                color /= total;
            }
            *pixel = color;
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lfd_core::Vec2;
    use lfd_model::UniformLayout;

    fn projectors(count: usize, scattering: f32) -> ProjectorArrayModel {
        let mut model = ProjectorArrayModel::uniform(
            "p",
            (6, 3),
            Vec2::new(60.0, 30.0),
            500.0,
            UniformLayout::new(count, -200.0, 200.0, 0.0, -300.0),
        );
        model.angular_scattering = scattering;
        model
    }

    fn white(count: usize) -> LayeredImage {
        LayeredImage::from_layers(vec![Image::filled(6, 3, Color::ONE); count]).unwrap()
    }

    #[test]
    fn test_weight_peaks_on_ray() {
        let config = InterpolationConfig::default();
        let screen = Vec3::new(10.0, 0.0, 0.0);
        let projector = Vec3::new(-20.0, 0.0, -300.0);
        // Observer on the projector's ray through the screen point
        let observer = screen + (screen - projector) * 2.0;
        assert_relative_eq!(
            projector_weight(projector, screen, observer, 0.1, &config),
            1.0,
            epsilon = 1e-5
        );
        let off = observer + Vec3::new(300.0, 0.0, 0.0);
        assert!(projector_weight(projector, screen, off, 0.1, &config) < 1.0);
    }

    #[test]
    fn test_weight_at_scattering_angle() {
        let config = InterpolationConfig::default();
        let scattering = 0.2f32;
        // Projector straight behind, observer rotated by `scattering`
        let projector = Vec3::new(0.0, 0.0, -100.0);
        let observer = Vec3::new(-(scattering.tan()) * 1000.0, 0.0, 1000.0);
        let w = projector_weight(projector, Vec3::ZERO, observer, scattering, &config);
        assert_relative_eq!(w, (-(1.11741f32 * 1.11741)).exp(), epsilon = 1e-4);
    }

    #[test]
    fn test_zero_scattering() {
        let config = InterpolationConfig::default();
        let p = Vec3::new(0.0, 0.0, -100.0);
        assert_eq!(projector_weight(p, Vec3::ZERO, Vec3::new(0.0, 0.0, 50.0), 0.0, &config), 1.0);
        assert_eq!(projector_weight(p, Vec3::ZERO, Vec3::new(5.0, 0.0, 50.0), 0.0, &config), 0.0);
    }

    #[test]
    fn test_normalized_white_stays_white() {
        let model = projectors(9, 0.3);
        let image = simulate_view(&white(9), &model, Vec3::new(15.0, 0.0, 500.0), true, &Default::default())
            .unwrap();
        for c in image.data() {
            assert_relative_eq!(c.x, 1.0, epsilon = 1e-5);
            assert_relative_eq!(c.z, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_unnormalized_sums_weights() {
        let model = projectors(9, 0.3);
        let config = InterpolationConfig::default();
        let observer = Vec3::new(15.0, 0.0, 500.0);
        let image = simulate_view(&white(9), &model, observer, false, &config).unwrap();

        let point = model.screen().pixel_center(2, 1);
        let expected: f32 = (0..9)
            .map(|id| projector_weight(model.view_position(id), point, observer, 0.3, &config))
            .filter(|&w| w > config.contribution_epsilon)
            .sum();
        assert_relative_eq!(image.at(2, 1).y, expected, epsilon = 1e-5);
    }

    #[test]
    fn test_no_contributor_is_black() {
        // Lobes far too narrow to reach an observer way off to the side
        let model = projectors(5, 1e-4);
        let image = simulate_view(&white(5), &model, Vec3::new(5000.0, 0.0, 100.0), true, &Default::default())
            .unwrap();
        assert!(image.data().iter().all(|&c| c == Color::ZERO));
    }

    #[test]
    fn test_window_limits_contributors() {
        // Wide lobes, window of one projector on each side of the bracket
        let model = projectors(9, 5.0);
        let config = InterpolationConfig {
            contribution_half_window: 1,
            ..Default::default()
        };
        let image = simulate_view(&white(9), &model, Vec3::new(0.0, 0.0, 500.0), false, &config).unwrap();
        for c in image.data() {
            assert!(c.x <= 2.0 + 1e-5, "{}", c.x);
        }
    }

    #[test]
    fn test_camera_array_layers() {
        let model = projectors(9, 0.3);
        let cameras = CameraArrayModel::uniform(
            "c",
            (6, 3),
            Vec2::new(60.0, 30.0),
            UniformLayout::new(4, -300.0, 300.0, 0.0, 500.0),
        );
        let out = simulate_camera_array(&white(9), &model, &cameras, true, &Default::default()).unwrap();
        assert_eq!(out.depth(), 4);
        assert_eq!(out.width(), 6);
    }

    #[test]
    fn test_stack_depth_checked() {
        let err = simulate_view(&white(4), &projectors(5, 0.3), Vec3::Z, true, &Default::default())
            .unwrap_err();
        assert!(matches!(err, InterpError::StackMismatch { .. }));
    }
}
