//! Two-tap resampling between view arrays.
//!
//! Every output pixel is independent: its screen point and the output view's
//! position define a ray, the ray is located in the source array with
//! [`angular_index`], and the two bracketing source layers are blended.

use lfd_core::{Image, LayeredImage, ScreenGeometry, Vec3};
use lfd_model::{DisplayModel, ViewArray};
use tracing::{debug, trace};

use crate::scanline::fill_rows;
use crate::search::{TwoTap, angular_index};
use crate::{InterpError, InterpResult, InterpolationConfig};

/// Checks that two descriptors share pixel resolution and physical screen
/// size exactly.
pub fn check_compatible(from: &dyn DisplayModel, to: &dyn DisplayModel) -> InterpResult<()> {
    if from.image_size() != to.image_size() {
        let fmt = |(w, h): (usize, usize)| format!("{}x{}", w, h);
        return Err(InterpError::Incompatible {
            what: "image size",
            from: fmt(from.image_size()),
            to: fmt(to.image_size()),
        });
    }
    if from.screen_size() != to.screen_size() {
        let fmt = |s: lfd_core::Vec2| format!("{}x{}", s.x, s.y);
        return Err(InterpError::Incompatible {
            what: "screen size",
            from: fmt(from.screen_size()),
            to: fmt(to.screen_size()),
        });
    }
    Ok(())
}

/// Validates `model` and checks that `stack` has its resolution and one
/// layer per view.
pub fn check_stack(stack: &LayeredImage, model: &dyn DisplayModel) -> InterpResult<()> {
    model.validate()?;
    let (width, height) = model.image_size();
    stack
        .expect_shape(width, height, model.view_count())
        .map_err(|reason| InterpError::StackMismatch {
            model: model.name().to_string(),
            reason,
        })
}

/// Resamples `source` for a single output view at `target`.
///
/// # Errors
///
/// Fails if `source_model` is invalid or `source` does not match it.
pub fn resample_view(
    source: &LayeredImage,
    source_model: &dyn DisplayModel,
    target: Vec3,
    config: &InterpolationConfig,
) -> InterpResult<Image> {
    check_stack(source, source_model)?;
    let views = source_model.view_array();
    Ok(render_view(source, &views, source_model.screen(), target, config))
}

/// Converts a whole stack from `source_model`'s views to `target_model`'s.
///
/// Nothing is produced unless both models are valid, compatible, and
/// `source` matches `source_model`.
pub fn convert_stack(
    source: &LayeredImage,
    source_model: &dyn DisplayModel,
    target_model: &dyn DisplayModel,
    config: &InterpolationConfig,
) -> InterpResult<LayeredImage> {
    check_stack(source, source_model)?;
    target_model.validate()?;
    check_compatible(source_model, target_model)?;

    let views = source_model.view_array();
    let screen = source_model.screen();
    let targets = target_model.view_array();

    let layers: Vec<Image> = targets
        .positions()
        .iter()
        .enumerate()
        .map(|(id, &target)| {
            trace!(id, x = target.x, z = target.z, "resampling layer");
            render_view(source, &views, screen, target, config)
        })
        .collect();

    debug!(
        from = source_model.name(),
        to = target_model.name(),
        layers = layers.len(),
        "converted stack"
    );

    LayeredImage::from_layers(layers).map_err(|reason| InterpError::StackMismatch {
        model: target_model.name().to_string(),
        reason,
    })
}

/// Per-pixel two-tap resampling; inputs are already validated.
pub(crate) fn render_view(
    source: &LayeredImage,
    views: &ViewArray,
    screen: ScreenGeometry,
    target: Vec3,
    config: &InterpolationConfig,
) -> Image {
    let count = views.len();
    let width = screen.width;
    let layers = source.layers();

    let mut out = Image::new(screen.width, screen.height);
    fill_rows(&mut out, |y, row| {
        for (x, pixel) in row.iter_mut().enumerate() {
            let point = screen.pixel_center(x, y);
            let index = angular_index(point, target, views, config).clamped();
            let tap = TwoTap::from_index(index.index(), count);
            let offset = y * width + x;
            *pixel = tap.blend(
                layers[tap.left].data()[offset],
                layers[tap.right].data()[offset],
            );
        }
    });
    out
}
