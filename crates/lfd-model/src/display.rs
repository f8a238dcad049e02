//! Common interface over both descriptor kinds.

use lfd_core::{ScreenGeometry, Vec2, Vec3};

use crate::{ArraySide, ModelError, ModelResult, ViewArray};

/// Geometry shared by multi-view and multi-projector descriptors.
///
/// The resampler and compositor are written once against this trait; which
/// array plays the source and which the target is decided by the caller.
pub trait DisplayModel {
    /// Descriptor name (informational only).
    fn name(&self) -> &str;

    /// Pixel resolution `(width, height)` shared by every layer.
    fn image_size(&self) -> (usize, usize);

    /// Physical screen size.
    fn screen_size(&self) -> Vec2;

    /// Number of views (cameras or projectors).
    fn view_count(&self) -> usize;

    /// Side of the screen the views are on.
    fn side(&self) -> ArraySide;

    /// Sorted view positions with their screen side.
    fn view_array(&self) -> ViewArray;

    /// Checks counts, array lengths, ordering and screen side.
    fn validate(&self) -> ModelResult<()>;

    /// Screen geometry built from resolution and physical size.
    fn screen(&self) -> ScreenGeometry {
        let (width, height) = self.image_size();
        ScreenGeometry::new(width, height, self.screen_size())
    }

    /// Position of view `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    fn view_position(&self, id: usize) -> Vec3 {
        self.view_array().position(id)
    }
}

/// Shared validation for both descriptor kinds.
pub(crate) fn validate_descriptor(model: &dyn DisplayModel) -> ModelResult<()> {
    let (width, height) = model.image_size();
    if width == 0 || height == 0 {
        return Err(ModelError::Empty(format!(
            "'{}' has image size {}x{}",
            model.name(),
            width,
            height
        )));
    }
    if model.view_count() == 0 {
        return Err(ModelError::Empty(format!("'{}' declares no views", model.name())));
    }
    model.view_array().validate()
}
