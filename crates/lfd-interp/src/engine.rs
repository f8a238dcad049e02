//! Conversion engine bound to one projector and one camera descriptor.

use lfd_core::{Image, LayeredImage, Vec3};
use lfd_model::{CameraArrayModel, DisplayModel, ProjectorArrayModel};
use tracing::info;

use crate::composite::{projector_weight, simulate_camera_array, simulate_view};
use crate::resample::{check_compatible, convert_stack, resample_view};
use crate::{InterpResult, InterpolationConfig};

/// Converts and simulates light fields between a multi-projector display
/// and a multi-view camera array.
///
/// Both descriptors are validated when set, so every operation only has to
/// check its image stacks. Operations are pure functions of their inputs
/// and the held descriptors.
///
/// # Example
///
/// ```rust
/// use lfd_interp::LightFieldInterpolation;
/// use lfd_model::{CameraArrayModel, ProjectorArrayModel};
///
/// let engine = LightFieldInterpolation::new(
///     ProjectorArrayModel::sample(),
///     CameraArrayModel::sample(),
/// ).unwrap();
/// assert!(engine.check_compatible().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct LightFieldInterpolation {
    projectors: ProjectorArrayModel,
    cameras: CameraArrayModel,
    config: InterpolationConfig,
}

impl LightFieldInterpolation {
    /// Creates an engine with default tunables.
    pub fn new(projectors: ProjectorArrayModel, cameras: CameraArrayModel) -> InterpResult<Self> {
        Self::with_config(projectors, cameras, InterpolationConfig::default())
    }

    /// Creates an engine with explicit tunables.
    pub fn with_config(
        projectors: ProjectorArrayModel,
        cameras: CameraArrayModel,
        config: InterpolationConfig,
    ) -> InterpResult<Self> {
        projectors.validate()?;
        cameras.validate()?;
        config.validate()?;
        info!(
            projectors = projectors.num_projectors,
            cameras = cameras.num_cameras,
            "light-field engine ready"
        );
        Ok(Self {
            projectors,
            cameras,
            config,
        })
    }

    /// Replaces the projector descriptor. The old one is kept on error.
    pub fn set_projector_model(&mut self, projectors: ProjectorArrayModel) -> InterpResult<()> {
        projectors.validate()?;
        self.projectors = projectors;
        Ok(())
    }

    /// Replaces the camera descriptor. The old one is kept on error.
    pub fn set_camera_model(&mut self, cameras: CameraArrayModel) -> InterpResult<()> {
        cameras.validate()?;
        self.cameras = cameras;
        Ok(())
    }

    /// Replaces the tunables. The old ones are kept on error.
    pub fn set_config(&mut self, config: InterpolationConfig) -> InterpResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Projector descriptor.
    pub fn projector_model(&self) -> &ProjectorArrayModel {
        &self.projectors
    }

    /// Camera descriptor.
    pub fn camera_model(&self) -> &CameraArrayModel {
        &self.cameras
    }

    /// Tunables.
    pub fn config(&self) -> &InterpolationConfig {
        &self.config
    }

    /// Checks that both descriptors share resolution and screen size.
    pub fn check_compatible(&self) -> InterpResult<()> {
        check_compatible(&self.cameras, &self.projectors)
    }

    /// Resamples a camera stack into one image per projector.
    pub fn convert_views_to_projectors(&self, views: &LayeredImage) -> InterpResult<LayeredImage> {
        convert_stack(views, &self.cameras, &self.projectors, &self.config)
    }

    /// Resamples a projector stack into one image per camera.
    pub fn convert_projectors_to_views(&self, projectors: &LayeredImage) -> InterpResult<LayeredImage> {
        convert_stack(projectors, &self.projectors, &self.cameras, &self.config)
    }

    /// Image a projector at `projector` must emit to reproduce `views`.
    pub fn interpolate_projector_image(
        &self,
        views: &LayeredImage,
        projector: Vec3,
    ) -> InterpResult<Image> {
        resample_view(views, &self.cameras, projector, &self.config)
    }

    /// Image a camera at `camera` records from the two-tap blend of
    /// `projectors`.
    pub fn interpolate_camera_image(
        &self,
        projectors: &LayeredImage,
        camera: Vec3,
    ) -> InterpResult<Image> {
        resample_view(projectors, &self.projectors, camera, &self.config)
    }

    /// What an observer at `observer` perceives on the display.
    pub fn simulate_perceived_view(
        &self,
        projectors: &LayeredImage,
        observer: Vec3,
        normalize: bool,
    ) -> InterpResult<Image> {
        simulate_view(projectors, &self.projectors, observer, normalize, &self.config)
    }

    /// Perceived view for every camera of the camera descriptor.
    pub fn simulate_camera_array(
        &self,
        projectors: &LayeredImage,
        normalize: bool,
    ) -> InterpResult<LayeredImage> {
        simulate_camera_array(projectors, &self.projectors, &self.cameras, normalize, &self.config)
    }

    /// Lobe weight of a projector at `projector` seen by `observer` through
    /// `screen`, using this display's angular scattering.
    pub fn projector_weight(&self, projector: Vec3, screen: Vec3, observer: Vec3) -> f32 {
        projector_weight(
            projector,
            screen,
            observer,
            self.projectors.angular_scattering,
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InterpError;
    use lfd_core::{Color, Vec2};
    use lfd_model::UniformLayout;

    fn small_engine() -> LightFieldInterpolation {
        let projectors = ProjectorArrayModel::uniform(
            "p",
            (4, 2),
            Vec2::new(40.0, 20.0),
            300.0,
            UniformLayout::new(5, -100.0, 100.0, 0.0, -200.0),
        );
        let cameras = CameraArrayModel::uniform(
            "c",
            (4, 2),
            Vec2::new(40.0, 20.0),
            UniformLayout::new(3, -150.0, 150.0, 0.0, 300.0),
        );
        LightFieldInterpolation::new(projectors, cameras).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_model() {
        let mut projectors = ProjectorArrayModel::sample();
        projectors.projectors_pos_x.reverse();
        let err = LightFieldInterpolation::new(projectors, CameraArrayModel::sample()).unwrap_err();
        assert!(matches!(err, InterpError::Model(_)));
    }

    #[test]
    fn test_set_model_keeps_old_on_error() {
        let mut engine = small_engine();
        let err = engine.set_camera_model(CameraArrayModel::default());
        assert!(err.is_err());
        assert_eq!(engine.camera_model().num_cameras, 3);
    }

    #[test]
    fn test_incompatible_models() {
        let mut engine = small_engine();
        let wider = CameraArrayModel::uniform(
            "wide",
            (4, 2),
            Vec2::new(41.0, 20.0),
            UniformLayout::new(3, -150.0, 150.0, 0.0, 300.0),
        );
        engine.set_camera_model(wider).unwrap();
        assert!(engine.check_compatible().is_err());
        let views = LayeredImage::new(4, 2, 3);
        assert!(matches!(
            engine.convert_views_to_projectors(&views),
            Err(InterpError::Incompatible { what: "screen size", .. })
        ));
    }

    #[test]
    fn test_uniform_field_converts_to_itself() {
        let engine = small_engine();
        let gray = Color::splat(0.5);
        let views = LayeredImage::from_layers(vec![Image::filled(4, 2, gray); 3]).unwrap();

        let projectors = engine.convert_views_to_projectors(&views).unwrap();
        assert_eq!(projectors.depth(), 5);
        let back = engine.convert_projectors_to_views(&projectors).unwrap();
        assert_eq!(back.depth(), 3);

        for layer in projectors.layers().iter().chain(back.layers()) {
            for c in layer.data() {
                assert!((*c - gray).abs().max_element() < 1e-6);
            }
        }
    }

    #[test]
    fn test_single_image_matches_stack_layer() {
        let engine = small_engine();
        let mut views = LayeredImage::new(4, 2, 3);
        for (id, layer) in views.layers_mut().iter_mut().enumerate() {
            layer.fill(Color::new(id as f32, 0.0, 1.0));
        }
        let stack = engine.convert_views_to_projectors(&views).unwrap();
        let position = engine.projector_model().view_position(2);
        let single = engine.interpolate_projector_image(&views, position).unwrap();
        assert_eq!(&single, stack.layer(2));
    }

    #[test]
    fn test_simulation_shapes() {
        let engine = small_engine();
        let projectors = LayeredImage::new(4, 2, 5);
        let view = engine
            .simulate_perceived_view(&projectors, Vec3::new(0.0, 0.0, 300.0), true)
            .unwrap();
        assert_eq!(view.dimensions(), (4, 2));
        let all = engine.simulate_camera_array(&projectors, false).unwrap();
        assert_eq!(all.depth(), 3);
    }

    #[test]
    fn test_projector_weight_uses_model_scattering() {
        let engine = small_engine();
        let p = engine.projector_model().view_position(2);
        let on_axis = engine.projector_weight(p, Vec3::ZERO, Vec3::new(0.0, 0.0, 300.0));
        assert_eq!(on_axis, 1.0);
        let off = engine.projector_weight(p, Vec3::ZERO, Vec3::new(300.0, 0.0, 300.0));
        assert!(off < 0.01);
    }
}
