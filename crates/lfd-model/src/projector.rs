//! Multi-projector display descriptor.

use std::path::Path;

use lfd_core::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::display::validate_descriptor;
use crate::view_array::check_len;
use crate::{ArraySide, DisplayModel, ModelResult, UniformLayout, ViewArray, json};

/// Geometry of a multi-projector light-field display.
///
/// Projectors sit behind the screen (`z < 0`), sorted by increasing x. Each
/// one emits a lobe whose intensity halves at `angular_scattering` radians off
/// its central ray.
///
/// Field names are the JSON keys of the descriptor file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectorArrayModel {
    /// Identifier, informational only.
    pub name: String,
    /// Number of projectors.
    pub num_projectors: usize,
    /// Horizontal resolution in pixels.
    pub image_size_x: usize,
    /// Vertical resolution in pixels.
    pub image_size_y: usize,
    /// Distance from the screen to the nominal observer plane.
    pub observer_distance: f32,
    /// Physical screen width.
    pub screen_size_x: f32,
    /// Physical screen height.
    pub screen_size_y: f32,
    /// Half-decay angle of each projector's emission lobe, radians.
    pub angular_scattering: f32,
    /// Projector x positions.
    pub projectors_pos_x: Vec<f32>,
    /// Projector y positions.
    pub projectors_pos_y: Vec<f32>,
    /// Projector z positions.
    pub projectors_pos_z: Vec<f32>,
}

impl ProjectorArrayModel {
    /// Builds a descriptor with projectors laid out by `layout`.
    ///
    /// `angular_scattering` is estimated with
    /// [`ProjectorArrayModel::rule_of_thumb_scattering`].
    pub fn uniform(
        name: impl Into<String>,
        image_size: (usize, usize),
        screen_size: Vec2,
        observer_distance: f32,
        layout: UniformLayout,
    ) -> Self {
        let (xs, ys, zs) = layout.axes();
        let mut model = Self {
            name: name.into(),
            num_projectors: layout.count,
            image_size_x: image_size.0,
            image_size_y: image_size.1,
            observer_distance,
            screen_size_x: screen_size.x,
            screen_size_y: screen_size.y,
            angular_scattering: 0.0,
            projectors_pos_x: xs,
            projectors_pos_y: ys,
            projectors_pos_z: zs,
        };
        model.angular_scattering = model.rule_of_thumb_scattering();
        model
    }

    /// The reference 21-projector descriptor.
    pub fn sample() -> Self {
        Self::uniform(
            "MyHoloVizio",
            (1000, 600),
            Vec2::new(1000.0, 600.0),
            2000.0,
            UniformLayout::new(21, -1000.0, 1000.0, 0.0, -700.0),
        )
    }

    /// Half-decay angle estimate: 1.5 times the angle between the two
    /// central-most projectors, seen from the screen center.
    ///
    /// Returns 0 for fewer than two projectors.
    pub fn rule_of_thumb_scattering(&self) -> f32 {
        let count = self
            .num_projectors
            .min(self.projectors_pos_x.len())
            .min(self.projectors_pos_z.len());
        if count < 2 {
            return 0.0;
        }
        let central = (count / 2).min(count - 2);
        let dir = |id: usize| {
            Vec3::new(self.projectors_pos_x[id], 0.0, self.projectors_pos_z[id]).normalize_or_zero()
        };
        let cosine = dir(central).dot(dir(central + 1)).clamp(-1.0, 1.0);
        cosine.acos() * 1.5
    }

    /// Resets every field to its empty value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parses a descriptor from JSON text.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, missing fields, or position arrays whose
    /// length differs from `num_projectors`.
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.check_lengths()?;
        Ok(model)
    }

    /// Serializes to pretty JSON with 4-space indentation.
    pub fn to_json_string(&self) -> ModelResult<String> {
        json::to_pretty_string(self)
    }

    /// Loads a descriptor file.
    pub fn load<P: AsRef<Path>>(path: P) -> ModelResult<Self> {
        let path = path.as_ref();
        let model: Self = json::read_file(path)?;
        model.check_lengths()?;
        debug!(path = %path.display(), projectors = model.num_projectors, "loaded projector model");
        Ok(model)
    }

    /// Writes the descriptor file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ModelResult<()> {
        json::write_file(path.as_ref(), self)
    }

    /// Replaces `self` with the descriptor at `path`.
    ///
    /// On failure `self` is left cleared, never partially populated.
    pub fn read_from<P: AsRef<Path>>(&mut self, path: P) -> ModelResult<()> {
        match Self::load(path.as_ref()) {
            Ok(model) => {
                *self = model;
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.as_ref().display(), error = %e, "projector model rejected");
                self.clear();
                Err(e)
            }
        }
    }

    fn check_lengths(&self) -> ModelResult<()> {
        check_len("projectors_pos_x", self.num_projectors, self.projectors_pos_x.len())?;
        check_len("projectors_pos_y", self.num_projectors, self.projectors_pos_y.len())?;
        check_len("projectors_pos_z", self.num_projectors, self.projectors_pos_z.len())
    }
}

impl DisplayModel for ProjectorArrayModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn image_size(&self) -> (usize, usize) {
        (self.image_size_x, self.image_size_y)
    }

    fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_size_x, self.screen_size_y)
    }

    fn view_count(&self) -> usize {
        self.num_projectors
    }

    fn side(&self) -> ArraySide {
        ArraySide::Behind
    }

    fn view_array(&self) -> ViewArray {
        let positions = (0..self.num_projectors)
            .filter_map(|id| {
                Some(Vec3::new(
                    *self.projectors_pos_x.get(id)?,
                    *self.projectors_pos_y.get(id)?,
                    *self.projectors_pos_z.get(id)?,
                ))
            })
            .collect();
        ViewArray::new(positions, ArraySide::Behind)
    }

    fn view_position(&self, id: usize) -> Vec3 {
        Vec3::new(
            self.projectors_pos_x[id],
            self.projectors_pos_y[id],
            self.projectors_pos_z[id],
        )
    }

    fn validate(&self) -> ModelResult<()> {
        self.check_lengths()?;
        validate_descriptor(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;
    use approx::assert_relative_eq;

    #[test]
    fn test_sample_matches_reference() {
        let model = ProjectorArrayModel::sample();
        assert_eq!(model.num_projectors, 21);
        assert_eq!(model.image_size(), (1000, 600));
        assert_eq!(model.projectors_pos_x[0], -1000.0);
        assert_eq!(model.projectors_pos_x[20], 1000.0);
        assert!(model.projectors_pos_z.iter().all(|&z| z == -700.0));
        // atan(100 / 700) * 1.5
        assert_relative_eq!(model.angular_scattering, 0.212_846, epsilon = 1e-4);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_json_field_names() {
        let json = ProjectorArrayModel::sample().to_json_string().unwrap();
        for key in [
            "\"name\"",
            "\"num_projectors\"",
            "\"image_size_x\"",
            "\"image_size_y\"",
            "\"observer_distance\"",
            "\"screen_size_x\"",
            "\"screen_size_y\"",
            "\"angular_scattering\"",
            "\"projectors_pos_x\"",
            "\"projectors_pos_y\"",
            "\"projectors_pos_z\"",
        ] {
            assert!(json.contains(key), "missing {key}");
        }
        assert!(json.contains("\n    \"name\""));
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{ "name": "x", "num_projectors": 0 }"#;
        assert!(matches!(
            ProjectorArrayModel::from_json_str(json),
            Err(ModelError::Json(_))
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut model = ProjectorArrayModel::sample();
        model.projectors_pos_y.pop();
        let json = model.to_json_string().unwrap();
        assert!(matches!(
            ProjectorArrayModel::from_json_str(&json),
            Err(ModelError::LengthMismatch { field: "projectors_pos_y", .. })
        ));
    }

    #[test]
    fn test_projectors_must_be_behind() {
        let mut model = ProjectorArrayModel::sample();
        model.projectors_pos_z[3] = 10.0;
        assert!(matches!(model.validate(), Err(ModelError::WrongSide { index: 3, .. })));
    }

    #[test]
    fn test_empty_model_invalid() {
        assert!(ProjectorArrayModel::default().validate().is_err());
    }

    #[test]
    fn test_scattering_single_projector() {
        let model = ProjectorArrayModel::uniform(
            "one",
            (4, 4),
            Vec2::splat(4.0),
            100.0,
            UniformLayout::new(1, 0.0, 0.0, 0.0, -10.0),
        );
        assert_eq!(model.angular_scattering, 0.0);
    }
}
