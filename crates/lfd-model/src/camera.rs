//! Multi-view display descriptor.

use std::path::Path;

use lfd_core::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::display::validate_descriptor;
use crate::view_array::check_len;
use crate::{ArraySide, DisplayModel, ModelResult, UniformLayout, ViewArray, json};

/// Geometry of a multi-view display: pinhole cameras in front of the screen
/// (`z > 0`), sorted by increasing x.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraArrayModel {
    /// Identifier, informational only.
    pub name: String,
    /// Number of cameras.
    pub num_cameras: usize,
    /// Horizontal resolution in pixels.
    pub image_size_x: usize,
    /// Vertical resolution in pixels.
    pub image_size_y: usize,
    /// Physical screen width.
    pub screen_size_x: f32,
    /// Physical screen height.
    pub screen_size_y: f32,
    /// Camera x positions.
    pub cameras_pos_x: Vec<f32>,
    /// Camera y positions.
    pub cameras_pos_y: Vec<f32>,
    /// Camera z positions.
    pub cameras_pos_z: Vec<f32>,
}

impl CameraArrayModel {
    /// Builds a descriptor with cameras laid out by `layout`.
    pub fn uniform(
        name: impl Into<String>,
        image_size: (usize, usize),
        screen_size: Vec2,
        layout: UniformLayout,
    ) -> Self {
        let (xs, ys, zs) = layout.axes();
        Self {
            name: name.into(),
            num_cameras: layout.count,
            image_size_x: image_size.0,
            image_size_y: image_size.1,
            screen_size_x: screen_size.x,
            screen_size_y: screen_size.y,
            cameras_pos_x: xs,
            cameras_pos_y: ys,
            cameras_pos_z: zs,
        }
    }

    /// The reference 21-camera descriptor, cameras on the observer plane at
    /// z = 2000.
    pub fn sample() -> Self {
        Self::uniform(
            "MyMultiView",
            (1000, 600),
            Vec2::new(1000.0, 600.0),
            UniformLayout::new(21, -2000.0, 2000.0, 0.0, 2000.0),
        )
    }

    /// Resets every field to its empty value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parses a descriptor from JSON text.
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
        debug!(path = %path.display(), cameras = model.num_cameras, "loaded camera model");
        Ok(model)
    }

    /// Writes the descriptor file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ModelResult<()> {
        json::write_file(path.as_ref(), self)
    }

    /// Replaces `self` with the descriptor at `path`, clearing it on failure.
    pub fn read_from<P: AsRef<Path>>(&mut self, path: P) -> ModelResult<()> {
        match Self::load(path.as_ref()) {
            Ok(model) => {
                *self = model;
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.as_ref().display(), error = %e, "camera model rejected");
                self.clear();
                Err(e)
            }
        }
    }

    fn check_lengths(&self) -> ModelResult<()> {
        check_len("cameras_pos_x", self.num_cameras, self.cameras_pos_x.len())?;
        check_len("cameras_pos_y", self.num_cameras, self.cameras_pos_y.len())?;
        check_len("cameras_pos_z", self.num_cameras, self.cameras_pos_z.len())
    }
}

impl DisplayModel for CameraArrayModel {
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
        self.num_cameras
    }

    fn side(&self) -> ArraySide {
        ArraySide::Front
    }

    fn view_array(&self) -> ViewArray {
        let positions = (0..self.num_cameras)
            .filter_map(|id| {
                Some(Vec3::new(
                    *self.cameras_pos_x.get(id)?,
                    *self.cameras_pos_y.get(id)?,
                    *self.cameras_pos_z.get(id)?,
                ))
            })
            .collect();
        ViewArray::new(positions, ArraySide::Front)
    }

    fn view_position(&self, id: usize) -> Vec3 {
        Vec3::new(self.cameras_pos_x[id], self.cameras_pos_y[id], self.cameras_pos_z[id])
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

    #[test]
    fn test_sample_matches_reference() {
        let model = CameraArrayModel::sample();
        assert_eq!(model.num_cameras, 21);
        assert_eq!(model.cameras_pos_x[0], -2000.0);
        assert_eq!(model.cameras_pos_x[20], 2000.0);
        assert!(model.cameras_pos_z.iter().all(|&z| z == 2000.0));
        assert_eq!(model.side(), ArraySide::Front);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_json_has_no_projector_fields() {
        let json = CameraArrayModel::sample().to_json_string().unwrap();
        assert!(json.contains("\"num_cameras\""));
        assert!(json.contains("\"cameras_pos_z\""));
        assert!(!json.contains("observer_distance"));
        assert!(!json.contains("angular_scattering"));
    }

    #[test]
    fn test_unsorted_cameras_invalid() {
        let mut model = CameraArrayModel::sample();
        model.cameras_pos_x.swap(4, 5);
        assert!(matches!(model.validate(), Err(ModelError::NotSorted { index: 5, .. })));
    }

    #[test]
    fn test_zero_resolution_invalid() {
        let mut model = CameraArrayModel::sample();
        model.image_size_y = 0;
        assert!(matches!(model.validate(), Err(ModelError::Empty(_))));
    }

    #[test]
    fn test_view_position() {
        let model = CameraArrayModel::sample();
        assert_eq!(model.view_position(10), Vec3::new(0.0, 0.0, 2000.0));
        assert_eq!(model.view_array().position(10), model.view_position(10));
    }
}
