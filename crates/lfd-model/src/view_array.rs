//! Sorted view positions with an explicit screen side.
//!
//! A [`ViewArray`] is what the angular search operates on. Whether the views
//! are cameras or projectors only matters through [`ArraySide`]: seen from a
//! fixed screen point, the tangent of the viewing ray grows with the view id
//! for arrays in front of the screen and shrinks for arrays behind it.

use lfd_core::Vec3;

use crate::{ModelError, ModelResult};

/// Side of the screen plane a view array lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArraySide {
    /// `z > 0`: observer cameras.
    Front,
    /// `z < 0`: projectors.
    Behind,
}

impl ArraySide {
    /// Direction in which ray tangents move as the view id increases.
    ///
    /// Multiplying tangents by this sign makes every array ascending.
    #[inline]
    pub fn tangent_sign(self) -> f32 {
        match self {
            Self::Front => 1.0,
            Self::Behind => -1.0,
        }
    }

    /// Returns `true` if `z` lies strictly on this side of the screen.
    #[inline]
    pub fn contains_z(self, z: f32) -> bool {
        match self {
            Self::Front => z > 0.0,
            Self::Behind => z < 0.0,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Front => "in front of",
            Self::Behind => "behind",
        }
    }
}

/// Ordered view positions of one display array.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewArray {
    positions: Vec<Vec3>,
    side: ArraySide,
}

impl ViewArray {
    /// Creates a view array. Positions are taken as given; see
    /// [`ViewArray::validate`] for the ordering checks.
    pub fn new(positions: Vec<Vec3>, side: ArraySide) -> Self {
        Self { positions, side }
    }

    /// Builds an array from per-axis coordinate lists.
    ///
    /// # Errors
    ///
    /// [`ModelError::LengthMismatch`] if the axis lists differ in length.
    pub fn from_axes(xs: &[f32], ys: &[f32], zs: &[f32], side: ArraySide) -> ModelResult<Self> {
        check_len("pos_y", xs.len(), ys.len())?;
        check_len("pos_z", xs.len(), zs.len())?;
        let positions = xs
            .iter()
            .zip(ys)
            .zip(zs)
            .map(|((&x, &y), &z)| Vec3::new(x, y, z))
            .collect();
        Ok(Self::new(positions, side))
    }

    /// Number of views.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the array has no views.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of view `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[inline]
    pub fn position(&self, id: usize) -> Vec3 {
        self.positions[id]
    }

    /// All positions in id order.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Screen side of the array.
    #[inline]
    pub fn side(&self) -> ArraySide {
        self.side
    }

    /// Checks the geometric preconditions of the angular search.
    ///
    /// Views must exist, be strictly increasing in x, and all lie on
    /// [`ViewArray::side`] of the screen.
    pub fn validate(&self) -> ModelResult<()> {
        if self.positions.is_empty() {
            return Err(ModelError::Empty("view array has no views".into()));
        }
        for (index, pos) in self.positions.iter().enumerate() {
            if !self.side.contains_z(pos.z) {
                return Err(ModelError::WrongSide {
                    index,
                    z: pos.z,
                    expected: self.side.describe(),
                });
            }
        }
        for (prev, pair) in self.positions.windows(2).enumerate() {
            if pair[1].x <= pair[0].x {
                return Err(ModelError::NotSorted {
                    index: prev + 1,
                    x: pair[1].x,
                    prev,
                    prev_x: pair[0].x,
                });
            }
        }
        Ok(())
    }
}

pub(crate) fn check_len(field: &'static str, expected: usize, got: usize) -> ModelResult<()> {
    if expected != got {
        return Err(ModelError::LengthMismatch { field, expected, got });
    }
    Ok(())
}
