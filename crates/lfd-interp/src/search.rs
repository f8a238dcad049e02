//! Angular index search over a sorted view array.
//!
//! Each view sees a screen point `S` along a ray with horizontal tangent
//! `(S.x - v.x) / (S.z - v.z)`. Multiplying by the array's
//! [`ArraySide::tangent_sign`] makes that sequence ascending in view id for
//! cameras in front of the screen and projectors behind it alike, so one
//! bisection serves both conversion directions.
//!
//! The blend weight is measured in angle, not tangent. Because `atan` is odd
//! the sign flip leaves it unchanged.
//!
//! # Used By
//!
//! - [`crate::resample`] - two-tap view resampling
//! - [`crate::composite`] - window centering for display simulation
//!
//! [`ArraySide::tangent_sign`]: lfd_model::ArraySide::tangent_sign

use lfd_core::{Color, Vec3};
use lfd_model::ViewArray;

use crate::InterpolationConfig;

/// Bracketing view pair and the angular blend weight between them.
///
/// The weight is unclamped: it falls outside `[0, 1]` when the ray lies
/// beyond the array's end views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularIndex {
    /// Lower bracketing view id.
    pub left: usize,
    /// Upper bracketing view id (equal to `left` for one-view arrays).
    pub right: usize,
    /// Angular position between `left` and `right`.
    pub weight: f32,
}

impl AngularIndex {
    /// Index 0 with weight 0.
    fn degenerate(count: usize) -> Self {
        Self {
            left: 0,
            right: usize::from(count > 1),
            weight: 0.0,
        }
    }

    /// Continuous index `left + weight`.
    pub fn index(&self) -> f32 {
        self.left as f32 + self.weight
    }

    /// Same bracket with the weight limited to `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            weight: self.weight.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Horizontal tangent of the ray from `from` through `to`.
#[inline]
pub(crate) fn ray_tangent(from: Vec3, to: Vec3) -> f32 {
    (to.x - from.x) / (to.z - from.z)
}

/// Locates the ray from `observer` through `screen` inside `array`.
///
/// Returns index 0 with weight 0 when the end views are not in ascending
/// tangent order (an unsorted array, or views on the wrong side of the
/// screen), and for arrays with fewer than two views.
pub fn angular_index(
    screen: Vec3,
    observer: Vec3,
    array: &ViewArray,
    config: &InterpolationConfig,
) -> AngularIndex {
    let count = array.len();
    if count < 2 {
        return AngularIndex::degenerate(count);
    }

    let sign = array.side().tangent_sign();
    let view_tan = |id: usize| sign * ray_tangent(array.position(id), screen);
    let target_tan = sign * ray_tangent(observer, screen);

    let mut left = 0;
    let mut right = count - 1;
    let mut left_tan = view_tan(left);
    let mut right_tan = view_tan(right);
    if left_tan > right_tan {
        return AngularIndex::degenerate(count);
    }

    for _ in 0..config.max_search_iterations {
        if right - left <= 1 {
            break;
        }
        let mid = (left + right) / 2;
        let mid_tan = view_tan(mid);
        if mid_tan > target_tan {
            right = mid;
            right_tan = mid_tan;
        } else {
            left = mid;
            left_tan = mid_tan;
        }
    }

    let left_angle = left_tan.atan();
    let span = right_tan.atan() - left_angle;
    let weight = if span != 0.0 {
        (target_tan.atan() - left_angle) / span
    } else {
        0.0
    };

    AngularIndex { left, right, weight }
}

/// Two adjacent layers and a weight for linear blending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoTap {
    /// Lower layer id.
    pub left: usize,
    /// Upper layer id.
    pub right: usize,
    /// Share of `right`, in `[0, 1]`.
    pub weight: f32,
}

impl TwoTap {
    /// Brackets a continuous index within `count` layers.
    ///
    /// The index is truncated toward zero and clamped to `[0, count - 2]`;
    /// the remainder, clamped to `[0, 1]`, becomes the weight. A one-layer
    /// stack always yields that layer.
    pub fn from_index(index: f32, count: usize) -> Self {
        if count < 2 {
            return Self {
                left: 0,
                right: 0,
                weight: 0.0,
            };
        }
        let left = (index as i64).clamp(0, count as i64 - 2) as usize;
        let weight = (index - left as f32).clamp(0.0, 1.0);
        Self {
            left,
            right: left + 1,
            weight: if weight.is_nan() { 0.0 } else { weight },
        }
    }

    /// Linear blend; exactly `left` at weight 0 and exactly `right` at 1.
    #[inline]
    pub fn blend(&self, left: Color, right: Color) -> Color {
        if self.weight <= 0.0 {
            left
        } else if self.weight >= 1.0 {
            right
        } else {
            left * (1.0 - self.weight) + right * self.weight
        }
    }
}
