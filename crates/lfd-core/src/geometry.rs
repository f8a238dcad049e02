//! Screen-space geometry.
//!
//! Maps pixel coordinates to physical positions on the display screen. The
//! screen lies in the `z = 0` plane, centered at the origin, spanning
//! `[-size/2, +size/2]` on both axes.

use crate::{Vec2, Vec3};

/// Pixel resolution and physical extent of a display screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    /// Horizontal resolution in pixels.
    pub width: usize,
    /// Vertical resolution in pixels.
    pub height: usize,
    /// Physical screen size (length units).
    pub size: Vec2,
}

impl ScreenGeometry {
    /// Creates a screen description.
    pub fn new(width: usize, height: usize, size: Vec2) -> Self {
        Self { width, height, size }
    }

    /// Physical half-extent of the screen.
    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Returns `true` if the resolution has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Physical position of the center of pixel `(x, y)`.
    ///
    /// Row 0 maps to `-size.y / 2`: the vertical axis is not flipped.
    ///
    /// ```rust
    /// use lfd_core::{ScreenGeometry, Vec2, Vec3};
    ///
    /// let screen = ScreenGeometry::new(2, 1, Vec2::new(1000.0, 1.0));
    /// assert_eq!(screen.pixel_center(0, 0), Vec3::new(-250.0, 0.0, 0.0));
    /// assert_eq!(screen.pixel_center(1, 0), Vec3::new(250.0, 0.0, 0.0));
    /// ```
    #[inline]
    pub fn pixel_center(&self, x: usize, y: usize) -> Vec3 {
        let start = -self.half_size();
        Vec3::new(
            start.x + self.size.x * (x as f32 + 0.5) / self.width as f32,
            start.y + self.size.y * (y as f32 + 0.5) / self.height as f32,
            0.0,
        )
    }

    /// Physical position of pixel `(x, y)` with row 0 at the top of the screen.
    ///
    /// Used by renderers that write images in display order.
    #[inline]
    pub fn pixel_center_flipped(&self, x: usize, y: usize) -> Vec3 {
        self.pixel_center(x, self.height - 1 - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pixel_centers_span_screen() {
        let screen = ScreenGeometry::new(10, 4, Vec2::new(100.0, 40.0));
        let first = screen.pixel_center(0, 0);
        let last = screen.pixel_center(9, 3);
        assert_relative_eq!(first.x, -45.0);
        assert_relative_eq!(first.y, -15.0);
        assert_relative_eq!(last.x, 45.0);
        assert_relative_eq!(last.y, 15.0);
        assert_eq!(first.z, 0.0);
    }

    #[test]
    fn test_flipped_rows() {
        let screen = ScreenGeometry::new(2, 3, Vec2::new(2.0, 3.0));
        assert_eq!(screen.pixel_center_flipped(0, 0), screen.pixel_center(0, 2));
        assert_eq!(screen.pixel_center_flipped(1, 2), screen.pixel_center(1, 0));
    }
}
