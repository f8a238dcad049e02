//! Evenly spaced view rows for sample descriptors.
//!
//! ```rust
//! use lfd_model::UniformLayout;
//!
//! let row = UniformLayout::new(3, -100.0, 100.0, 0.0, -700.0);
//! let (xs, _, zs) = row.axes();
//! assert_eq!(xs, vec![-100.0, 0.0, 100.0]);
//! assert_eq!(zs, vec![-700.0; 3]);
//! ```

/// A horizontal row of `count` views spread evenly over `[x_min, x_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformLayout {
    /// Number of views.
    pub count: usize,
    /// Leftmost x.
    pub x_min: f32,
    /// Rightmost x.
    pub x_max: f32,
    /// Shared y.
    pub y: f32,
    /// Shared z (sign decides the screen side).
    pub z: f32,
}

impl UniformLayout {
    /// Creates a layout.
    pub fn new(count: usize, x_min: f32, x_max: f32, y: f32, z: f32) -> Self {
        Self { count, x_min, x_max, y, z }
    }

    /// Per-axis coordinate lists in id order.
    ///
    /// A single view sits at the middle of the x range.
    pub fn axes(&self) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
        let xs = (0..self.count)
            .map(|id| {
                let ratio = if self.count > 1 {
                    id as f32 / (self.count - 1) as f32
                } else {
                    0.5
                };
                self.x_min + ratio * (self.x_max - self.x_min)
            })
            .collect();
        (xs, vec![self.y; self.count], vec![self.z; self.count])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_view_centered() {
        let (xs, _, _) = UniformLayout::new(1, -10.0, 30.0, 0.0, 1.0).axes();
        assert_eq!(xs, vec![10.0]);
    }

    #[test]
    fn test_endpoints_exact() {
        let (xs, ys, _) = UniformLayout::new(21, -2000.0, 2000.0, 5.0, 2000.0).axes();
        assert_eq!(xs.len(), 21);
        assert_eq!(xs[0], -2000.0);
        assert_eq!(xs[20], 2000.0);
        assert_eq!(xs[10], 0.0);
        assert!(ys.iter().all(|&y| y == 5.0));
    }
}
