//! Single-layer color buffer.
//!
//! [`Image`] is one view of a light field: a dense grid of RGB float colors.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order:
//!
//! ```text
//! Memory: [C C C C ...]  <- Row 0
//!         [C C C C ...]  <- Row 1
//!         ...
//! ```
//!
//! # Clamped Access
//!
//! Reads and writes through [`Image::at`] / [`Image::set`] clamp the coordinates
//! into the valid range instead of failing. Resampling code relies on this when
//! bracketing indices touch the image border.
//!
//! ```rust
//! use lfd_core::{Color, Image};
//!
//! let mut img = Image::new(4, 2);
//! img.set(3, 1, Color::new(1.0, 0.5, 0.25));
//! assert_eq!(img.at(10, 10), Color::new(1.0, 0.5, 0.25));
//! ```

use crate::{Color, Error, Result};

/// Owned RGB float image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    data: Vec<Color>,
    width: usize,
    height: usize,
}

impl Image {
    /// Creates a new image filled with black.
    ///
    /// A zero width or height yields an empty image.
    pub fn new(width: usize, height: usize) -> Self {
        let mut img = Self::default();
        img.resize(width, height);
        img
    }

    /// Creates an image filled with a single color.
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        let mut img = Self::new(width, height);
        img.fill(color);
        img
    }

    /// Creates an image from existing row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<Color>) -> Result<Self> {
        let Some(expected) = width.checked_mul(height) else {
            return Err(Error::invalid_dimensions(width, height, "pixel count overflows"));
        };
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, data.len()),
            ));
        }
        if expected == 0 {
            return Ok(Self::default());
        }
        Ok(Self { data, width, height })
    }

    /// Resizes the image and resets every pixel to black.
    ///
    /// Requests with a zero width or height are ignored and leave the image
    /// untouched.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.resize(width * height, Color::ZERO);
    }

    /// Drops all pixel data.
    pub fn clear(&mut self) {
        self.data = Vec::new();
        self.width = 0;
        self.height = 0;
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns `true` if the image holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw pixel slice in row-major order.
    #[inline]
    pub fn data(&self) -> &[Color] {
        &self.data
    }

    /// Mutable raw pixel slice in row-major order.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Color] {
        &mut self.data
    }

    /// Consumes the image and returns its pixels.
    pub fn into_data(self) -> Vec<Color> {
        self.data
    }

    #[inline]
    fn clamped_offset(&self, x: i64, y: i64) -> usize {
        assert!(!self.is_empty(), "pixel access on an empty image");
        let cx = x.clamp(0, self.width as i64 - 1) as usize;
        let cy = y.clamp(0, self.height as i64 - 1) as usize;
        cy * self.width + cx
    }

    /// Returns the pixel at `(x, y)`, clamping coordinates into range.
    ///
    /// # Panics
    ///
    /// Panics if the image is empty.
    #[inline]
    pub fn at(&self, x: i64, y: i64) -> Color {
        self.data[self.clamped_offset(x, y)]
    }

    /// Mutable reference to the pixel at `(x, y)` with clamped coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the image is empty.
    #[inline]
    pub fn at_mut(&mut self, x: i64, y: i64) -> &mut Color {
        let offset = self.clamped_offset(x, y);
        &mut self.data[offset]
    }

    /// Writes the pixel at `(x, y)` with clamped coordinates.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, color: Color) {
        *self.at_mut(x, y) = color;
    }

    /// Fills every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        self.data.iter_mut().for_each(|px| *px = color);
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.data.chunks(self.width.max(1))
    }

    /// Mutable scanlines, suitable for `par_chunks_mut`-style dispatch.
    ///
    /// Each chunk is exactly one row of `width` pixels.
    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, Color> {
        let width = self.width.max(1);
        self.data.chunks_mut(width)
    }
}
