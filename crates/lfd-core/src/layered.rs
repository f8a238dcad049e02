//! Light-field image stacks.
//!
//! A [`LayeredImage`] holds one [`Image`] per view (camera or projector), all
//! sharing one resolution. Layer ids follow the order of the view positions in
//! the owning display descriptor.
//!
//! # Lifecycle
//!
//! Stacks start empty, are sized with [`LayeredImage::resize`] (or built with
//! [`LayeredImage::new`]), then populated layer by layer by a renderer, a
//! resampler or a loader.
//!
//! ```rust
//! use lfd_core::{Color, LayeredImage};
//!
//! let mut stack = LayeredImage::new(8, 4, 3);
//! stack.layer_mut(2).fill(Color::ONE);
//! // Out-of-range layer ids clamp to the last layer
//! assert_eq!(stack.at(0, 0, 99), Color::ONE);
//! ```

use crate::{Color, Error, Image, Result};

/// Ordered stack of same-sized color images.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayeredImage {
    layers: Vec<Image>,
    width: usize,
    height: usize,
}

impl LayeredImage {
    /// Creates a black stack of `depth` layers.
    ///
    /// Any zero argument yields an empty stack.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        let mut stack = Self::default();
        stack.resize(width, height, depth);
        stack
    }

    /// Builds a stack from already populated layers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if any layer differs in size from
    /// the first, and [`Error::InvalidDimensions`] for empty layers.
    pub fn from_layers(layers: Vec<Image>) -> Result<Self> {
        let Some(first) = layers.first() else {
            return Ok(Self::default());
        };
        let dims = first.dimensions();
        if first.is_empty() {
            return Err(Error::invalid_dimensions(dims.0, dims.1, "empty layer"));
        }
        if let Some(other) = layers.iter().find(|l| l.dimensions() != dims) {
            return Err(Error::dimension_mismatch(dims, other.dimensions()));
        }
        Ok(Self {
            layers,
            width: dims.0,
            height: dims.1,
        })
    }

    /// Resizes to `depth` black layers of `width x height`.
    ///
    /// Requests with any zero argument are ignored.
    pub fn resize(&mut self, width: usize, height: usize, depth: usize) {
        if width == 0 || height == 0 || depth == 0 {
            return;
        }
        self.width = width;
        self.height = height;
        self.layers.resize_with(depth, Image::default);
        for layer in &mut self.layers {
            layer.resize(width, height);
        }
    }

    /// Drops every layer.
    pub fn clear(&mut self) {
        self.layers = Vec::new();
        self.width = 0;
        self.height = 0;
    }

    /// Layer width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Layer height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of layers.
    #[inline]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if the stack has no layers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Checks that the stack is `width x height x depth`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] on resolution mismatch,
    /// [`Error::LayerCountMismatch`] on depth mismatch.
    pub fn expect_shape(&self, width: usize, height: usize, depth: usize) -> Result<()> {
        if (self.width, self.height) != (width, height) {
            return Err(Error::dimension_mismatch(
                (width, height),
                (self.width, self.height),
            ));
        }
        if self.depth() != depth {
            return Err(Error::layer_count_mismatch(depth, self.depth()));
        }
        Ok(())
    }

    #[inline]
    fn clamp_layer(&self, z: i64) -> usize {
        assert!(!self.is_empty(), "layer access on an empty stack");
        z.clamp(0, self.layers.len() as i64 - 1) as usize
    }

    /// Returns layer `z`, clamping the id into range.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[inline]
    pub fn layer(&self, z: i64) -> &Image {
        &self.layers[self.clamp_layer(z)]
    }

    /// Mutable layer `z` with a clamped id.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[inline]
    pub fn layer_mut(&mut self, z: i64) -> &mut Image {
        let z = self.clamp_layer(z);
        &mut self.layers[z]
    }

    /// Pixel `(x, y)` of layer `z`, all three coordinates clamped.
    #[inline]
    pub fn at(&self, x: i64, y: i64, z: i64) -> Color {
        self.layer(z).at(x, y)
    }

    /// All layers in id order.
    pub fn layers(&self) -> &[Image] {
        &self.layers
    }

    /// Mutable layers, for per-layer parallel writes.
    ///
    /// The slice length and layer sizes are fixed; only pixel contents may
    /// change through it.
    pub fn layers_mut(&mut self) -> &mut [Image] {
        &mut self.layers
    }

    /// Consumes the stack and returns its layers.
    pub fn into_layers(self) -> Vec<Image> {
        self.layers
    }
}
