//! Surface materials.

use glam::Vec4;
use lfd_core::Color;

/// Phong-style surface with reflection and refraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Index of refraction of the medium inside the surface.
    pub refractive_index: f32,
    /// Weights of diffuse, specular, reflected and refracted light.
    pub albedo: Vec4,
    /// Diffuse color.
    pub diffuse_color: Color,
    /// Phong specular exponent.
    pub specular_exponent: f32,
}

impl Default for Material {
    /// Purely diffuse black.
    fn default() -> Self {
        Self::new(1.0, Vec4::new(1.0, 0.0, 0.0, 0.0), Color::ZERO, 0.0)
    }
}

impl Material {
    /// Creates a material.
    pub const fn new(
        refractive_index: f32,
        albedo: Vec4,
        diffuse_color: Color,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// Off-white, mostly diffuse.
    pub const IVORY: Self = Self::new(
        1.0,
        Vec4::new(0.6, 0.3, 0.1, 0.0),
        Color::new(0.4, 0.4, 0.3),
        50.0,
    );

    /// Clear, mostly refractive.
    pub const GLASS: Self = Self::new(
        1.5,
        Vec4::new(0.0, 0.5, 0.1, 0.8),
        Color::new(0.6, 0.7, 0.8),
        125.0,
    );

    /// Dull red.
    pub const RED_RUBBER: Self = Self::new(
        1.0,
        Vec4::new(0.9, 0.1, 0.0, 0.0),
        Color::new(0.3, 0.1, 0.1),
        10.0,
    );

    /// Polished mirror.
    pub const MIRROR: Self = Self::new(
        1.0,
        Vec4::new(0.0, 10.0, 0.8, 0.0),
        Color::new(1.0, 1.0, 1.0),
        1425.0,
    );
}
