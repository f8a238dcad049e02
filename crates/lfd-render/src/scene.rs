//! Scene description: spheres, point lights and a checkerboard floor.

use lfd_core::{Color, Vec3};
use tracing::debug;

use crate::{Material, RenderError, RenderResult};

/// Default recursion limit for reflected and refracted rays.
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Offset applied to secondary ray origins to escape the surface they start on.
pub const SURFACE_EPSILON: f32 = 0.05;

/// Hits farther than this count as misses.
pub const MAX_HIT_DISTANCE: f32 = 100_000.0;

/// A sphere with a uniform material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center.
    pub center: Vec3,
    /// Radius.
    pub radius: f32,
    /// Surface material.
    pub material: Material,
}

impl Sphere {
    /// Creates a sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Distance along the unit ray `origin + t * dir` to the nearest
    /// intersection in front of the origin.
    pub fn ray_intersect(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        let l = self.center - origin;
        let tca = l.dot(dir);
        let d2 = l.length_squared() - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }
        let thc = (r2 - d2).sqrt();
        let near = tca - thc;
        let far = tca + thc;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

/// Point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Position.
    pub position: Vec3,
    /// Intensity.
    pub intensity: f32,
}

impl Light {
    /// Creates a light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Horizontal checkerboard square centered on the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkerboard {
    /// Height of the plane.
    pub y: f32,
    /// Half the side of the square, in x and z.
    pub half_extent: f32,
    /// Side of one tile.
    pub tile: f32,
    /// Color of odd tiles.
    pub odd: Color,
    /// Color of even tiles.
    pub even: Color,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            y: -200.0,
            half_extent: 1000.0,
            tile: 200.0,
            odd: Color::new(0.3, 0.3, 0.3),
            even: Color::new(0.3, 0.2, 0.1),
        }
    }
}

impl Checkerboard {
    /// Distance along `dir` to the board, if the ray hits inside it.
    pub fn ray_intersect(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        if dir.y.abs() <= 1e-3 {
            return None;
        }
        let d = (self.y - origin.y) / dir.y;
        let pt = origin + dir * d;
        (d > 0.0 && pt.x.abs() < self.half_extent && pt.z.abs() < self.half_extent).then_some(d)
    }

    /// Tile color at a point on the board.
    pub fn color_at(&self, point: Vec3) -> Color {
        // Offset keeps the truncated x index positive across the board
        let ix = (point.x / self.tile + 1000.0) as i32;
        let iz = (point.z / self.tile) as i32;
        if (ix + iz) & 1 != 0 { self.odd } else { self.even }
    }
}

/// Everything the tracer needs besides the rays.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    floor: Option<Checkerboard>,
    background: Color,
    max_depth: u32,
}

impl Default for Scene {
    /// Empty scene with a checkerboard floor.
    fn default() -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            floor: Some(Checkerboard::default()),
            background: Color::new(0.2, 0.7, 0.8),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Four spheres over the checkerboard, lit by three lights.
    pub fn sample() -> Self {
        let mut scene = Self::new();
        scene.add_sphere(Sphere::new(Vec3::new(-180.0, -80.0, -40.0), 80.0, Material::IVORY));
        scene.add_sphere(Sphere::new(Vec3::new(-100.0, -100.0, 120.0), 80.0, Material::GLASS));
        scene.add_sphere(Sphere::new(Vec3::new(0.0, -60.0, -120.0), 120.0, Material::RED_RUBBER));
        scene.add_sphere(Sphere::new(Vec3::new(300.0, 120.0, -200.0), 160.0, Material::MIRROR));

        scene.add_light(Light::new(Vec3::new(-1000.0, 1000.0, 1000.0), 1.5));
        scene.add_light(Light::new(Vec3::new(1500.0, 2500.0, -1200.0), 1.8));
        scene.add_light(Light::new(Vec3::new(1500.0, 1000.0, 1500.0), 1.7));
        debug!(spheres = scene.spheres.len(), lights = scene.lights.len(), "sample scene");
        scene
    }

    /// Adds a sphere.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Adds a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Removes every sphere.
    pub fn remove_all_geometry(&mut self) {
        self.spheres.clear();
    }

    /// Removes every light.
    pub fn remove_all_lights(&mut self) {
        self.lights.clear();
    }

    /// Replaces the floor; `None` removes it.
    pub fn set_floor(&mut self, floor: Option<Checkerboard>) {
        self.floor = floor;
    }

    /// Sets the color of rays that hit nothing.
    pub fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    /// Sets the recursion limit for secondary rays.
    ///
    /// # Errors
    ///
    /// Rejects negative depths and leaves the current limit unchanged.
    pub fn set_max_depth(&mut self, depth: i32) -> RenderResult<()> {
        self.max_depth = u32::try_from(depth).map_err(|_| {
            RenderError::InvalidParameter(format!("max ray depth must be >= 0, got {}", depth))
        })?;
        Ok(())
    }

    /// Spheres.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Lights.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Floor.
    pub fn floor(&self) -> Option<&Checkerboard> {
        self.floor.as_ref()
    }

    /// Background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Recursion limit.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_hit_from_outside() {
        let s = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, Material::default());
        let t = s.ray_intersect(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        assert_relative_eq!(t, 8.0);
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let s = Sphere::new(Vec3::ZERO, 3.0, Material::default());
        assert_relative_eq!(s.ray_intersect(Vec3::ZERO, Vec3::X).unwrap(), 3.0);
    }

    #[test]
    fn test_sphere_miss_and_behind() {
        let s = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, Material::default());
        assert!(s.ray_intersect(Vec3::ZERO, Vec3::X).is_none());
        assert!(s.ray_intersect(Vec3::ZERO, Vec3::Z).is_none());
    }

    #[test]
    fn test_checkerboard_bounds() {
        let board = Checkerboard::default();
        let down = Vec3::NEG_Y;
        assert_relative_eq!(board.ray_intersect(Vec3::new(0.0, 0.0, 0.0), down).unwrap(), 200.0);
        assert!(board.ray_intersect(Vec3::new(1500.0, 0.0, 0.0), down).is_none());
        assert!(board.ray_intersect(Vec3::ZERO, Vec3::Y).is_none());
        assert!(board.ray_intersect(Vec3::ZERO, Vec3::X).is_none());
    }

    #[test]
    fn test_checkerboard_alternates() {
        let board = Checkerboard::default();
        let a = board.color_at(Vec3::new(50.0, -200.0, 50.0));
        let b = board.color_at(Vec3::new(250.0, -200.0, 50.0));
        let c = board.color_at(Vec3::new(250.0, -200.0, 250.0));
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_max_depth() {
        let mut scene = Scene::new();
        assert_eq!(scene.max_depth(), DEFAULT_MAX_DEPTH);
        assert!(scene.set_max_depth(-1).is_err());
        assert_eq!(scene.max_depth(), DEFAULT_MAX_DEPTH);
        scene.set_max_depth(0).unwrap();
        assert_eq!(scene.max_depth(), 0);
    }

    #[test]
    fn test_sample_scene() {
        let scene = Scene::sample();
        assert_eq!(scene.spheres().len(), 4);
        assert_eq!(scene.lights().len(), 3);
        assert!(scene.floor().is_some());
    }

    #[test]
    fn test_remove_all() {
        let mut scene = Scene::sample();
        scene.remove_all_geometry();
        scene.remove_all_lights();
        assert!(scene.spheres().is_empty());
        assert!(scene.lights().is_empty());
    }
}
