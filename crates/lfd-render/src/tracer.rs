//! Recursive Whitted-style ray casting.

use lfd_core::{Color, Vec3};

use crate::scene::{MAX_HIT_DISTANCE, SURFACE_EPSILON};
use crate::{Material, Scene};

/// Closest surface point along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Intersection point.
    pub point: Vec3,
    /// Unit surface normal.
    pub normal: Vec3,
    /// Material at the point.
    pub material: Material,
}

/// Mirror reflection of `incident` about `normal`.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Snell refraction of unit `incident` through unit `normal`.
///
/// `eta_t` is the index on the far side and `eta_i` on the near side; rays
/// leaving the medium swap them. Total internal reflection yields `+X`, a
/// direction with no physical meaning that keeps the recursion going.
pub fn refract(incident: Vec3, normal: Vec3, eta_t: f32, eta_i: f32) -> Vec3 {
    let cos_i = -incident.dot(normal).clamp(-1.0, 1.0);
    if cos_i < 0.0 {
        return refract(incident, -normal, eta_i, eta_t);
    }
    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        Vec3::X
    } else {
        incident * eta + normal * (eta * cos_i - k.sqrt())
    }
}

/// Offsets `point` off the surface on the side `dir` leaves towards.
#[inline]
fn offset_origin(point: Vec3, normal: Vec3, dir: Vec3) -> Vec3 {
    if dir.dot(normal) < 0.0 {
        point - normal * SURFACE_EPSILON
    } else {
        point + normal * SURFACE_EPSILON
    }
}

impl Scene {
    /// Nearest hit among spheres and the floor.
    pub fn intersect(&self, origin: Vec3, dir: Vec3) -> Option<Hit> {
        let mut nearest = f32::MAX;
        let mut hit = None;

        for sphere in self.spheres() {
            if let Some(t) = sphere.ray_intersect(origin, dir) {
                if t < nearest {
                    nearest = t;
                    let point = origin + dir * t;
                    hit = Some(Hit {
                        point,
                        normal: (point - sphere.center).normalize_or_zero(),
                        material: sphere.material,
                    });
                }
            }
        }

        if let Some(board) = self.floor() {
            if let Some(t) = board.ray_intersect(origin, dir) {
                if t < nearest {
                    nearest = t;
                    let point = origin + dir * t;
                    hit = Some(Hit {
                        point,
                        normal: Vec3::Y,
                        material: Material {
                            diffuse_color: board.color_at(point),
                            ..Material::default()
                        },
                    });
                }
            }
        }

        if nearest < MAX_HIT_DISTANCE { hit } else { None }
    }

    /// Color seen along the unit ray `origin + t * dir`.
    pub fn cast_ray(&self, origin: Vec3, dir: Vec3) -> Color {
        self.trace(origin, dir, 0)
    }

    fn trace(&self, origin: Vec3, dir: Vec3, depth: u32) -> Color {
        if depth > self.max_depth() {
            return self.background();
        }
        let Some(Hit {
            point,
            normal,
            material,
        }) = self.intersect(origin, dir)
        else {
            return self.background();
        };
        let albedo = material.albedo;

        let reflect_color = if albedo.z != 0.0 {
            let reflect_dir = reflect(dir, normal).normalize_or_zero();
            self.trace(offset_origin(point, normal, reflect_dir), reflect_dir, depth + 1)
        } else {
            Color::ZERO
        };
        let refract_color = if albedo.w != 0.0 {
            let refract_dir = refract(dir, normal, material.refractive_index, 1.0).normalize_or_zero();
            self.trace(offset_origin(point, normal, refract_dir), refract_dir, depth + 1)
        } else {
            Color::ZERO
        };

        let mut diffuse = 0.0;
        let mut specular = 0.0;
        for light in self.lights() {
            let to_light = light.position - point;
            let light_distance = to_light.length();
            let light_dir = to_light.normalize_or_zero();

            let shadow_origin = offset_origin(point, normal, light_dir);
            let shadowed = self
                .intersect(shadow_origin, light_dir)
                .is_some_and(|h| (h.point - shadow_origin).length() < light_distance);
            if shadowed {
                continue;
            }

            diffuse += light.intensity * light_dir.dot(normal).max(0.0);
            specular += (-reflect(-light_dir, normal).dot(dir))
                .max(0.0)
                .powf(material.specular_exponent)
                * light.intensity;
        }

        material.diffuse_color * diffuse * albedo.x
            + Color::ONE * specular * albedo.y
            + reflect_color * albedo.z
            + refract_color * albedo.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Light, Sphere};
    use approx::assert_relative_eq;
    use glam::Vec4;

    #[test]
    fn test_reflect() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_refract_head_on_passes_straight() {
        let r = refract(Vec3::NEG_Z, Vec3::Z, 1.5, 1.0);
        assert_relative_eq!(r.z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(r.x, 0.0);
    }

    #[test]
    fn test_refract_bends_towards_normal() {
        let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = refract(incident, Vec3::Y, 1.5, 1.0);
        // sin(theta_t) = sin(45 deg) / 1.5
        assert_relative_eq!(r.x / r.length(), 0.5f32.sqrt() / 1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_total_internal_reflection() {
        // Leaving glass at a grazing angle
        let incident = Vec3::new(0.95, 0.312_25, 0.0).normalize();
        assert_eq!(refract(incident, Vec3::Y, 1.5, 1.0), Vec3::X);
    }

    #[test]
    fn test_empty_scene_is_background() {
        let mut scene = Scene::new();
        scene.set_floor(None);
        assert_eq!(scene.cast_ray(Vec3::ZERO, Vec3::NEG_Z), Color::new(0.2, 0.7, 0.8));
    }

    #[test]
    fn test_lit_diffuse_floor() {
        let mut scene = Scene::new();
        scene.add_light(Light::new(Vec3::new(50.0, 1000.0, 50.0), 2.0));
        let c = scene.cast_ray(Vec3::new(50.0, 0.0, 50.0), Vec3::NEG_Y);
        // Default material: albedo (1, 0, 0, 0), light straight above
        let board = scene.floor().unwrap();
        let expected = board.color_at(Vec3::new(50.0, -200.0, 50.0)) * 2.0;
        assert_relative_eq!(c.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(c.z, expected.z, epsilon = 1e-5);
    }

    #[test]
    fn test_shadowed_floor_is_black() {
        let mut scene = Scene::new();
        scene.add_light(Light::new(Vec3::new(0.0, 1000.0, 0.0), 2.0));
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 300.0, 0.0),
            50.0,
            Material::RED_RUBBER,
        ));
        let c = scene.cast_ray(Vec3::new(0.0, 0.0, 400.0), Vec3::new(0.0, -200.0, -400.0).normalize());
        assert_eq!(c, Color::ZERO);
    }

    #[test]
    fn test_depth_zero_mirror_sees_background() {
        let mut scene = Scene::new();
        scene.set_floor(None);
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -100.0),
            10.0,
            Material::new(1.0, Vec4::new(0.0, 0.0, 1.0, 0.0), Color::ZERO, 1.0),
        ));
        scene.set_max_depth(0).unwrap();
        // The reflected ray leaves at depth 1, beyond the limit
        let c = scene.cast_ray(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(c, scene.background());
    }

    #[test]
    fn test_closest_sphere_wins() {
        let mut scene = Scene::new();
        scene.set_floor(None);
        let near = Material::new(1.0, Vec4::ZERO, Color::ONE, 1.0);
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, -200.0), 10.0, Material::default()));
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, -50.0), 10.0, near));
        let hit = scene.intersect(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        assert_relative_eq!(hit.point.z, -40.0);
        assert_eq!(hit.material, near);
    }
}
