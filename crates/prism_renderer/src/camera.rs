//! Pinhole camera for ray generation.

use prism_math::{Ray, Vec3};

/// Look-at pinhole camera mapping normalized image-plane coordinates to
/// world-space rays.
#[derive(Debug, Clone)]
pub struct Camera {
    center: Vec3,
    upper_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Build a camera at `look_from` aimed at `look_at`.
    ///
    /// `vfov` is the vertical field of view in degrees; `aspect` is
    /// width / height.
    pub fn new(aspect: f32, vfov: f32, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        let h = (vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * aspect;

        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let horizontal = viewport_width * u;
        // Points down so that increasing v walks down the image, matching
        // the row-major framebuffer layout.
        let vertical = -viewport_height * v;
        let upper_left = look_from - w - horizontal / 2.0 - vertical / 2.0;

        Self {
            center: look_from,
            upper_left,
            horizontal,
            vertical,
        }
    }

    /// Generate the ray through normalized image-plane position (u, v),
    /// u, v in [0, 1), v increasing downward. The returned direction is
    /// unit length.
    pub fn generate_ray(&self, u: f32, v: f32) -> Ray {
        let target = self.upper_left + u * self.horizontal + v * self.vertical;
        Ray::new_normalized(self.center, target - self.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_aims_at_target() {
        let camera = Camera::new(
            1.0,
            45.0,
            Vec3::new(0.0, 1.0, 5.0),
            Vec3::new(0.0, 1.0, -1.0),
            Vec3::Y,
        );

        let ray = camera.generate_ray(0.5, 0.5);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-5);
        assert_eq!(ray.origin, Vec3::new(0.0, 1.0, 5.0));
    }

    #[test]
    fn test_v_walks_down_the_image() {
        let camera = Camera::new(1.0, 45.0, Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);

        let top = camera.generate_ray(0.5, 0.1);
        let bottom = camera.generate_ray(0.5, 0.9);
        assert!(top.direction.y > bottom.direction.y);
    }

    #[test]
    fn test_directions_are_unit_length() {
        let camera = Camera::new(4.0 / 3.0, 45.0, Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);

        for (u, v) in [(0.0, 0.0), (0.99, 0.01), (0.25, 0.75)] {
            let ray = camera.generate_ray(u, v);
            assert!((ray.direction.length() - 1.0).abs() < 1e-5);
        }
    }
}
