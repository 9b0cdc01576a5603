//! Infinite one-sided plane.

use prism_math::{Ray, Vec3, EPS};

/// An infinite plane through `point` with unit normal `normal`.
///
/// The plane is one-sided: only rays travelling against the normal can hit
/// it, so the normal defines the visible side.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a new plane. The normal is normalized on construction.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    pub fn intersect(&self, ray: &Ray) -> f32 {
        let denom = ray.direction.dot(self.normal);
        // Front-face test: near-parallel and back-facing rays both miss.
        if denom > -EPS {
            return f32::INFINITY;
        }
        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t > 0.0 {
            t
        } else {
            f32::INFINITY
        }
    }

    /// Constant, independent of the queried point.
    pub fn closest_normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_hit() {
        let floor = Plane::new(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Y);

        assert!((floor.intersect(&ray) - 2.0).abs() < 1e-6);
        assert_eq!(floor.closest_normal(Vec3::ZERO), Vec3::Y);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let floor = Plane::new(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);

        assert_eq!(floor.intersect(&ray), f32::INFINITY);
    }

    #[test]
    fn test_back_face_culled() {
        let floor = Plane::new(Vec3::ZERO, Vec3::Y);
        // Ray from below, travelling with the normal.
        let ray = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y);

        assert_eq!(floor.intersect(&ray), f32::INFINITY);
    }

    #[test]
    fn test_behind_origin_misses() {
        let floor = Plane::new(Vec3::ZERO, Vec3::Y);
        // Plane is behind the ray origin.
        let ray = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::NEG_Y);

        assert_eq!(floor.intersect(&ray), f32::INFINITY);
    }
}
