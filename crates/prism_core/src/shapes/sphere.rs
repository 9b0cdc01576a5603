//! Sphere primitive.

use prism_math::{Ray, Vec3};

/// A sphere with center and radius.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Ray-sphere intersection, assuming a unit-length ray direction.
    ///
    /// Solves |O + tD - C|^2 = r^2 with a = 1: b = D.(O-C),
    /// c = |O-C|^2 - r^2, delta = b^2 - c. A ray starting inside the
    /// sphere reports the exit distance.
    pub fn intersect(&self, ray: &Ray) -> f32 {
        let oc = ray.origin - self.center;
        let b = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let delta = b * b - c;
        if delta < 0.0 {
            return f32::INFINITY;
        }

        let sqrt_delta = delta.sqrt();
        let t1 = -b - sqrt_delta;
        let t2 = -b + sqrt_delta;

        if t2 < 0.0 {
            f32::INFINITY
        } else if t1 < 0.0 {
            // Origin is inside the sphere.
            t2
        } else {
            t1
        }
    }

    pub fn closest_normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_head_on() {
        // Ray from (0,0,5) towards -Z hits a radius-r sphere at t = 5 - r.
        for radius in [0.5, 1.0, 2.0] {
            let sphere = Sphere::new(Vec3::ZERO, radius);
            let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);

            assert!((sphere.intersect(&ray) - (5.0 - radius)).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Y);

        assert_eq!(sphere.intersect(&ray), f32::INFINITY);
    }

    #[test]
    fn test_origin_inside_returns_exit() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert!((sphere.intersect(&ray) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);

        assert_eq!(sphere.intersect(&ray), f32::INFINITY);
    }

    #[test]
    fn test_normal_points_outward() {
        let sphere = Sphere::new(Vec3::new(1.0, 0.0, 0.0), 1.0);
        let n = sphere.closest_normal(Vec3::new(2.0, 0.0, 0.0));

        assert!((n - Vec3::X).length() < 1e-6);
    }
}
