//! Axis-aligned cuboid primitive.

use prism_math::{Ray, Vec3, EPS};

/// The six fixed outward face normals, paired per axis.
const NORMALS: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

/// An axis-aligned box given by center and full extents along x, y, z.
#[derive(Debug, Clone)]
pub struct Cuboid {
    center: Vec3,
    half: Vec3,
}

impl Cuboid {
    /// `length`, `height`, `width` are the full extents along x, y, z.
    pub fn new(center: Vec3, length: f32, height: f32, width: f32) -> Self {
        Self {
            center,
            half: Vec3::new(length, height, width) / 2.0,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> f32 {
        let mut best = f32::INFINITY;
        for (i, &n) in NORMALS.iter().enumerate() {
            let denom = ray.direction.dot(n);
            if denom > -EPS {
                continue;
            }
            let axis = i / 2;
            let face_point = self.center + n * self.half[axis];
            let t = (face_point - ray.origin).dot(n) / denom;
            if t <= 0.0 || t >= best {
                continue;
            }
            let offset = (ray.at(t) - self.center).abs();
            if offset.x <= self.half.x + EPS
                && offset.y <= self.half.y + EPS
                && offset.z <= self.half.z + EPS
            {
                best = t;
            }
        }
        best
    }

    /// Normal of the face whose plane contains `point` within tolerance,
    /// checked in fixed x, y, z order. Points matching no face (corners,
    /// off-surface queries) fall back to the axis with the smallest gap
    /// between |offset| and the half-extent, signed by the offset.
    pub fn closest_normal(&self, point: Vec3) -> Vec3 {
        let offset = point - self.center;
        for axis in 0..3 {
            if (offset[axis] - self.half[axis]).abs() < EPS {
                return NORMALS[axis * 2];
            }
            if (offset[axis] + self.half[axis]).abs() < EPS {
                return NORMALS[axis * 2 + 1];
            }
        }

        let mut nearest_axis = 0;
        let mut nearest_gap = f32::INFINITY;
        for axis in 0..3 {
            let gap = (offset[axis].abs() - self.half[axis]).abs();
            if gap < nearest_gap {
                nearest_gap = gap;
                nearest_axis = axis;
            }
        }
        if offset[nearest_axis] >= 0.0 {
            NORMALS[nearest_axis * 2]
        } else {
            NORMALS[nearest_axis * 2 + 1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_near_face_through_center() {
        let cuboid = Cuboid::new(Vec3::ZERO, 2.0, 4.0, 6.0);
        // Along -Z through the center: near face is at z = 3.
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);

        assert!((cuboid.intersect(&ray) - 7.0).abs() < 1e-4);

        // Along +X through the center: near face is at x = -1.
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X);
        assert!((cuboid.intersect(&ray) - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_miss_beside_box() {
        let cuboid = Cuboid::new(Vec3::ZERO, 2.0, 2.0, 2.0);
        let ray = Ray::new(Vec3::new(5.0, 0.0, 10.0), Vec3::NEG_Z);

        assert_eq!(cuboid.intersect(&ray), f32::INFINITY);
    }

    #[test]
    fn test_face_normals() {
        let cuboid = Cuboid::new(Vec3::new(1.0, 2.0, 3.0), 2.0, 2.0, 2.0);

        assert_eq!(cuboid.closest_normal(Vec3::new(2.0, 2.0, 3.0)), Vec3::X);
        assert_eq!(cuboid.closest_normal(Vec3::new(0.0, 2.0, 3.0)), Vec3::NEG_X);
        assert_eq!(cuboid.closest_normal(Vec3::new(1.0, 3.0, 3.0)), Vec3::Y);
        assert_eq!(cuboid.closest_normal(Vec3::new(1.0, 2.0, 2.0)), Vec3::NEG_Z);
    }

    #[test]
    fn test_corner_falls_back_deterministically() {
        let cuboid = Cuboid::new(Vec3::ZERO, 2.0, 2.0, 2.0);
        // Exact corner matches the +x face first by fixed axis order.
        let n = cuboid.closest_normal(Vec3::new(1.0, 1.0, 1.0));

        assert_eq!(n, Vec3::X);
    }

    #[test]
    fn test_off_surface_fallback() {
        let cuboid = Cuboid::new(Vec3::ZERO, 2.0, 2.0, 2.0);
        // Beyond the -y face but within no face tolerance.
        let n = cuboid.closest_normal(Vec3::new(0.1, -1.5, 0.2));

        assert_eq!(n, Vec3::NEG_Y);
    }
}
