// Re-export glam for convenience
pub use glam::*;

mod ray;
pub use ray::Ray;

/// Tolerance used by the intersection engine for front-face culling and
/// surface matching. Chosen large enough to suppress self-intersection of
/// secondary rays that originate exactly on a surface.
pub const EPS: f32 = 1e-4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_cross() {
        let x = Vec3::X;
        let y = Vec3::Y;
        assert_eq!(x.cross(y), Vec3::Z);
    }
}
