//! Tetrahedron primitive.

use prism_math::{Ray, Vec3, EPS};

/// Vertex indices of the four triangular faces; the fourth entry is the
/// vertex opposite the face, used to orient the normal outward.
const FACES: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 0, 1, 2], [2, 3, 0, 1], [1, 2, 3, 0]];

/// A tetrahedron given by four vertices, with outward unit face normals
/// precomputed at construction.
#[derive(Debug, Clone)]
pub struct Tetrahedron {
    vertices: [Vec3; 4],
    normals: [Vec3; 4],
}

impl Tetrahedron {
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        let vertices = [p0, p1, p2, p3];
        let mut normals = [Vec3::ZERO; 4];
        for (i, face) in FACES.iter().enumerate() {
            let a = vertices[face[1]] - vertices[face[0]];
            let b = vertices[face[2]] - vertices[face[0]];
            let mut n = a.cross(b).normalize();
            // Flip if the normal points towards the opposite vertex.
            if (vertices[face[0]] - vertices[face[3]]).dot(n) < 0.0 {
                n = -n;
            }
            normals[i] = n;
        }
        Self { vertices, normals }
    }

    /// True if `point`, assumed to lie on face `i`'s plane, is inside the
    /// face triangle. Each edge's cross product with the point offset must
    /// agree with the triangle's winding normal; testing against the
    /// winding (rather than the outward normal, which may be flipped, or a
    /// single projected coordinate) works for every face orientation.
    fn face_contains(&self, i: usize, point: Vec3) -> bool {
        let face = &FACES[i];
        let (a, b, c) = (
            self.vertices[face[0]],
            self.vertices[face[1]],
            self.vertices[face[2]],
        );
        let winding = (b - a).cross(c - a).normalize();
        for (v0, v1) in [(a, b), (b, c), (c, a)] {
            if (v1 - v0).cross(point - v0).dot(winding) < -EPS {
                return false;
            }
        }
        true
    }

    pub fn intersect(&self, ray: &Ray) -> f32 {
        let mut best = f32::INFINITY;
        for i in 0..4 {
            let n = self.normals[i];
            let denom = ray.direction.dot(n);
            if denom > -EPS {
                continue;
            }
            let t = (self.vertices[FACES[i][0]] - ray.origin).dot(n) / denom;
            if t <= 0.0 || t >= best {
                continue;
            }
            if self.face_contains(i, ray.at(t)) {
                best = t;
            }
        }
        best
    }

    /// Normal of the face containing `point`. Points matching no face
    /// within tolerance fall back to the face whose plane is nearest, so
    /// edges and vertices still get a deterministic outward normal.
    pub fn closest_normal(&self, point: Vec3) -> Vec3 {
        let mut nearest = self.normals[0];
        let mut nearest_dist = f32::INFINITY;
        for i in 0..4 {
            let n = self.normals[i];
            let dist = (point - self.vertices[FACES[i][0]]).dot(n).abs();
            if dist < EPS && self.face_contains(i, point) {
                return n;
            }
            if dist < nearest_dist {
                nearest_dist = dist;
                nearest = n;
            }
        }
        nearest
    }
}
