//! Shape primitives for ray intersection.
//!
//! The primitive set is closed: the `Shape` enum tags the four supported
//! geometries and dispatches the shared capability set (`intersect`,
//! `closest_normal`) over them. Every stored normal is unit length and
//! points outward from the solid (or defines the positive side for planes).

mod cuboid;
mod plane;
mod sphere;
mod tetrahedron;

pub use cuboid::Cuboid;
pub use plane::Plane;
pub use sphere::Sphere;
pub use tetrahedron::Tetrahedron;

use prism_math::{Ray, Vec3};

/// One of the supported shape primitives.
#[derive(Debug, Clone)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Tetrahedron(Tetrahedron),
    Cuboid(Cuboid),
}

impl Shape {
    /// Smallest strictly positive parametric distance at which `ray` meets
    /// the surface, or `f32::INFINITY` if no valid forward hit exists.
    ///
    /// The test is one-sided: rays travelling with the outward normal
    /// (back-face hits) are treated as misses.
    pub fn intersect(&self, ray: &Ray) -> f32 {
        match self {
            Shape::Plane(plane) => plane.intersect(ray),
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Tetrahedron(tet) => tet.intersect(ray),
            Shape::Cuboid(cuboid) => cuboid.intersect(ray),
        }
    }

    /// Unit outward normal for a point on (or within tolerance of) the
    /// surface. Points that match no surface feature fall back to the
    /// nearest face's normal, deterministically.
    pub fn closest_normal(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Plane(plane) => plane.closest_normal(point),
            Shape::Sphere(sphere) => sphere.closest_normal(point),
            Shape::Tetrahedron(tet) => tet.closest_normal(point),
            Shape::Cuboid(cuboid) => cuboid.closest_normal(point),
        }
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Tetrahedron> for Shape {
    fn from(tet: Tetrahedron) -> Self {
        Shape::Tetrahedron(tet)
    }
}

impl From<Cuboid> for Shape {
    fn from(cuboid: Cuboid) -> Self {
        Shape::Cuboid(cuboid)
    }
}
