//! Prism Core - geometry and scene aggregation.
//!
//! This crate provides:
//!
//! - **Shape primitives**: `Plane`, `Sphere`, `Tetrahedron`, `Cuboid`
//!   behind the closed `Shape` enum, each answering ray-intersection and
//!   surface-normal queries
//! - **Scene aggregate**: `Scene` owning primitives, named materials,
//!   point lights and the ambient term, with the brute-force nearest-hit
//!   query used by the light transport code
//!
//! Intersection is a one-sided (back-face-culled) test consistent with
//! outward normals; misses are reported as `f32::INFINITY`, never as an
//! error or a panic.

pub mod light;
pub mod material;
pub mod scene;
pub mod shapes;

pub use light::PointLight;
pub use material::{Color, Material, MaterialId};
pub use scene::{Hit, Primitive, Scene, SceneError};
pub use shapes::{Cuboid, Plane, Shape, Sphere, Tetrahedron};

/// Re-export common math types from prism_math
pub use prism_math::{Ray, Vec3, EPS};
