//! Scene aggregation and the brute-force nearest-hit query.

use std::collections::HashMap;

use prism_math::{Ray, Vec3};
use thiserror::Error;

use crate::light::PointLight;
use crate::material::{Color, Material, MaterialId};
use crate::shapes::Shape;

/// Errors raised while assembling a scene.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("unknown material '{0}'")]
    UnknownMaterial(String),
}

/// A shape paired with the handle of its material in the scene table.
#[derive(Debug, Clone)]
pub struct Primitive {
    pub shape: Shape,
    pub material: MaterialId,
}

/// A resolved nearest intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Parametric distance along the ray.
    pub t: f32,
    /// World-space intersection point.
    pub point: Vec3,
    /// Unit outward normal at the intersection point.
    pub normal: Vec3,
    pub material: MaterialId,
}

/// The static scene: primitives in insertion order, the material table
/// with its name index, point lights and the ambient term.
///
/// Built once at session start and read-only afterwards, so it can be
/// shared freely across render workers.
pub struct Scene {
    primitives: Vec<Primitive>,
    materials: Vec<Material>,
    names: HashMap<String, MaterialId>,
    pub lights: Vec<PointLight>,
    pub ambient: Color,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            materials: Vec::new(),
            names: HashMap::new(),
            lights: Vec::new(),
            ambient: Color::ZERO,
        }
    }

    /// Register a material under `name` and return its handle.
    ///
    /// Re-registering a name replaces the stored material in place: the
    /// handle stays valid and primitives already referencing it pick up
    /// the new definition.
    pub fn add_material(&mut self, name: &str, material: Material) -> MaterialId {
        if let Some(&id) = self.names.get(name) {
            log::debug!("material '{}' redefined", name);
            self.materials[id.0] = material;
            return id;
        }
        let id = MaterialId(self.materials.len());
        self.materials.push(material);
        self.names.insert(name.to_string(), id);
        id
    }

    /// Look up a material handle by name.
    pub fn material_id(&self, name: &str) -> Option<MaterialId> {
        self.names.get(name).copied()
    }

    /// Resolve a material handle. Returns None for stale or foreign
    /// handles; shading degrades to ambient-only in that case rather than
    /// failing the session.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    /// Add a primitive referencing a registered material by name.
    pub fn add_shape(&mut self, shape: impl Into<Shape>, material: &str) -> Result<(), SceneError> {
        let id = self
            .material_id(material)
            .ok_or_else(|| SceneError::UnknownMaterial(material.to_string()))?;
        self.primitives.push(Primitive {
            shape: shape.into(),
            material: id,
        });
        Ok(())
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Nearest forward intersection along `ray`, or None if every
    /// primitive misses.
    ///
    /// Linear scan over all primitives; the strict `<` comparison means
    /// the first primitive in insertion order wins distance ties, keeping
    /// results reproducible for identical scenes and rays.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit> {
        let mut best_t = f32::INFINITY;
        let mut best: Option<&Primitive> = None;

        for primitive in &self.primitives {
            let t = primitive.shape.intersect(ray);
            if t < best_t {
                best_t = t;
                best = Some(primitive);
            }
        }

        best.map(|primitive| {
            let point = ray.at(best_t);
            Hit {
                t: best_t,
                point,
                normal: primitive.shape.closest_normal(point),
                material: primitive.material,
            }
        })
    }

}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
