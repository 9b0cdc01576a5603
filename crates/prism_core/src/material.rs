//! Material definitions for surface shading.

use prism_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Stable handle into a scene's material table.
///
/// Primitives hold one of these instead of a reference so the scene can be
/// shared freely across worker threads without lifetime coupling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialId(pub(crate) usize);

impl MaterialId {
    /// Index into the owning scene's material table.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Surface material: diffuse and specular colors, a shininess/mirror
/// indicator and an emissive flag.
///
/// A negative shininess marks a perfect mirror; a positive value is the
/// Phong exponent for glossy highlights. Emissive materials report their
/// diffuse color as radiance and terminate light transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
    pub shininess: f32,
    pub emissive: bool,
}

impl Material {
    /// Purely diffuse surface.
    pub fn diffuse(diffuse: Color) -> Self {
        Self {
            diffuse,
            specular: Color::ZERO,
            shininess: 0.0,
            emissive: false,
        }
    }

    /// Diffuse surface with a Phong highlight.
    pub fn glossy(diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            diffuse,
            specular,
            shininess,
            emissive: false,
        }
    }

    /// Perfect mirror with a diffuse base coat.
    pub fn mirror(diffuse: Color, specular: Color) -> Self {
        Self {
            diffuse,
            specular,
            shininess: -1.0,
            emissive: false,
        }
    }

    /// Light emitter; `radiance` is returned directly by the transport code.
    pub fn emitter(radiance: Color) -> Self {
        Self {
            diffuse: radiance,
            specular: Color::ZERO,
            shininess: 0.0,
            emissive: true,
        }
    }

    /// True for perfect mirrors (negative shininess).
    pub fn is_mirror(&self) -> bool {
        self.shininess < 0.0
    }
}
