//! Deterministic single-bounce ray tracing.
//!
//! Direct illumination with shadow rays, Phong highlights and recursive
//! mirror reflection up to a fixed depth. Pure in its inputs: the same
//! scene and ray always produce the same radiance.

use prism_core::{Color, Scene};
use prism_math::{Ray, Vec3, EPS};

/// Mirror reflection recursion limit.
const MAX_DEPTH: u32 = 4;

/// Radiance arriving along `ray`, estimated deterministically.
pub fn ray_trace(scene: &Scene, ray: &Ray) -> Color {
    trace(scene, ray, MAX_DEPTH)
}

fn trace(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    let Some(hit) = scene.nearest_hit(ray) else {
        return Color::ZERO;
    };
    // Unresolvable materials degrade to ambient-only shading.
    let Some(material) = scene.material(hit.material) else {
        return scene.ambient;
    };
    if material.emissive {
        return material.diffuse;
    }

    let view = -ray.direction.normalize();
    let mut color = scene.ambient * material.diffuse;

    for light in &scene.lights {
        let to_light = light.position - hit.point;
        let distance = to_light.length();
        if distance <= EPS {
            continue;
        }
        let dir = to_light / distance;

        let shadow_ray = Ray::new(hit.point + hit.normal * EPS, dir);
        if shadowed(scene, &shadow_ray, distance) {
            continue;
        }

        let cos = hit.normal.dot(dir).max(0.0);
        if cos > 0.0 {
            color += material.diffuse * light.intensity * cos;
        }
        if material.shininess > 0.0 {
            let reflected = reflect(-dir, hit.normal);
            let highlight = view.dot(reflected).max(0.0).powf(material.shininess);
            color += material.specular * light.intensity * highlight;
        }
    }

    if material.is_mirror() && depth > 0 {
        let reflected = reflect(ray.direction.normalize(), hit.normal);
        let bounce = Ray::new(hit.point + hit.normal * EPS, reflected);
        color += material.specular * trace(scene, &bounce, depth - 1);
    }

    color
}

/// Shadow test towards a light at distance `max_t`. Emissive primitives
/// do not block: the light fixtures sit exactly on the point lights and
/// would otherwise shadow them.
fn shadowed(scene: &Scene, ray: &Ray, max_t: f32) -> bool {
    scene.primitives().iter().any(|primitive| {
        primitive.shape.intersect(ray) < max_t
            && scene
                .material(primitive.material)
                .map_or(true, |m| !m.emissive)
    })
}

pub(crate) fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
