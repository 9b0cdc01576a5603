//! Stochastic path tracing.
//!
//! Iterative bounce loop with cosine-weighted hemisphere sampling for
//! diffuse surfaces, perfect specular bounces for mirrors and Russian
//! roulette termination after the first few bounces. All randomness
//! comes from the caller-supplied generator, so a fixed seed replays the
//! exact same path.

use prism_core::{Color, Scene};
use prism_math::{Ray, Vec3, EPS};
use rand::Rng;

use crate::whitted::reflect;

const MAX_DEPTH: u32 = 8;
const RR_START: u32 = 3;

/// One Monte Carlo estimate of the radiance arriving along `ray`.
pub fn path_trace<R: Rng>(scene: &Scene, ray: &Ray, rng: &mut R) -> Color {
    let mut radiance = Color::ZERO;
    let mut throughput = Color::ONE;
    let mut current = *ray;

    for depth in 0..MAX_DEPTH {
        let Some(hit) = scene.nearest_hit(&current) else {
            break;
        };
        let Some(material) = scene.material(hit.material) else {
            radiance += throughput * scene.ambient;
            break;
        };

        if material.emissive {
            radiance += throughput * material.diffuse;
            break;
        }

        if material.is_mirror() {
            throughput *= material.specular;
            let dir = reflect(current.direction.normalize(), hit.normal);
            current = Ray::new(hit.point + hit.normal * EPS, dir);
        } else {
            radiance += throughput * scene.ambient * material.diffuse;
            throughput *= material.diffuse;
            let dir = cosine_sample_hemisphere(hit.normal, rng);
            current = Ray::new(hit.point + hit.normal * EPS, dir);
        }

        if depth >= RR_START {
            let q = throughput.max_element().clamp(0.05, 0.95);
            if rng.gen::<f32>() > q {
                break;
            }
            throughput /= q;
        }
    }

    radiance
}

/// Cosine-weighted direction on the hemisphere around `normal`.
fn cosine_sample_hemisphere<R: Rng>(normal: Vec3, rng: &mut R) -> Vec3 {
    let r1: f32 = rng.gen();
    let r2: f32 = rng.gen();
    let phi = 2.0 * std::f32::consts::PI * r1;
    let radius = r2.sqrt();
    let local = Vec3::new(
        radius * phi.cos(),
        radius * phi.sin(),
        (1.0 - r2).max(0.0).sqrt(),
    );

    let (tangent, bitangent) = build_onb(normal);
    (local.x * tangent + local.y * bitangent + local.z * normal).normalize()
}

/// Branchless orthonormal basis around a unit vector (Duff et al.).
fn build_onb(n: Vec3) -> (Vec3, Vec3) {
    let sign = 1.0_f32.copysign(n.z);
    let a = -1.0 / (sign + n.z);
    let b = n.x * n.y * a;
    (
        Vec3::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x),
        Vec3::new(b, sign + n.y * n.y * a, -n.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Material, Plane};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_miss_is_black() {
        let scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(7);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert_eq!(path_trace(&scene, &ray, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_emissive_hit_returns_radiance() {
        let mut scene = Scene::new();
        scene.add_material("light", Material::emitter(Color::splat(3.0)));
        scene
            .add_shape(Plane::new(Vec3::new(0.0, 0.0, -1.0), Vec3::Z), "light")
            .unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(path_trace(&scene, &ray, &mut rng), Color::splat(3.0));
    }

    #[test]
    fn test_fixed_seed_replays_the_same_path() {
        let mut scene = Scene::new();
        scene.ambient = Color::splat(0.1);
        scene.add_material("grey", Material::diffuse(Color::splat(0.5)));
        scene
            .add_shape(Plane::new(Vec3::ZERO, Vec3::Y), "grey")
            .unwrap();
        scene
            .add_shape(Plane::new(Vec3::new(0.0, 4.0, 0.0), Vec3::NEG_Y), "grey")
            .unwrap();

        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let a = path_trace(&scene, &ray, &mut StdRng::seed_from_u64(42));
        let b = path_trace(&scene, &ray, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_onb_is_orthonormal() {
        for n in [Vec3::Y, Vec3::NEG_Z, Vec3::new(1.0, 2.0, -0.5).normalize()] {
            let (t, b) = build_onb(n);
            assert!((t.length() - 1.0).abs() < 1e-5);
            assert!((b.length() - 1.0).abs() < 1e-5);
            assert!(t.dot(n).abs() < 1e-5);
            assert!(b.dot(n).abs() < 1e-5);
            assert!(t.dot(b).abs() < 1e-5);
        }
    }

    #[test]
    fn test_hemisphere_samples_face_the_normal() {
        let mut rng = StdRng::seed_from_u64(9);
        let normal = Vec3::new(0.3, 0.8, -0.2).normalize();
        for _ in 0..200 {
            let dir = cosine_sample_hemisphere(normal, &mut rng);
            assert!(dir.dot(normal) >= 0.0);
            assert!((dir.length() - 1.0).abs() < 1e-4);
        }
    }
}
