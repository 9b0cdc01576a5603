//! Built-in room scene and camera presets.
//!
//! A 4x3x4 room with colored walls, three showcase objects (a wooden
//! cuboid, a metal sphere and a glazed tetrahedron) and four light
//! arrangements. One wall is replaced by a mirror depending on the
//! camera preset so the reflection faces the viewer.

use prism_core::{Color, Cuboid, Material, Plane, PointLight, Scene, SceneError, Sphere, Tetrahedron};
use prism_math::Vec3;
use prism_renderer::Camera;
use rand::Rng;

const EYE_HEIGHT: f32 = 1.5;
const VFOV: f32 = 45.0;

fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::new(r, g, b) / 255.0
}

fn mirror_material() -> Material {
    Material::mirror(rgb(37.2, 24.4, 13.2), Color::splat(0.6))
}

/// Camera preset `mode` (0-3), one per wall, all at eye height looking
/// at the room center of the facing wall.
pub fn camera_preset(mode: u8, aspect: f32) -> Camera {
    let distance = 1.5 + 1.5 * std::f32::consts::SQRT_2;
    let (look_from, look_at) = match mode {
        0 => (
            Vec3::new(0.0, EYE_HEIGHT, -4.0 + distance),
            Vec3::new(0.0, EYE_HEIGHT, -4.0),
        ),
        1 => (
            Vec3::new(0.0, EYE_HEIGHT, -distance),
            Vec3::new(0.0, EYE_HEIGHT, 0.0),
        ),
        2 => (
            Vec3::new(-2.0 + distance, EYE_HEIGHT, -2.0),
            Vec3::new(-2.0, EYE_HEIGHT, -2.0),
        ),
        _ => (
            Vec3::new(2.0 - distance, EYE_HEIGHT, -2.0),
            Vec3::new(2.0, EYE_HEIGHT, -2.0),
        ),
    };
    Camera::new(aspect, VFOV, look_from, look_at, Vec3::Y)
}

/// Assemble the room for the given light and camera presets.
///
/// With `fix` unset the three showcase objects are jittered along the
/// x axis using `rng`.
pub fn build_scene<R: Rng>(
    fix: bool,
    light_mode: u8,
    camera_mode: u8,
    rng: &mut R,
) -> Result<Scene, SceneError> {
    let mut scene = Scene::new();

    scene.add_material("ceiling", Material::diffuse(rgb(102.0, 8.0, 116.0)));
    scene.add_material("floor", Material::diffuse(rgb(140.0, 0.0, 0.0)));
    scene.add_material("wall1", Material::diffuse(rgb(122.0, 255.0, 206.0)));
    scene.add_material("wall2", Material::diffuse(rgb(134.0, 151.0, 255.0)));
    scene.add_material("wall3", Material::diffuse(rgb(255.0, 241.0, 67.0)));
    scene.add_material("wall4", Material::diffuse(rgb(255.0, 192.0, 203.0)));
    scene.add_material("wood", Material::diffuse(rgb(98.0, 42.0, 29.0)));
    scene.add_material("glaze", Material::diffuse(rgb(26.0, 79.0, 163.0)));
    scene.add_material(
        "metal",
        Material::glossy(Color::ZERO, Color::splat(0.8), 30.0),
    );
    scene.add_material("light", Material::emitter(Color::splat(20.0)));

    // The wall behind the camera becomes a mirror.
    let mirror_wall = match camera_mode {
        0 => "wall4",
        1 => "wall3",
        2 => "wall2",
        _ => "wall1",
    };
    scene.add_material(mirror_wall, mirror_material());

    scene.add_shape(Plane::new(Vec3::new(0.0, 3.0, 0.0), Vec3::NEG_Y), "ceiling")?;
    scene.add_shape(Plane::new(Vec3::ZERO, Vec3::Y), "floor")?;
    scene.add_shape(Plane::new(Vec3::new(-2.0, 0.0, 0.0), Vec3::X), "wall1")?;
    scene.add_shape(Plane::new(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_X), "wall2")?;
    scene.add_shape(Plane::new(Vec3::new(0.0, 0.0, -4.0), Vec3::Z), "wall3")?;
    scene.add_shape(Plane::new(Vec3::ZERO, Vec3::NEG_Z), "wall4")?;

    add_lights(&mut scene, light_mode, camera_mode)?;
    add_objects(&mut scene, fix, rng)?;

    scene.ambient = Color::splat(0.05);
    Ok(scene)
}

fn add_lights(scene: &mut Scene, light_mode: u8, camera_mode: u8) -> Result<(), SceneError> {
    let white = Color::ONE;
    // Large sphere poking through the ceiling as a dome luminaire; its
    // center sits so the visible cap has radius 2/3.
    let cap = 2.0_f32 / 3.0;
    let dome_radius = 5.0_f32;
    let dome_height = (dome_radius * dome_radius - cap * cap).sqrt();

    let bulb = |scene: &mut Scene, position: Vec3, intensity: f32| -> Result<(), SceneError> {
        scene.add_shape(Sphere::new(position, 0.01), "light")?;
        scene.add_light(PointLight::new(position, white * intensity));
        Ok(())
    };

    match light_mode {
        0 => {
            scene.add_shape(
                Sphere::new(Vec3::new(0.0, 3.0 + dome_height, -2.0), dome_radius),
                "light",
            )?;
            scene.add_light(PointLight::new(Vec3::new(0.0, 3.0, -2.0), white * 2.0));
            bulb(scene, Vec3::new(-1.0, 3.0, -3.0), 0.5)?;
            bulb(scene, Vec3::new(1.0, 3.0, -3.0), 0.5)?;
            bulb(scene, Vec3::new(-1.0, 3.0, -1.0), 0.5)?;
            bulb(scene, Vec3::new(1.0, 3.0, -1.0), 0.5)?;
        }
        1 => {
            scene.add_shape(
                Sphere::new(Vec3::new(0.0, 3.0 + dome_height, -2.0), dome_radius),
                "light",
            )?;
            scene.add_light(PointLight::new(Vec3::new(0.0, 3.0, -2.0), white * 2.0));
            bulb(scene, Vec3::new(0.0, 3.0, -3.25), 0.5)?;
            bulb(scene, Vec3::new(0.0, 3.0, -0.75), 0.5)?;
            bulb(scene, Vec3::new(-1.25, 3.0, -2.0), 0.5)?;
            bulb(scene, Vec3::new(1.25, 3.0, -2.0), 0.5)?;
        }
        2 => {
            bulb(scene, Vec3::new(0.0, 3.0, -2.0), 2.0)?;
            // Thin emissive panels on the walls the camera can see.
            if camera_mode < 2 {
                for x in [-2.0, 2.0] {
                    let center = Vec3::new(x, 1.5, -2.0);
                    scene.add_shape(Cuboid::new(center, 0.02, 1.0, 1.0), "light")?;
                    scene.add_light(PointLight::new(center, white));
                }
            } else {
                for z in [-4.0, 0.0] {
                    let center = Vec3::new(0.0, 1.5, z);
                    scene.add_shape(Cuboid::new(center, 1.0, 1.0, 0.02), "light")?;
                    scene.add_light(PointLight::new(center, white));
                }
            }
        }
        _ => {
            // Flat panel on the ceiling.
            let center = Vec3::new(0.0, 3.0, -2.0);
            scene.add_shape(Cuboid::new(center, 1.0, 0.02, 1.0), "light")?;
            scene.add_light(PointLight::new(center, white * 2.0));
            if camera_mode < 2 {
                bulb(scene, Vec3::new(-2.0, 1.5, -2.0), 1.0)?;
                bulb(scene, Vec3::new(2.0, 1.5, -2.0), 1.0)?;
            } else {
                bulb(scene, Vec3::new(0.0, 1.5, -4.0), 1.0)?;
                bulb(scene, Vec3::new(0.0, 1.5, 0.0), 1.0)?;
            }
        }
    }
    Ok(())
}

fn add_objects<R: Rng>(scene: &mut Scene, fix: bool, rng: &mut R) -> Result<(), SceneError> {
    let (cuboid_x, sphere_x, tetra_x) = if fix {
        (1.0, -1.0, 0.0)
    } else {
        (
            rng.gen::<f32>() + 0.5,
            -rng.gen::<f32>() / 5.0 - 0.9,
            rng.gen::<f32>() - 0.5,
        )
    };

    scene.add_shape(
        Cuboid::new(Vec3::new(cuboid_x, 1.0, -3.2), 0.8, 2.0, 0.8),
        "wood",
    )?;
    scene.add_shape(Sphere::new(Vec3::new(sphere_x, 0.8, -2.0), 0.8), "metal")?;
    scene.add_shape(
        Tetrahedron::new(
            Vec3::new(tetra_x, 0.0, -2.0),
            Vec3::new(-0.866 + tetra_x, 0.0, -0.5),
            Vec3::new(0.866 + tetra_x, 0.0, -0.5),
            Vec3::new(tetra_x, 1.414, -1.0),
        ),
        "glaze",
    )?;
    Ok(())
}
