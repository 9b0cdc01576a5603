//! Prism viewer - progressive render loop driving a window.

mod config;
mod display;
mod presets;

use anyhow::{Context, Result};
use clap::Parser;
use prism_renderer::ProgressiveRenderer;
use rand::Rng;

use config::Config;
use display::Display;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = Config::parse();
    let mut rng = rand::thread_rng();

    // Unspecified presets are drawn at random, like a gallery shuffle.
    let light_mode = config.light.unwrap_or_else(|| rng.gen_range(0..4));
    let camera_mode = config.camera.unwrap_or_else(|| rng.gen_range(0..4));
    let seed = config.seed.unwrap_or_else(|| rng.gen());
    log::info!(
        "light preset {}, camera preset {}, objects {}",
        light_mode,
        camera_mode,
        if config.fix { "fixed" } else { "shuffled" }
    );

    let scene = presets::build_scene(config.fix, light_mode, camera_mode, &mut rng)
        .context("failed to assemble scene")?;
    let aspect = config.width as f32 / config.height as f32;
    let camera = presets::camera_preset(camera_mode, aspect);

    let mut renderer = ProgressiveRenderer::new(
        scene,
        camera,
        config.tracing.into(),
        config.width,
        config.height,
        config.patch_size,
        seed,
    );

    let mut display = Display::new("Prism", config.width, config.height)
        .context("failed to open window")?;

    while display.is_open() {
        renderer.render_patch();
        display.present(renderer.frame())?;
    }
    log::info!("closing after {} full passes", renderer.passes());

    if let Some(path) = &config.output {
        let image = image::RgbaImage::from_raw(
            config.width as u32,
            config.height as u32,
            renderer.frame().to_vec(),
        )
        .context("framebuffer size mismatch")?;
        image
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}
