//! Progressive patch-based render loop.
//!
//! The frame is refined one patch at a time: a patch is a contiguous run
//! of pixels in the flattened row-major index space, and each call to
//! [`ProgressiveRenderer::render_patch`] traces one new jittered sample
//! for every pixel of the next patch, fanned out over the rayon thread
//! pool. The cursor wraps at the end of the index space so refinement
//! continues indefinitely; the caller decides when to stop.

use prism_core::{Color, Scene};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::film::Film;
use crate::path::path_trace;
use crate::tonemap::to_display;
use crate::whitted::ray_trace;

/// Which light transport estimator drives sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingMode {
    /// Deterministic direct lighting with mirror reflection.
    Ray,
    /// Stochastic global illumination.
    Path,
}

/// Owns the accumulation state for one progressive render session.
pub struct ProgressiveRenderer {
    scene: Scene,
    camera: Camera,
    mode: TracingMode,
    film: Film,
    frame: Vec<u8>,
    cursor: usize,
    patch_size: usize,
    seed: u64,
    passes: u64,
}

impl ProgressiveRenderer {
    pub fn new(
        scene: Scene,
        camera: Camera,
        mode: TracingMode,
        width: usize,
        height: usize,
        patch_size: usize,
        seed: u64,
    ) -> Self {
        let total = width * height;
        let patch_size = patch_size.clamp(1, total.max(1));
        log::info!(
            "render session: {}x{}, patch {} px, {:?} mode, seed {}",
            width,
            height,
            patch_size,
            mode,
            seed
        );
        Self {
            scene,
            camera,
            mode,
            film: Film::new(width, height),
            frame: vec![0; total * 4],
            cursor: 0,
            patch_size,
            seed,
            passes: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.film.width()
    }

    pub fn height(&self) -> usize {
        self.film.height()
    }

    /// Tonemapped RGBA framebuffer, row-major, 4 bytes per pixel.
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    pub fn film(&self) -> &Film {
        &self.film
    }

    /// Completed full sweeps of the index space.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Trace one sample for every pixel of the next patch and rewrite
    /// the affected framebuffer bytes.
    ///
    /// Patches truncate at the top of the index space instead of
    /// wrapping mid-patch, so every sweep samples each pixel exactly
    /// once regardless of whether the patch size divides the pixel
    /// count.
    pub fn render_patch(&mut self) {
        let total = self.film.width() * self.film.height();
        if total == 0 {
            return;
        }
        let start = self.cursor;
        let len = self.patch_size.min(total - start);
        let width = self.film.width();
        let height = self.film.height();

        let scene = &self.scene;
        let camera = &self.camera;
        let mode = self.mode;
        let seed = self.seed;

        self.film.pixels_mut()[start..start + len]
            .par_iter_mut()
            .zip(self.frame[start * 4..(start + len) * 4].par_chunks_mut(4))
            .enumerate()
            .for_each(|(offset, (accum, out))| {
                let index = start + offset;
                let sample = sample_pixel(
                    scene,
                    camera,
                    mode,
                    seed,
                    index,
                    accum.count,
                    width,
                    height,
                );
                accum.add_sample(sample);
                out.copy_from_slice(&to_display(accum.mean));
            });

        self.cursor = (start + len) % total;
        if self.cursor == 0 {
            self.passes += 1;
            log::debug!("pass {} complete", self.passes);
        }
    }
}

/// Trace the sample numbered `count` for the pixel at flattened index
/// `index`.
///
/// The generator is reseeded from (seed, index, count), so a sample is
/// fully determined by its coordinates and the order patches are
/// rendered in never changes the image.
#[allow(clippy::too_many_arguments)]
pub fn sample_pixel(
    scene: &Scene,
    camera: &Camera,
    mode: TracingMode,
    seed: u64,
    index: usize,
    count: u32,
    width: usize,
    height: usize,
) -> Color {
    let mut rng = SmallRng::seed_from_u64(seed ^ ((index as u64) << 32 | count as u64));
    let x = index % width;
    let y = index / width;
    let u = (x as f32 + rng.gen::<f32>()) / width as f32;
    let v = (y as f32 + rng.gen::<f32>()) / height as f32;
    let ray = camera.generate_ray(u, v);

    match mode {
        TracingMode::Ray => ray_trace(scene, &ray),
        TracingMode::Path => path_trace(scene, &ray, &mut rng),
    }
}
