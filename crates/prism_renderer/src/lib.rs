//! Prism Renderer - progressive CPU ray/path tracing.
//!
//! Drives an open-ended refinement loop: each call to
//! [`ProgressiveRenderer::render_patch`] traces one jittered sample for
//! every pixel of the next patch in parallel, folds the results into
//! per-pixel running means and rewrites the tonemapped RGBA framebuffer.
//! The loop has no quality-based termination; the caller stops it on an
//! external close signal.

mod camera;
mod film;
mod path;
mod renderer;
mod tonemap;
mod whitted;

pub use camera::Camera;
pub use film::{Film, PixelAccum};
pub use path::path_trace;
pub use renderer::{sample_pixel, ProgressiveRenderer, TracingMode};
pub use tonemap::to_display;
pub use whitted::ray_trace;

/// Re-export common types for callers
pub use prism_core::{Color, Scene};
pub use prism_math::{Ray, Vec3};
