//! Command line configuration.

use clap::{Parser, ValueEnum};
use prism_renderer::TracingMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tracing {
    Ray,
    Path,
}

impl From<Tracing> for TracingMode {
    fn from(tracing: Tracing) -> Self {
        match tracing {
            Tracing::Ray => TracingMode::Ray,
            Tracing::Path => TracingMode::Path,
        }
    }
}

/// Progressive CPU ray/path tracer.
#[derive(Debug, Parser)]
#[command(name = "prism", version, about)]
pub struct Config {
    /// Fix the movable objects at their default positions
    #[arg(long)]
    pub fix: bool,

    /// Light arrangement (0-3); chosen at random when omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub light: Option<u8>,

    /// Camera viewpoint (0-3); chosen at random when omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub camera: Option<u8>,

    /// Light transport estimator
    #[arg(long, value_enum, default_value_t = Tracing::Ray)]
    pub tracing: Tracing,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// Pixels refined per display update
    #[arg(long, default_value_t = 50_000)]
    pub patch_size: usize,

    /// Sampling seed; a random one is drawn when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the final frame to this PNG on exit
    #[arg(long)]
    pub output: Option<std::path::PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["prism"]);
        assert!(!config.fix);
        assert_eq!(config.light, None);
        assert_eq!(config.camera, None);
        assert_eq!(config.tracing, Tracing::Ray);
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.patch_size, 50_000);
    }

    #[test]
    fn test_mode_range_is_enforced() {
        assert!(Config::try_parse_from(["prism", "--light", "4"]).is_err());
        assert!(Config::try_parse_from(["prism", "--camera", "3"]).is_ok());
    }

    #[test]
    fn test_tracing_values() {
        let config = Config::parse_from(["prism", "--tracing", "path"]);
        assert_eq!(TracingMode::from(config.tracing), TracingMode::Path);
    }
}
