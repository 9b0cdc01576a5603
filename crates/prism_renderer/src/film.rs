//! Per-pixel sample accumulation.

use prism_core::Color;

/// Running mean of the radiance samples taken for one pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelAccum {
    pub mean: Color,
    pub count: u32,
}

impl PixelAccum {
    /// Fold one more sample into the running mean.
    ///
    /// Uses the incremental form `mean += (sample - mean) / (count + 1)`
    /// so no sample history is kept and the estimate never overflows.
    pub fn add_sample(&mut self, sample: Color) {
        self.mean += (sample - self.mean) / (self.count + 1) as f32;
        self.count += 1;
    }
}

/// The accumulation buffer for a whole frame, row-major.
pub struct Film {
    width: usize,
    height: usize,
    pixels: Vec<PixelAccum>,
}

impl Film {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![PixelAccum::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[PixelAccum] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [PixelAccum] {
        &mut self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_mean_matches_arithmetic_mean() {
        let samples = [
            Color::new(1.0, 0.0, 0.0),
            Color::new(0.0, 2.0, 0.0),
            Color::new(0.5, 0.5, 4.0),
            Color::new(3.0, 1.0, 1.0),
        ];

        let mut accum = PixelAccum::default();
        let mut sum = Color::ZERO;
        for (i, &sample) in samples.iter().enumerate() {
            accum.add_sample(sample);
            sum += sample;
            let expected = sum / (i + 1) as f32;
            assert!((accum.mean - expected).length() < 1e-6);
            assert_eq!(accum.count, (i + 1) as u32);
        }
    }

    #[test]
    fn test_constant_samples_stay_constant() {
        let sample = Color::new(0.25, 0.5, 0.75);
        let mut accum = PixelAccum::default();
        for _ in 0..100 {
            accum.add_sample(sample);
            assert!((accum.mean - sample).length() < 1e-5);
        }
    }

    #[test]
    fn test_film_is_zero_initialized() {
        let film = Film::new(4, 3);
        assert_eq!(film.pixels().len(), 12);
        assert!(film
            .pixels()
            .iter()
            .all(|p| p.count == 0 && p.mean == Color::ZERO));
    }
}
