//! Linear-radiance to display-byte conversion.

use prism_core::Color;

const INV_GAMMA: f32 = 1.0 / 2.2;

/// Tonemap a linear radiance value to an RGBA display pixel.
///
/// Each channel is clamped to [0, 1], gamma-encoded with exponent 1/2.2
/// and quantized to a byte; alpha is always opaque.
pub fn to_display(color: Color) -> [u8; 4] {
    let quantize = |c: f32| (c.clamp(0.0, 1.0).powf(INV_GAMMA) * 255.0).round() as u8;
    [
        quantize(color.x),
        quantize(color.y),
        quantize(color.z),
        255,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white_endpoints() {
        assert_eq!(to_display(Color::ZERO), [0, 0, 0, 255]);
        assert_eq!(to_display(Color::ONE), [255, 255, 255, 255]);
    }

    #[test]
    fn test_out_of_range_values_clamp() {
        assert_eq!(to_display(Color::splat(40.0)), [255, 255, 255, 255]);
        assert_eq!(to_display(Color::splat(-1.0)), [0, 0, 0, 255]);
    }

    #[test]
    fn test_gamma_brightens_midtones() {
        let [r, _, _, _] = to_display(Color::splat(0.5));
        // 0.5^(1/2.2) * 255 ~ 186, well above the linear 128.
        assert_eq!(r, 186);
    }
}
