//! Linear RGB color type
//!
//! Linear RGB is the color space where values are proportional to physical
//! light intensity. The XYZ matrix step of the Lab conversion is only
//! defined over linear components, so every colorimetric conversion passes
//! through this type.

use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Values are typically in the range `0.0..=1.0`, but may fall outside it
/// for out-of-gamut intermediates. They are carried through unclamped to
/// preserve accuracy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear values.
    ///
    /// # Arguments
    /// * `r` - Red channel (typically 0.0..=1.0)
    /// * `g` - Green channel (typically 0.0..=1.0)
    /// * `b` - Blue channel (typically 0.0..=1.0)
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Convert from sRGB to linear RGB (IEC 61966-2-1 decoding).
    ///
    /// This conversion is required before any colorimetric math; sRGB's
    /// gamma encoding makes arithmetic on its components meaningless.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: decode_channel(srgb.r),
            g: decode_channel(srgb.g),
            b: decode_channel(srgb.b),
        }
    }
}

/// Gamma-decode one sRGB channel.
///
/// Mirrored around zero, matching the encoder in `srgb.rs`.
fn decode_channel(enc: f64) -> f64 {
    let (sign, mag) = (enc.signum(), enc.abs());
    let linear = if mag <= 0.04045 {
        mag / 12.92
    } else {
        ((mag + 0.055) / 1.055).powf(2.4)
    };
    sign * linear
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_endpoints() {
        let black = LinearRgb::from(Srgb::new(0.0, 0.0, 0.0));
        assert_eq!(black.r, 0.0);

        let white = LinearRgb::from(Srgb::new(1.0, 1.0, 1.0));
        assert!((white.r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_decode_linear_segment() {
        // Below the 0.04045 knee the curve is a straight division by 12.92
        let low = LinearRgb::from(Srgb::new(0.02, 0.02, 0.02));
        assert!((low.r - 0.02 / 12.92).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_through_srgb() {
        for v in [0.0, 0.001, 0.04, 0.2, 0.5, 0.73, 1.0] {
            let original = LinearRgb::new(v, v, v);
            let back = LinearRgb::from(Srgb::from(original));
            assert!(
                (back.r - v).abs() < 1e-12,
                "round trip failed for {v}: got {}",
                back.r
            );
        }
    }
}
