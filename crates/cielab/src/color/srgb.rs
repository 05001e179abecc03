//! sRGB color type
//!
//! sRGB is the standard color space for display and storage. It applies a
//! gamma curve to linear light values for perceptual uniformity, so it is
//! the right space for output (CSS strings, byte triples) and the wrong
//! space for arithmetic.

use super::hsl::Hsl;
use super::linear_rgb::LinearRgb;

/// A color in sRGB color space.
///
/// Values are in the range `0.0..=1.0` for in-gamut colors (mapping to
/// `0..=255` for 8-bit output). Out-of-gamut inputs are carried through
/// unclamped; only [`Srgb::to_bytes`] clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: f64,
    /// Green channel (gamma-encoded)
    pub g: f64,
    /// Blue channel (gamma-encoded)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    ///
    /// # Arguments
    /// * `r` - Red channel (typically 0.0..=1.0)
    /// * `g` - Green channel (typically 0.0..=1.0)
    /// * `b` - Blue channel (typically 0.0..=1.0)
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert to a byte array `[R, G, B]`.
    ///
    /// Rounds and clamps each channel to the `0..=255` range.
    ///
    /// # Example
    /// ```
    /// use cielab::Srgb;
    ///
    /// let color = Srgb::new(1.0, 0.5, 0.0);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }
}

impl From<Hsl> for Srgb {
    /// Convert from HSL to sRGB.
    ///
    /// The hue is wrapped into `[0, 360)` first; saturation and lightness
    /// are used as given. For `s == 0` all channels equal the lightness.
    fn from(hsl: Hsl) -> Self {
        if hsl.s == 0.0 {
            return Self::new(hsl.l, hsl.l, hsl.l);
        }

        let h = Hsl::wrap_hue(hsl.h) / 360.0;
        let q = if hsl.l < 0.5 {
            hsl.l * (1.0 + hsl.s)
        } else {
            hsl.l + hsl.s - hsl.l * hsl.s
        };
        let p = 2.0 * hsl.l - q;

        Self::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

/// One channel of the piecewise HSL reconstruction.
///
/// `t` is the channel's position on the hue wheel as a fraction of a turn;
/// callers pass `h`, `h + 1/3`, and `h - 1/3` for green, red, and blue.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl From<LinearRgb> for Srgb {
    /// Convert from linear RGB to sRGB (IEC 61966-2-1 encoding).
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: encode_channel(linear.r),
            g: encode_channel(linear.g),
            b: encode_channel(linear.b),
        }
    }
}

/// Gamma-encode one linear channel.
///
/// The curve is mirrored around zero so out-of-gamut negative values
/// survive a round trip instead of collapsing to NaN.
pub(crate) fn encode_channel(lin: f64) -> f64 {
    let (sign, mag) = (lin.signum(), lin.abs());
    let encoded = if mag <= 0.0031308 {
        mag * 12.92
    } else {
        1.055 * mag.powf(1.0 / 2.4) - 0.055
    };
    sign * encoded
}
