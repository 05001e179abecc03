//! CIE 1976 L\*a\*b\* color space
//!
//! Lab is the perceptually uniform space the difference metrics operate in.
//! The conversion goes through CIE XYZ using the sRGB primaries and the D65
//! reference white (2 degree observer).
//!
//! # References
//!
//! CIE 15:2004, Colorimetry, 3rd edition.

use super::linear_rgb::LinearRgb;

/// D65 reference white, 2 degree observer.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// CIE Lab curve constants: epsilon = (6/29)^3, kappa = (29/3)^3.
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// A color in CIE 1976 L\*a\*b\* space.
///
/// Euclidean distance in this space approximates perceived color
/// difference (the CIE76 Delta E). Components:
///
/// - `l`: lightness, 0.0 (black) to 100.0 (diffuse white)
/// - `a`: green-red axis (negative = green, positive = red)
/// - `b`: blue-yellow axis (negative = blue, positive = yellow)
///
/// # Note
///
/// Values are not clamped. Out-of-gamut inputs may produce components
/// outside the typical ranges; this is intentional to keep the conversion
/// a pure total function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis: typically -128.0 to 127.0
    pub a: f64,
    /// Blue-yellow axis: typically -128.0 to 127.0
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma magnitude: `sqrt(a^2 + b^2)`.
    ///
    /// Zero for achromatic colors. Used by the metric hue difference to
    /// separate the chroma contribution from the hue contribution.
    ///
    /// # Example
    ///
    /// ```
    /// use cielab::Lab;
    ///
    /// let grey = Lab::new(50.0, 0.0, 0.0);
    /// assert_eq!(grey.chroma(), 0.0);
    ///
    /// let chromatic = Lab::new(50.0, 3.0, 4.0);
    /// assert_eq!(chromatic.chroma(), 5.0);
    /// ```
    #[inline]
    pub fn chroma(self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

impl From<LinearRgb> for Lab {
    /// Convert from linear RGB to Lab via CIE XYZ (D65).
    fn from(rgb: LinearRgb) -> Self {
        // Step 1: linear sRGB to XYZ (sRGB primaries, D65 white)
        let x = 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b;
        let y = 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b;
        let z = 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b;

        // Step 2: normalize against the reference white
        let fx = lab_curve(x / WHITE_X);
        let fy = lab_curve(y / WHITE_Y);
        let fz = lab_curve(z / WHITE_Z);

        // Step 3: Lab coordinates
        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

/// The piecewise cube-root curve of the Lab transform.
///
/// The linear segment below epsilon avoids the infinite slope of the cube
/// root near zero.
fn lab_curve(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}
